//! Reactive state for the Nautilus PvP site.
//!
//! Everything in this crate is independent of the view layer. State lives in
//! [`floem_reactive`] signals so that views can subscribe to it, and every
//! store is a `Copy` handle that can be moved freely into event handlers.
//!
//! - [`PathStore`] holds the current path and the back/forward history.
//! - [`Router`] resolves a path to a handler with a not-found fallback.
//! - [`CartStore`] is the in-memory shopping cart.
//! - [`CategorySelector`] filters the static [`catalog`] by category.
//! - [`anim`] contains the small state machines behind the cosmetic widgets.
//! - [`clipboard`] implements the best-effort copy with a fallback backend.

pub mod anim;
pub mod cart;
pub mod catalog;
pub mod category;
pub mod clipboard;
pub mod path;
pub mod price;
pub mod router;

pub use cart::{CartEntry, CartStore};
pub use catalog::{Category, GameMode, ModeStatus, Product};
pub use category::CategorySelector;
pub use clipboard::{copy_with_fallback, ClipboardBackend, ClipboardError, CopyOutcome};
pub use path::PathStore;
pub use price::Price;
pub use router::{Resolved, Route, Router};
