//! The in-memory shopping cart.

use floem_reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith};
use imbl::Vector;
use tracing::debug;

use crate::{catalog::Product, price::Price};

/// One cart line: a catalog product and how many of it were added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartEntry {
    pub product: &'static Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn id(&self) -> u32 {
        self.product.id
    }

    pub fn name(&self) -> &'static str {
        self.product.name
    }

    pub fn unit_price(&self) -> Price {
        self.product.price
    }

    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Ordered cart lines, at most one per product id.
///
/// The entries are kept in an [`imbl::Vector`] so that views can clone the
/// whole list cheaply on every change.
#[derive(Clone, Copy, Debug)]
pub struct CartStore {
    entries: RwSignal<Vector<CartEntry>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vector::new()),
        }
    }

    /// Adds one unit of `product`, merging with an existing line.
    pub fn add(&self, product: &'static Product) {
        debug!(id = product.id, name = product.name, "add to cart");
        self.entries.update(|entries| {
            match entries.iter_mut().find(|entry| entry.id() == product.id) {
                Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
                None => entries.push_back(CartEntry {
                    product,
                    quantity: 1,
                }),
            }
        });
    }

    /// Removes the whole line for `id`, whatever its quantity.
    pub fn remove(&self, id: u32) {
        debug!(id, "remove from cart");
        self.entries.update(|entries| entries.retain(|entry| entry.id() != id));
    }

    /// Sum of `unit price * quantity` over every line.
    pub fn total(&self) -> Price {
        self.entries
            .with(|entries| entries.iter().map(CartEntry::line_total).sum())
    }

    pub fn entries(&self) -> Vector<CartEntry> {
        self.entries.get()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.entries.with(|entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.with(|entries| entries.is_empty())
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.entries.with(|entries| {
            entries
                .iter()
                .fold(0u32, |count, entry| count.saturating_add(entry.quantity))
        })
    }

    pub fn quantity_of(&self, id: u32) -> Option<u32> {
        self.entries.with(|entries| {
            entries
                .iter()
                .find(|entry| entry.id() == id)
                .map(|entry| entry.quantity)
        })
    }
}
