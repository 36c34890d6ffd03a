//! Presentational building blocks shared by the pages.

pub mod button;
pub mod card;
pub mod copy_button;
pub mod count_up;
pub mod logo;
pub mod particles;
pub mod popup;
pub mod reveal;
pub mod server_status;
pub mod typed_text;

pub use button::{glow_button, Size, Variant};
pub use card::glow_card;
pub use copy_button::copy_button;
pub use count_up::count_up;
pub use logo::{logo, LogoSize};
pub use particles::particles;
pub use popup::{ip_popup, join_server};
pub use reveal::{reveal_section, RevealScope};
pub use server_status::server_status;
pub use typed_text::typed_text;
