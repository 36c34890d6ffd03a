use floem::views::{container, text, Decorators};
use floem::IntoView;

use crate::theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoSize {
    Small,
    Normal,
    XLarge,
}

impl LogoSize {
    fn side(self) -> f64 {
        match self {
            LogoSize::Small => 32.0,
            LogoSize::Normal => 48.0,
            LogoSize::XLarge => 128.0,
        }
    }
}

/// The "N" badge.
pub fn logo(size: LogoSize) -> impl IntoView {
    let side = size.side();
    container(text("N").style(move |s| {
        s.font_size(side * 0.45).font_bold().color(theme::WHITE)
    }))
    .style(move |s| {
        s.size(side, side)
            .items_center()
            .justify_center()
            .border_radius(side * 0.25)
            .background(theme::BLUE_500)
            .border(2.0)
            .border_color(theme::CYAN_400)
    })
}
