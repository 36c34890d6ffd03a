use floem::{
    views::{container, Container, Decorators},
    IntoView,
};

use crate::theme;

/// A rounded translucent panel. Hoverable cards pick up an accent border.
pub fn glow_card(child: impl IntoView + 'static, hoverable: bool) -> Container {
    container(child).style(move |s| {
        s.flex_col()
            .padding(24.0)
            .border(1.0)
            .border_radius(16.0)
            .border_color(theme::GRAY_700)
            .background(theme::SURFACE)
            .apply_if(hoverable, |s| {
                s.hover(|s| s.border_color(theme::CYAN_500).background(theme::SURFACE_RAISED))
            })
    })
}
