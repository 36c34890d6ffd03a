//! Fade-in on first sight.
//!
//! A section reports its layout box, the page's scroll view reports the
//! viewport, and an effect records the section in a [`Reveal`] set once
//! enough of it has been on screen. Revealed sections stay revealed for the
//! lifetime of the page.

use floem::{
    kurbo::Rect,
    reactive::{create_effect, RwSignal, SignalGet, SignalUpdate, SignalWith},
    views::{container, Container, Decorators},
    IntoView,
};
use nautilus_store::anim::Reveal;

use crate::{app::Viewport, theme};

#[derive(Clone, Copy, Debug)]
pub struct RevealScope {
    revealed: RwSignal<Reveal>,
    viewport: RwSignal<Viewport>,
}

impl RevealScope {
    pub fn new(viewport: RwSignal<Viewport>) -> Self {
        Self {
            revealed: RwSignal::new(Reveal::default()),
            viewport,
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.with(|revealed| revealed.is_revealed(id))
    }
}

/// Wraps `child` so that it is drawn dimmed until it has scrolled into view.
pub fn reveal_section(
    scope: RevealScope,
    id: &'static str,
    child: impl IntoView + 'static,
) -> Container {
    let bounds = RwSignal::new(None::<Rect>);

    create_effect(move |_| {
        let Some(rect) = bounds.get() else {
            return;
        };
        let viewport = scope.viewport.get();
        let mut next = scope.revealed.get_untracked();
        if next.observe(id, rect.y0, rect.height(), viewport.top, viewport.height) {
            tracing::trace!(section = id, "revealed");
            scope.revealed.set(next);
        }
    });

    container(child)
        .on_resize(move |rect| bounds.set(Some(rect)))
        .style(move |s| {
            s.width_full()
                .items_center()
                .flex_col()
                .apply_if(!scope.is_revealed(id), |s| s.color(theme::GRAY_600))
        })
}
