use floem::{
    reactive::{RwSignal, SignalGet, SignalUpdate},
    style::CursorStyle,
    views::{button, h_stack, label, text, v_stack, Decorators},
    IntoView,
};
use nautilus_store::anim::{CopyFeedback, COPY_BUTTON_HOLD};

use crate::{clipboard, theme, timer};

/// Copies `value` on click and flips to a "copied" state for a moment.
pub fn copy_button(value: String, caption: &'static str) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());
    let shown = value.clone();

    button(
        h_stack((
            v_stack((
                text(shown).style(|s| s.font_size(22.0).font_bold().color(theme::CYAN_400)),
                label(move || {
                    if feedback.get().is_shown() {
                        "Panoya kopyalandı!".to_owned()
                    } else {
                        format!("{caption} kopyalamak için tıkla")
                    }
                })
                .style(theme::muted),
            ))
            .style(|s| s.gap(4.0).flex_grow(1.0)),
            label(move || {
                let icon = if feedback.get().is_shown() { "✓" } else { "⧉" };
                icon.to_owned()
            })
            .style(move |s| {
                let color = if feedback.get().is_shown() {
                    theme::GREEN_400
                } else {
                    theme::GRAY_400
                };
                s.font_size(22.0).color(color)
            }),
        ))
        .style(|s| s.width_full().items_center().justify_between()),
    )
    .action(move || {
        if clipboard::copy_text(&value).shows_indicator() {
            let mut generation = 0;
            feedback.update(|feedback| generation = feedback.show());
            timer::after(COPY_BUTTON_HOLD, feedback, move |feedback| {
                feedback.expire(generation)
            });
        }
    })
    .style(move |s| {
        let copied = feedback.get().is_shown();
        s.width_full()
            .padding_horiz(20.0)
            .padding_vert(16.0)
            .border(1.0)
            .border_radius(12.0)
            .border_color(if copied { theme::GREEN_500 } else { theme::GRAY_600 })
            .background(theme::GRAY_800)
            .cursor(CursorStyle::Pointer)
            .hover(|s| s.border_color(theme::CYAN_400))
    })
}
