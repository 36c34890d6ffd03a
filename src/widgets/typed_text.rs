use floem::{
    reactive::{RwSignal, SignalGet, SignalWith},
    views::{h_stack, label, Decorators},
    IntoView,
};
use nautilus_store::anim::{Blink, TypedText, BLINK_INTERVAL, TYPE_INTERVAL};

use crate::{theme, timer};

/// Types `content` out one character at a time behind a blinking cursor.
pub fn typed_text(content: &'static str, font_size: f64) -> impl IntoView {
    let typed = RwSignal::new(TypedText::new(content));
    let cursor = RwSignal::new(Blink::default());

    timer::every(TYPE_INTERVAL, typed, TypedText::tick);
    timer::every(BLINK_INTERVAL, cursor, |blink| {
        blink.toggle();
        true
    });

    h_stack((
        label(move || typed.with(|typed| typed.visible().to_owned())),
        label(|| "|".to_owned()).style(move |s| {
            let color = if cursor.get().0 {
                theme::CYAN_400
            } else {
                theme::NAV_CLEAR
            };
            s.color(color)
        }),
    ))
    .style(move |s| s.font_size(font_size).font_bold().color(theme::WHITE))
}
