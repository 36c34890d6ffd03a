use floem::{
    reactive::{RwSignal, SignalGet, SignalUpdate},
    unit::UnitExt,
    views::{h_stack, label, text, v_stack, Decorators},
    IntoView,
};
use nautilus_store::anim::{CopyFeedback, COPY_POPUP_HOLD};
use tracing::info;

use crate::{clipboard, theme, timer};

/// Copies the server address and, on success, raises the "IP copied" popup.
pub fn join_server(popup: RwSignal<CopyFeedback>, address: &str) {
    let outcome = clipboard::copy_text(address);
    info!(?outcome, address, "join requested");
    if !outcome.shows_indicator() {
        return;
    }
    let mut generation = 0;
    popup.update(|popup| generation = popup.show());
    timer::after(COPY_POPUP_HOLD, popup, move |popup| popup.expire(generation));
}

/// The floating confirmation shown after [`join_server`].
pub fn ip_popup(popup: RwSignal<CopyFeedback>, address: &'static str) -> impl IntoView {
    h_stack((
        text("✓").style(|s| s.font_size(24.0)),
        v_stack((
            text("IP Kopyalandı!").style(|s| s.font_size(18.0).font_bold()),
            label(move || format!("{address} panoya kopyalandı")).style(|s| s.font_size(13.0)),
        )),
    ))
    .style(move |s| {
        s.absolute()
            .inset_top(80.0)
            .inset_left(50.pct())
            .margin_left(-160.0)
            .width(320.0)
            .z_index(50)
            .items_center()
            .gap(12.0)
            .padding_horiz(24.0)
            .padding_vert(16.0)
            .border_radius(12.0)
            .background(theme::GREEN_500)
            .color(theme::BACKGROUND)
            .apply_if(!popup.get().is_shown(), |s| s.hide())
    })
}
