use floem::{
    reactive::{RwSignal, SignalGet},
    views::{empty, h_stack, label, Decorators, Stack},
};
use nautilus_store::anim::{PlayerCount, PLAYER_INTERVAL, PLAYER_PULSE};
use rand::Rng;

use crate::{theme, timer};

/// The online-player badge. The count is simulated; nothing is polled.
pub fn server_status(compact: bool) -> Stack {
    let count = RwSignal::new(PlayerCount::default());

    timer::every(PLAYER_INTERVAL, count, move |players| {
        players.begin_pulse();
        timer::after(PLAYER_PULSE, count, |players| {
            players.settle(rand::thread_rng().gen_range(PlayerCount::DELTA));
        });
        true
    });

    h_stack((
        empty().style(|s| {
            s.size(8.0, 8.0)
                .border_radius(4.0)
                .background(theme::GREEN_400)
        }),
        label(move || {
            let players = count.get().players;
            if compact {
                format!("{players}/{}", PlayerCount::MAX)
            } else {
                format!("{players}/{} Çevrimiçi", PlayerCount::MAX)
            }
        })
        .style(move |s| {
            s.font_bold()
                .apply_if(count.get().animating, |s| s.color(theme::WHITE))
        }),
    ))
    .style(move |s| {
        theme::pill(s, theme::GREEN_400)
            .items_center()
            .gap(8.0)
            .font_size(if compact { 12.0 } else { 14.0 })
    })
}
