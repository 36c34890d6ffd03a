use std::time::Duration;

use floem::{
    peniko::Color,
    reactive::{RwSignal, SignalGet},
    unit::UnitExt,
    views::{empty, stack, stack_from_iter, Decorators, Stack},
};
use nautilus_store::anim::{pulse, Particle, BACKDROP_PERIOD, PARTICLE_COUNT, PARTICLE_FRAME};
use rand::Rng;

use crate::timer;

fn scatter(count: usize) -> Vec<Particle> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay: Duration::from_secs_f64(rng.gen_range(0.0..3.0)),
            period: Duration::from_secs_f64(rng.gen_range(2.0..5.0)),
        })
        .collect()
}

/// Dim cyan dots and a slowly breathing tint behind everything else.
pub fn particles() -> Stack {
    let elapsed = RwSignal::new(Duration::ZERO);
    timer::every(PARTICLE_FRAME, elapsed, |elapsed| {
        *elapsed += PARTICLE_FRAME;
        true
    });

    let dots = stack_from_iter(scatter(PARTICLE_COUNT).into_iter().map(move |particle| {
        empty().style(move |s| {
            let alpha = particle.opacity(elapsed.get()) * 255.0;
            s.absolute()
                .inset_left(particle.left.pct())
                .inset_top(particle.top.pct())
                .size(4.0, 4.0)
                .border_radius(2.0)
                .background(Color::rgba8(34, 211, 238, alpha.round() as u8))
        })
    }))
    .style(|s| s.absolute().size_full());

    let tint = empty().style(move |s| {
        let alpha = 13.0 * pulse(elapsed.get(), BACKDROP_PERIOD);
        s.absolute()
            .size_full()
            .background(Color::rgba8(22, 78, 99, alpha.round() as u8))
    });

    stack((dots, tint)).style(|s| s.absolute().inset(0.0).size_full())
}
