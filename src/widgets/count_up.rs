use floem::{
    reactive::{RwSignal, SignalGet},
    views::{label, Label},
};
use nautilus_store::anim::{CountUp, COUNT_DURATION, COUNT_FRAME};

use crate::timer;

/// Counts from zero to `target` over the default duration, then shows
/// `target` followed by `suffix`.
pub fn count_up(target: u32, suffix: &'static str) -> Label {
    let count = RwSignal::new(CountUp::new(target, COUNT_DURATION, COUNT_FRAME));
    timer::every(COUNT_FRAME, count, CountUp::tick);
    label(move || format!("{}{suffix}", count.get().display()))
}
