//! Repeating and one-shot timers that step a signal.
//!
//! Timers stop by themselves once the signal they drive has been disposed,
//! which happens when the view that created it is torn down.

use std::{rc::Rc, time::Duration};

use floem::{
    action::exec_after,
    reactive::{RwSignal, SignalUpdate},
};

/// Calls `step` on `state` every `interval` until it returns `false` or the
/// signal is gone.
pub fn every<T: 'static>(
    interval: Duration,
    state: RwSignal<T>,
    step: impl Fn(&mut T) -> bool + 'static,
) {
    let step: Rc<dyn Fn(&mut T) -> bool> = Rc::new(step);
    schedule(interval, state, step);
}

fn schedule<T: 'static>(interval: Duration, state: RwSignal<T>, step: Rc<dyn Fn(&mut T) -> bool>) {
    exec_after(interval, move |_| {
        if state.try_update(|value| step(value)) == Some(true) {
            schedule(interval, state, step);
        }
    });
}

/// Applies `f` to `state` once after `delay`, if the signal still exists.
pub fn after<T: 'static>(delay: Duration, state: RwSignal<T>, f: impl FnOnce(&mut T) + 'static) {
    exec_after(delay, move |_| {
        state.try_update(f);
    });
}
