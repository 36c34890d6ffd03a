//! State machines behind the cosmetic widgets.
//!
//! Each machine only knows how to take one step. The view layer owns the
//! timer that drives it and stops stepping once the owning view is gone.

use std::{collections::HashSet, ops::RangeInclusive, time::Duration};

pub const TYPE_INTERVAL: Duration = Duration::from_millis(80);
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);
pub const COUNT_FRAME: Duration = Duration::from_millis(16);
pub const COUNT_DURATION: Duration = Duration::from_millis(2000);
pub const PLAYER_INTERVAL: Duration = Duration::from_millis(4000);
pub const PLAYER_PULSE: Duration = Duration::from_millis(200);
pub const COPY_BUTTON_HOLD: Duration = Duration::from_millis(2000);
pub const COPY_POPUP_HOLD: Duration = Duration::from_millis(3000);
pub const PARTICLE_FRAME: Duration = Duration::from_millis(100);
pub const PARTICLE_COUNT: usize = 30;
pub const BACKDROP_PERIOD: Duration = Duration::from_millis(4000);

/// Reveals a string one character per step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedText {
    text: String,
    shown: usize,
}

impl TypedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Shows one more character. Returns `false` once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

/// A cursor that is toggled on every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blink(pub bool);

impl Default for Blink {
    fn default() -> Self {
        Blink(true)
    }
}

impl Blink {
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}

/// Counts from zero up to a target in fixed increments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: f64,
    value: f64,
    increment: f64,
}

impl CountUp {
    /// `duration` is split into `frame` sized steps.
    pub fn new(target: u32, duration: Duration, frame: Duration) -> Self {
        let target = f64::from(target);
        let steps = duration.as_secs_f64() / frame.as_secs_f64();
        let increment = if steps.is_finite() && steps >= 1.0 {
            target / steps
        } else {
            target
        };
        Self {
            target,
            value: 0.0,
            increment,
        }
    }

    /// Advances one frame. Returns `false` once the target has been reached.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        let next = self.value + self.increment;
        self.value = if next >= self.target { self.target } else { next };
        true
    }

    pub fn is_done(&self) -> bool {
        self.value >= self.target
    }

    pub fn display(&self) -> u32 {
        self.value.floor() as u32
    }
}

/// The jittering online-player counter in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerCount {
    pub players: u32,
    pub animating: bool,
}

impl Default for PlayerCount {
    fn default() -> Self {
        Self {
            players: PlayerCount::START,
            animating: false,
        }
    }
}

impl PlayerCount {
    pub const START: u32 = 143;
    pub const MIN: u32 = 120;
    pub const MAX: u32 = 200;
    /// Range of the random change applied on each update.
    pub const DELTA: RangeInclusive<i32> = -3..=2;

    pub fn begin_pulse(&mut self) {
        self.animating = true;
    }

    /// Applies `delta`, clamped to `[MIN, MAX]`, and ends the pulse.
    pub fn settle(&mut self, delta: i32) {
        let next = self.players as i64 + i64::from(delta);
        self.players = next.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32;
        self.animating = false;
    }
}

/// A transient "copied" flag.
///
/// Every [`CopyFeedback::show`] hands out a generation, and only the newest
/// generation can hide the flag again, so an older timer cannot cut a newer
/// indicator short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    shown: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.shown = true;
        self.generation
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.shown = false;
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

/// Fraction of a section that must be inside the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// How much of the span `[top, top + height)` lies inside the viewport.
pub fn visible_ratio(top: f64, height: f64, viewport_top: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let start = top.max(viewport_top);
    let end = (top + height).min(viewport_top + viewport_height);
    ((end - start) / height).clamp(0.0, 1.0)
}

/// Sections that have scrolled into view at least once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: HashSet<&'static str>,
}

impl Reveal {
    /// Records a section's position against the viewport. Returns `true` the
    /// first time the section passes the threshold.
    pub fn observe(
        &mut self,
        id: &'static str,
        top: f64,
        height: f64,
        viewport_top: f64,
        viewport_height: f64,
    ) -> bool {
        if self.revealed.contains(id) {
            return false;
        }
        if visible_ratio(top, height, viewport_top, viewport_height) >= REVEAL_THRESHOLD {
            self.revealed.insert(id);
            return true;
        }
        false
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// Fades from full strength to half and back once per `period`.
///
/// Returns a factor in `[0.5, 1.0]`, starting and ending at `1.0`.
pub fn pulse(elapsed: Duration, period: Duration) -> f64 {
    if period.is_zero() {
        return 1.0;
    }
    let phase = (elapsed.as_secs_f64() / period.as_secs_f64()).fract();
    0.75 + 0.25 * (std::f64::consts::TAU * phase).cos()
}

/// One of the dots floating behind the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the layer width.
    pub left: f64,
    /// Vertical position, percent of the layer height.
    pub top: f64,
    pub delay: Duration,
    pub period: Duration,
}

impl Particle {
    pub const OPACITY: f64 = 0.2;

    pub fn opacity(&self, elapsed: Duration) -> f64 {
        match elapsed.checked_sub(self.delay) {
            Some(running) => Self::OPACITY * pulse(running, self.period),
            None => Self::OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_waits_for_its_delay_then_pulses() {
        let particle = Particle {
            left: 12.5,
            top: 80.0,
            delay: Duration::from_secs(1),
            period: Duration::from_secs(2),
        };
        let at = |millis| particle.opacity(Duration::from_millis(millis));

        assert_eq!(at(0), Particle::OPACITY);
        assert_eq!(at(999), Particle::OPACITY);
        assert_eq!(at(1000), Particle::OPACITY);
        assert!((at(2000) - Particle::OPACITY / 2.0).abs() < 1e-9);
        assert!((at(3000) - Particle::OPACITY).abs() < 1e-9);
        assert!(at(1500) < Particle::OPACITY && at(1500) > Particle::OPACITY / 2.0);
    }

    #[test]
    fn pulse_without_period_stays_full() {
        assert_eq!(pulse(Duration::from_millis(1234), Duration::ZERO), 1.0);
        for millis in (0..8000).step_by(250) {
            let factor = pulse(Duration::from_millis(millis), BACKDROP_PERIOD);
            assert!((0.5..=1.0).contains(&factor), "{factor} at {millis}ms");
        }
    }

    #[test]
    fn typed_text_reveals_by_char() {
        let mut text = TypedText::new("Hoş");
        assert_eq!(text.visible(), "");
        assert!(text.tick());
        assert!(text.tick());
        assert_eq!(text.visible(), "Ho");
        assert!(text.tick());
        assert_eq!(text.visible(), "Hoş");
        assert!(text.is_done());
        assert!(!text.tick());
    }

    #[test]
    fn count_up_lands_on_target() {
        let mut count = CountUp::new(24, COUNT_DURATION, COUNT_FRAME);
        let mut frames = 0;
        while count.tick() {
            frames += 1;
            assert!(count.display() <= 24);
        }
        assert_eq!(count.display(), 24);
        assert!((124..=126).contains(&frames), "{frames} frames");
    }

    #[test]
    fn count_up_with_zero_duration_jumps() {
        let mut count = CountUp::new(12, Duration::ZERO, COUNT_FRAME);
        assert!(count.tick());
        assert_eq!(count.display(), 12);
    }

    #[test]
    fn player_count_is_clamped() {
        let mut count = PlayerCount {
            players: 121,
            animating: false,
        };
        count.begin_pulse();
        assert!(count.animating);
        count.settle(-3);
        assert_eq!(count.players, PlayerCount::MIN);
        assert!(!count.animating);

        count.players = 199;
        count.settle(2);
        assert_eq!(count.players, PlayerCount::MAX);
    }

    #[test]
    fn stale_copy_timer_does_not_hide_newer_indicator() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.show();
        let second = feedback.show();
        feedback.expire(first);
        assert!(feedback.is_shown());
        feedback.expire(second);
        assert!(!feedback.is_shown());
    }

    #[test]
    fn reveal_once_past_threshold() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe("stats", 1000.0, 400.0, 0.0, 800.0));
        assert!(!reveal.observe("stats", 1000.0, 400.0, 0.0, 1030.0));
        assert!(reveal.observe("stats", 1000.0, 400.0, 300.0, 800.0));
        assert!(!reveal.observe("stats", 1000.0, 400.0, 300.0, 800.0));
        assert!(reveal.is_revealed("stats"));
    }
}
