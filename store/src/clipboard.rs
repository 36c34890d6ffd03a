//! Best-effort clipboard writes with a fallback backend.
//!
//! The primary backend is the clipboard owned by the application window. When
//! its write reports [`ClipboardError::Unavailable`] a standalone backend is
//! tried instead; a failure there is logged but still reported as copied, so
//! that the "copied" indicator is shown.

use thiserror::Error;
use tracing::{error, warn};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard provider error: {0}")]
    Provider(String),
}

pub trait ClipboardBackend {
    /// Returns [`ClipboardError::Unavailable`] when there is no clipboard to
    /// write to, which sends [`copy_with_fallback`] to the fallback backend.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The fallback backend was used. Its own failure is not surfaced.
    CopiedWithFallback,
    Failed,
}

impl CopyOutcome {
    pub fn shows_indicator(self) -> bool {
        !matches!(self, CopyOutcome::Failed)
    }
}

pub fn copy_with_fallback(
    primary: &mut dyn ClipboardBackend,
    fallback: &mut dyn ClipboardBackend,
    text: &str,
) -> CopyOutcome {
    match primary.write_text(text) {
        Ok(()) => return CopyOutcome::Copied,
        Err(ClipboardError::Unavailable) => {}
        Err(err) => {
            error!(%err, "copy operation failed");
            return CopyOutcome::Failed;
        }
    }

    warn!("primary clipboard unavailable, using fallback");
    if let Err(err) = fallback.write_text(text) {
        error!(%err, "copy failed");
    }
    CopyOutcome::CopiedWithFallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        available: bool,
        fail: bool,
        attempts: usize,
        written: Vec<String>,
    }

    impl ClipboardBackend for Recorder {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.attempts += 1;
            if !self.available {
                return Err(ClipboardError::Unavailable);
            }
            if self.fail {
                return Err(ClipboardError::Provider("denied".to_owned()));
            }
            self.written.push(text.to_owned());
            Ok(())
        }
    }

    fn backend(available: bool, fail: bool) -> Recorder {
        Recorder {
            available,
            fail,
            ..Default::default()
        }
    }

    #[test]
    fn primary_success() {
        let mut primary = backend(true, false);
        let mut fallback = backend(true, false);
        let outcome = copy_with_fallback(&mut primary, &mut fallback, "play.atomland.xyz");
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(primary.written, ["play.atomland.xyz"]);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn primary_failure_hides_indicator() {
        let mut primary = backend(true, true);
        let mut fallback = backend(true, false);
        let outcome = copy_with_fallback(&mut primary, &mut fallback, "play.atomland.xyz");
        assert_eq!(outcome, CopyOutcome::Failed);
        assert!(!outcome.shows_indicator());
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn unavailable_primary_uses_fallback() {
        let mut primary = backend(false, false);
        let mut fallback = backend(true, false);
        let outcome = copy_with_fallback(&mut primary, &mut fallback, "play.atomland.xyz");
        assert_eq!(outcome, CopyOutcome::CopiedWithFallback);
        assert_eq!(primary.attempts, 1);
        assert!(primary.written.is_empty());
        assert_eq!(fallback.written, ["play.atomland.xyz"]);
    }

    #[test]
    fn provider_error_does_not_fall_back() {
        let mut primary = backend(true, true);
        let mut fallback = backend(true, false);
        copy_with_fallback(&mut primary, &mut fallback, "play.atomland.xyz");
        assert_eq!(fallback.attempts, 0);
    }

    #[test]
    fn fallback_failure_still_shows_indicator() {
        let mut primary = backend(false, false);
        let mut fallback = backend(true, true);
        let outcome = copy_with_fallback(&mut primary, &mut fallback, "play.atomland.xyz");
        assert!(outcome.shows_indicator());
    }
}
