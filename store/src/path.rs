//! The current logical path and its back/forward history.

use floem_reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use tracing::debug;

/// A linear history with a cursor, in the manner of a browser session.
///
/// Pushing while the cursor is not at the end drops the forward entries.
#[derive(Clone, Debug, PartialEq, Eq)]
struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    fn new(initial: String) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, path: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor = self.entries.len() - 1;
    }

    fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

/// Tracks the current path and notifies subscribers when it changes.
///
/// `PathStore` is a `Copy` handle; all copies share the same history.
#[derive(Clone, Copy, Debug)]
pub struct PathStore {
    history: RwSignal<History>,
}

impl PathStore {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: RwSignal::new(History::new(initial.into())),
        }
    }

    /// Records `path` as the current location and re-renders subscribers.
    ///
    /// Navigating to the path that is already current still pushes a new
    /// history entry.
    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        debug!(%path, "navigate");
        self.history.update(|history| history.push(path));
    }

    /// Returns to the previous entry. Returns `false` at the start of the
    /// history, in which case nothing is notified.
    pub fn back(&self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history.update(|history| history.cursor -= 1);
        debug!(path = %self.current_path_untracked(), "back");
        true
    }

    /// Re-applies the entry that was left with [`PathStore::back`].
    pub fn forward(&self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.history.update(|history| history.cursor += 1);
        debug!(path = %self.current_path_untracked(), "forward");
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.history.with_untracked(History::can_go_back)
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.with_untracked(History::can_go_forward)
    }

    /// The active path. Subscribes the running effect.
    pub fn current_path(&self) -> String {
        self.history.with(|history| history.current().to_owned())
    }

    pub fn current_path_untracked(&self) -> String {
        self.history
            .with_untracked(|history| history.current().to_owned())
    }

    /// Whether `path` is the active path. Subscribes the running effect.
    pub fn is_current(&self, path: &str) -> bool {
        self.history.with(|history| history.current() == path)
    }

    /// Reactive variants of the back/forward checks, for enabling controls.
    pub fn tracked_can_go_back(&self) -> bool {
        self.history.with(History::can_go_back)
    }

    pub fn tracked_can_go_forward(&self) -> bool {
        self.history.with(History::can_go_forward)
    }

    /// Number of entries in the history, including forward entries.
    pub fn history_len(&self) -> usize {
        self.history.with_untracked(|history| history.entries.len())
    }

    /// Runs `f` with the current path now and after every change.
    pub fn subscribe(&self, f: impl Fn(&str) + 'static) {
        let history = self.history;
        create_effect(move |_| history.with(|history| f(history.current())));
    }
}

#[cfg(test)]
mod tests {
    use super::History;

    #[test]
    fn push_truncates_forward_entries() {
        let mut history = History::new("/".to_owned());
        history.push("/magaza".to_owned());
        history.push("/discord".to_owned());
        history.cursor = 1;
        history.push("/sunucular".to_owned());

        assert_eq!(history.entries, ["/", "/magaza", "/sunucular"]);
        assert_eq!(history.current(), "/sunucular");
        assert!(!history.can_go_forward());
        assert!(history.can_go_back());
    }
}
