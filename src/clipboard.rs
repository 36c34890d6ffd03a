//! Clipboard backends for the running application.

use std::{cell::RefCell, error::Error};

use copypasta::{ClipboardContext, ClipboardProvider};
use floem::Clipboard;
use nautilus_store::{copy_with_fallback, ClipboardBackend, ClipboardError, CopyOutcome};

/// The clipboard Floem sets up for the application window.
pub struct WindowClipboard;

impl ClipboardBackend for WindowClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        Clipboard::set_contents(text.to_owned()).map_err(|err| match err {
            floem::ClipboardError::NotAvailable => ClipboardError::Unavailable,
            floem::ClipboardError::ProviderError(msg) => ClipboardError::Provider(msg),
        })
    }
}

type OpenProvider = fn() -> Result<Box<dyn ClipboardProvider>, Box<dyn Error + Send + Sync>>;

fn open_system() -> Result<Box<dyn ClipboardProvider>, Box<dyn Error + Send + Sync>> {
    Ok(Box::new(ClipboardContext::new()?))
}

/// A clipboard connection opened on first use, independent of any window.
///
/// The connection is kept for the life of the process: on X11 the copied
/// text is served by the connection, and dropping it drops the selection.
pub struct SystemClipboard {
    open: OpenProvider,
    provider: Option<Box<dyn ClipboardProvider>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_opener(open_system)
    }

    fn with_opener(open: OpenProvider) -> Self {
        Self {
            open,
            provider: None,
        }
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let provider = match self.provider.take() {
            Some(provider) => provider,
            None => (self.open)().map_err(|err| ClipboardError::Provider(err.to_string()))?,
        };
        self.provider
            .insert(provider)
            .set_contents(text.to_owned())
            .map_err(|err| ClipboardError::Provider(err.to_string()))
    }
}

thread_local! {
    static FALLBACK: RefCell<SystemClipboard> = RefCell::new(SystemClipboard::new());
}

pub fn copy_text(text: &str) -> CopyOutcome {
    FALLBACK.with_borrow_mut(|fallback| copy_with_fallback(&mut WindowClipboard, fallback, text))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use super::*;

    static OPENED: AtomicUsize = AtomicUsize::new(0);
    static CONTENTS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct Memory;

    impl ClipboardProvider for Memory {
        fn get_contents(&mut self) -> Result<String, Box<dyn Error + Send + Sync>> {
            Ok(CONTENTS.lock().unwrap().last().cloned().unwrap_or_default())
        }

        fn set_contents(&mut self, contents: String) -> Result<(), Box<dyn Error + Send + Sync>> {
            CONTENTS.lock().unwrap().push(contents);
            Ok(())
        }
    }

    fn open_memory() -> Result<Box<dyn ClipboardProvider>, Box<dyn Error + Send + Sync>> {
        OPENED.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(Memory))
    }

    fn open_failing() -> Result<Box<dyn ClipboardProvider>, Box<dyn Error + Send + Sync>> {
        Err("no display".into())
    }

    #[test]
    fn system_clipboard_keeps_one_connection() {
        let mut clipboard = SystemClipboard::with_opener(open_memory);
        clipboard.write_text("play.atomland.xyz").unwrap();
        clipboard.write_text("mc.example.org").unwrap();

        assert_eq!(OPENED.load(Ordering::SeqCst), 1);
        assert!(clipboard.provider.is_some());
        assert_eq!(*CONTENTS.lock().unwrap(), ["play.atomland.xyz", "mc.example.org"]);
    }

    #[test]
    fn failed_open_is_a_provider_error_and_retried() {
        let mut clipboard = SystemClipboard::with_opener(open_failing);
        assert!(matches!(
            clipboard.write_text("play.atomland.xyz"),
            Err(ClipboardError::Provider(_))
        ));
        assert!(clipboard.provider.is_none());
    }
}
