//! Side-effect capabilities handed to the controller.
//!
//! The controller never prints or touches the clipboard itself. It calls a
//! [`Notifier`] for user-facing messages and a [`Clipboard`] for copies, so
//! the CLI, the TUI and the tests each plug in their own implementation.

mod clipboard;

pub use clipboard::SystemClipboard;

use zeroize::Zeroizing;

use crate::error::ClipboardError;

pub trait Notifier {
    fn notify(&mut self, message: &str);
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps messages until the caller drains them. The TUI renders the latest
/// one as its status line.
#[derive(Debug, Default)]
pub struct BufferNotifier {
    messages: Vec<String>,
}

impl BufferNotifier {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Latest message; older ones are dropped.
    pub fn take(&mut self) -> Option<String> {
        let last = self.messages.pop();
        self.messages.clear();
        last
    }
}

impl Notifier for BufferNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// In-process clipboard. `failing` simulates a desktop without one.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<Zeroizing<String>>,
    failing: bool,
}

impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            contents: None,
            failing: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.failing {
            return Err(ClipboardError::Unavailable("no clipboard".into()));
        }
        self.contents = Some(Zeroizing::new(text.to_owned()));
        Ok(())
    }
}
