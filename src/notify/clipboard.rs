use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::warn;
use zeroize::Zeroize;

use super::Clipboard;
use crate::error::ClipboardError;

/// OS clipboard, opened on first copy.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| {
                warn!(error = %e, "clipboard unavailable");
                ClipboardError::Unavailable(e.to_string())
            })?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("not initialised".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Read back so the provider has taken ownership, then wipe our copy.
        if let Ok(mut readback) = ctx.get_contents() {
            readback.zeroize();
        }
        Ok(())
    }
}
