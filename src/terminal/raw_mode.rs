//! Raw mode scoped to a value.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Raw mode for as long as the guard lives.
///
/// Only the guard that switched raw mode on switches it off, so a nested
/// editor leaves an enclosing one in raw mode.
pub struct RawModeGuard {
    owns: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        if is_raw_mode_enabled()? {
            return Ok(Self { owns: false });
        }
        enable_raw_mode()?;
        Ok(Self { owns: true })
    }

    pub fn owns_raw_mode(&self) -> bool {
        self.owns
    }

    /// Hand the terminal back early; dropping afterwards is a no-op.
    pub fn release(&mut self) {
        if std::mem::take(&mut self.owns) {
            let _ = disable_raw_mode();
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_guard_never_disables() {
        let mut guard = RawModeGuard { owns: false };
        guard.release();
        assert!(!guard.owns_raw_mode());
    }

    #[test]
    fn release_gives_up_ownership_once() {
        // built by hand so no tty is needed
        let mut guard = RawModeGuard { owns: true };
        guard.release();
        assert!(!guard.owns_raw_mode());
        guard.release();
        assert!(!guard.owns_raw_mode());
    }
}
