//! Messages and prompts for CLI output.
//!
//! Notices respect quiet mode; errors are always shown.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::notify::Notifier;
use crate::terminal::{RED, RESET, YELLOW};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdin is a tty.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Quiet mode or a non-tty stdin answers prompts with their default.
pub fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow, on stderr.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, on stderr.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        if count == 1 {
            println!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            println!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

pub fn entropy(bits: f64, label: &str, alphabet: usize) {
    if !quiet() {
        eprintln!("Entropy: {bits:.1} bits ({label}, {alphabet} symbols)");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

/// Returns true to print to the terminal instead, false to abort.
/// Without a tty the fallback is taken silently.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if skip_prompt() {
        warn(reason);
        return true;
    }

    eprint!("{reason}. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Controller messages in the CLI are failures, so they print as errors.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        error(message);
    }
}
