//! Interactive TUI menus.

mod input;
mod screens;
mod text;

pub use input::*;
pub use screens::*;
pub use text::*;

use crate::notify::{BufferNotifier, SystemClipboard};
use crate::settings::Settings;
use crate::terminal::{clear, print_error, reset_terminal};

/// Run TUI interactive mode.
pub fn run() {
    reset_terminal();
    clear();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            print_error(&format!("Error loading settings: {}", e));
            Settings::default()
        }
    };

    let mut app = TuiApp::new(
        BufferNotifier::default(),
        SystemClipboard::new(),
        settings.source.build(None),
        settings.thresholds,
    );

    main_menu(&mut app, &mut settings);
}
