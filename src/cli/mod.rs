//! Non-interactive front end: one subcommand in, text out.

mod args;
mod context;
pub mod prompts;

pub use args::{Cli, Commands, GlobalOpts, PassArgs, SettingsCommands};
pub use context::{Context, Failed};

use std::process::ExitCode;

use clap::Parser;

const NEEDS_TERMINAL: &str = "The interactive menus need a terminal. Run `bmipass --help` for the commands.";

/// Parse arguments and run. No subcommand opens the TUI when stdin is a tty.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        if !prompts::is_interactive() {
            prompts::error(NEEDS_TERMINAL);
            return ExitCode::FAILURE;
        }
        crate::tui::run();
        return ExitCode::SUCCESS;
    };

    match Context::new(&cli.global).run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failed) => ExitCode::FAILURE,
    }
}
