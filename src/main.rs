use std::process::ExitCode;

use bmipass::{cli, exits, logging};

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    logging::init();

    cli::run()
}
