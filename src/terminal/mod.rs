//! Terminal helpers shared by the interactive screens.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
