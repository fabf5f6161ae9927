//! CLI argument definitions using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::rng::Source;
use crate::settings::{PASS_LEN_MAX, PASS_LEN_MIN, SETTINGS_ENV};

#[derive(Parser, Debug)]
#[command(name = "bmipass")]
#[command(version, about = "BMI calculator and password generator")]
#[command(long_about = "BMI calculator and password generator.\n\nRun without arguments for the interactive menus.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress notices (errors are still shown)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Settings file location
    #[arg(long, global = true, env = SETTINGS_ENV)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Body-mass index and category for a weight and height
    Bmi(BmiArgs),

    /// Ideal weight (BMI 22) for one height, or the full table
    Ideal(IdealArgs),

    /// Generate passwords
    Pass(PassArgs),

    /// Inspect or reset the settings file
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Args, Debug)]
pub struct BmiArgs {
    /// Weight in kilograms
    #[arg(allow_negative_numbers = true)]
    pub weight: f64,

    /// Height in metres
    #[arg(allow_negative_numbers = true)]
    pub height: f64,

    /// End Normal at 24.9 and Overweight at 29.9
    #[arg(long)]
    pub legacy_thresholds: bool,
}

#[derive(Args, Debug)]
pub struct IdealArgs {
    /// Height in metres; omit for the 1.4 - 3.4 m table
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub struct PassArgs {
    /// Password length
    #[arg(
        long,
        short = 'l',
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(PASS_LEN_MIN as u64..=PASS_LEN_MAX as u64)
    )]
    pub length: Option<usize>,

    /// Number of passwords
    #[arg(
        long,
        short = 'n',
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub count: Option<usize>,

    /// Leave out 0-9
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out !@#$%^&*()_+{}[]<>?
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out A-Z
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out a-z
    #[arg(long)]
    pub no_lower: bool,

    /// Copy to the clipboard instead of printing
    #[arg(long, short = 'b')]
    pub board: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Random source
    #[arg(long, value_enum)]
    pub source: Option<Source>,

    /// Print the entropy estimate
    #[arg(long, short = 'e')]
    pub entropy: bool,

    /// Start from the saved settings
    #[arg(long, short = 's')]
    pub saved: bool,

    /// Save the resulting settings
    #[arg(long)]
    pub save: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCommands {
    /// Print the current settings
    Show,
    /// Restore the defaults
    Reset,
    /// Print the settings file location
    Path,
}
