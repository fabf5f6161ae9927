//! CLI context - resolves the settings file and runs one subcommand.

use std::path::PathBuf;

use zeroize::Zeroizing;

use super::args::{BmiArgs, Commands, GlobalOpts, IdealArgs, PassArgs, SettingsCommands};
use super::prompts::{self, TerminalNotifier};
use crate::bmi::{self, IdealRow, Thresholds, ideal_table, ideal_weight};
use crate::notify::{Clipboard, Notifier, SystemClipboard};
use crate::pass::{self, CharClass, charset, entropy_bits, strength};
use crate::settings::Settings;
use crate::tui::format_ideal_row;

/// The command failed and its message has been printed.
#[derive(Debug)]
pub struct Failed;

pub struct Context {
    settings_path: PathBuf,
    notifier: TerminalNotifier,
}

impl Context {
    pub fn new(global: &GlobalOpts) -> Self {
        prompts::set_quiet(global.quiet);
        Self {
            settings_path: global.settings.clone().unwrap_or_else(Settings::path),
            notifier: TerminalNotifier,
        }
    }

    pub fn run(&mut self, command: Commands) -> Result<(), Failed> {
        match command {
            Commands::Bmi(args) => self.bmi(args),
            Commands::Ideal(args) => self.ideal(args),
            Commands::Pass(args) => self.pass(args),
            Commands::Settings(cmd) => self.settings(cmd),
        }
    }

    fn load_settings(&self) -> Settings {
        Settings::load_from(&self.settings_path).unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        })
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), Failed> {
        settings
            .validate()
            .and_then(|()| settings.save_to(&self.settings_path))
            .map_err(|e| {
                prompts::error(&format!("Failed to save settings: {}", e));
                Failed
            })?;
        prompts::settings_saved(&self.settings_path.display().to_string());
        Ok(())
    }

    fn bmi(&mut self, args: BmiArgs) -> Result<(), Failed> {
        let thresholds = if args.legacy_thresholds {
            Thresholds::Legacy
        } else {
            Thresholds::Standard
        };

        let result = match bmi::classify(args.weight, args.height, thresholds) {
            Ok(result) => result,
            Err(e) => {
                self.notifier.notify(&e.to_string());
                return Err(Failed);
            }
        };

        println!("{:.1} {}", result.index, result.category);
        Ok(())
    }

    fn ideal(&mut self, args: IdealArgs) -> Result<(), Failed> {
        let rows = match args.height {
            Some(height) if height.is_finite() && height > 0.0 => vec![IdealRow {
                height,
                weight: ideal_weight(height),
            }],
            Some(_) => {
                self.notifier.notify("Please enter a valid height.");
                return Err(Failed);
            }
            None => ideal_table(),
        };

        for row in &rows {
            let (height, weight) = format_ideal_row(row);
            println!("{:>7}  {:>9}", height, weight);
        }
        Ok(())
    }

    fn pass(&mut self, args: PassArgs) -> Result<(), Failed> {
        let mut settings = if args.saved {
            self.load_settings()
        } else {
            Settings::default()
        };
        apply_pass_args(&mut settings, &args);

        if args.save {
            self.save_settings(&settings)?;
        }

        let mut rng = settings.source.build(args.seed);
        let passwords = match pass::generate_batch(
            settings.count,
            settings.pass_length,
            settings.classes,
            &mut *rng,
        ) {
            Ok(p) => p,
            Err(e) => {
                self.notifier.notify(&e.to_string());
                return Err(Failed);
            }
        };

        if args.entropy {
            let alphabet = charset::size(settings.classes);
            let bits = entropy_bits(settings.pass_length, alphabet);
            prompts::entropy(bits, strength(bits), alphabet);
        }

        if settings.to_clipboard {
            let joined = Zeroizing::new(
                passwords
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            match SystemClipboard::new().copy(&joined) {
                Ok(()) => {
                    prompts::clipboard_copied(passwords.len());
                    return Ok(());
                }
                Err(e) => {
                    if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                        return Ok(());
                    }
                }
            }
        }

        for password in &passwords {
            println!("{}", password.as_str());
        }
        Ok(())
    }

    fn settings(&mut self, cmd: SettingsCommands) -> Result<(), Failed> {
        match cmd {
            SettingsCommands::Show => {
                let settings = self.load_settings();
                for (key, value) in describe(&settings) {
                    println!("{key:<12}{value}");
                }
                Ok(())
            }
            SettingsCommands::Reset => self.save_settings(&Settings::default()),
            SettingsCommands::Path => {
                println!("{}", self.settings_path.display());
                Ok(())
            }
        }
    }
}

/// Flags override whatever the settings start from.
fn apply_pass_args(settings: &mut Settings, args: &PassArgs) {
    if let Some(length) = args.length {
        settings.pass_length = length;
    }
    if let Some(count) = args.count {
        settings.count = count;
    }
    for (off, class) in [
        (args.no_digits, CharClass::Digits),
        (args.no_symbols, CharClass::Symbols),
        (args.no_upper, CharClass::Uppercase),
        (args.no_lower, CharClass::Lowercase),
    ] {
        if off {
            settings.classes.set(class, false);
        }
    }
    if args.board {
        settings.to_clipboard = true;
    }
    if let Some(source) = args.source {
        settings.source = source;
    }
}

fn describe(settings: &Settings) -> Vec<(&'static str, String)> {
    let classes = settings
        .classes
        .iter()
        .map(|c| c.name().to_lowercase())
        .collect::<Vec<_>>();
    vec![
        ("length", settings.pass_length.to_string()),
        (
            "classes",
            if classes.is_empty() {
                "none".to_string()
            } else {
                classes.join(", ")
            },
        ),
        ("count", settings.count.to_string()),
        ("clipboard", settings.to_clipboard.to_string()),
        ("thresholds", settings.thresholds.name().to_string()),
        (
            "source",
            format!("{} ({})", settings.source.name(), settings.source.describe()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;
    use crate::rng::Source;

    #[test]
    fn flags_override_defaults() {
        let mut settings = Settings::default();
        let args = PassArgs {
            length: Some(20),
            count: Some(3),
            no_symbols: true,
            board: true,
            source: Some(Source::Hw),
            ..Default::default()
        };
        apply_pass_args(&mut settings, &args);

        assert_eq!(settings.pass_length, 20);
        assert_eq!(settings.count, 3);
        assert!(!settings.classes.contains(CharClass::Symbols));
        assert!(settings.classes.contains(CharClass::Digits));
        assert!(settings.to_clipboard);
        assert_eq!(settings.source, Source::Hw);
    }

    #[test]
    fn flags_never_re_enable_a_class() {
        let mut settings = Settings {
            classes: ClassSet::only(CharClass::Lowercase),
            ..Settings::default()
        };
        apply_pass_args(&mut settings, &PassArgs::default());
        assert_eq!(settings.classes, ClassSet::only(CharClass::Lowercase));
    }

    #[test]
    fn describe_lists_every_field() {
        let rows = describe(&Settings::default());
        let keys: Vec<_> = rows.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["length", "classes", "count", "clipboard", "thresholds", "source"]
        );
        assert_eq!(rows[1].1, "digits, symbols, uppercase, lowercase");
    }
}
