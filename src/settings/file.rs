//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,digits,symbols,uppercase,lowercase,count,clipboard,thresholds,source`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use super::Settings;
use crate::bmi::Thresholds;
use crate::error::SettingsError;
use crate::rng::Source;

/// Overrides the settings file location.
pub const SETTINGS_ENV: &str = "BMIPASS_SETTINGS";

const FIELDS: usize = 9;

pub fn default_path() -> PathBuf {
    if let Some(path) = env::var_os(SETTINGS_ENV) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("", "", "bmipass")
        .map(|dirs| dirs.config_dir().join("settings"))
        .unwrap_or_else(|| PathBuf::from(".bmipass/settings"))
}

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(format_line(settings).as_bytes())?;
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> Result<(), SettingsError> {
    ensure_parent(path)?;
    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;

    if line.trim().is_empty() {
        debug!(path = %path.display(), "writing default settings");
        return save(path, settings);
    }

    match parse_line(line.trim(), settings) {
        Ok(parsed) => *settings = parsed,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "resetting settings file");
            save(path, settings)?;
        }
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn format_line(settings: &Settings) -> String {
    let c = settings.classes;
    format!(
        "{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        c.digits,
        c.symbols,
        c.uppercase,
        c.lowercase,
        settings.count,
        settings.to_clipboard,
        settings.thresholds.name(),
        settings.source.name(),
    )
}

/// Fields that fail to parse keep the value from `base`.
fn parse_line(line: &str, base: &Settings) -> Result<Settings, SettingsError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return Err(SettingsError::Parse {
            expected: FIELDS,
            found: parts.len(),
        });
    }

    let mut s = base.clone();
    s.pass_length = super::clamp_length(parts[0].parse().unwrap_or(s.pass_length));
    s.classes.digits = parts[1].parse().unwrap_or(s.classes.digits);
    s.classes.symbols = parts[2].parse().unwrap_or(s.classes.symbols);
    s.classes.uppercase = parts[3].parse().unwrap_or(s.classes.uppercase);
    s.classes.lowercase = parts[4].parse().unwrap_or(s.classes.lowercase);
    s.count = parts[5].parse().unwrap_or(s.count).max(1);
    s.to_clipboard = parts[6].parse().unwrap_or(s.to_clipboard);
    s.thresholds = Thresholds::from_name(parts[7]).unwrap_or(s.thresholds);
    s.source = Source::from_name(parts[8]).unwrap_or(s.source);
    Ok(s)
}
