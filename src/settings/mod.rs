//! User preferences and their bounds.

mod file;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::bmi::Thresholds;
use crate::error::SettingsError;
use crate::pass::ClassSet;
use crate::rng::Source;

pub use file::{SETTINGS_ENV, default_path};

pub const PASS_LEN_MIN: usize = 4;
pub const PASS_LEN_MAX: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
    pub count: usize,
    pub to_clipboard: bool,
    pub thresholds: Thresholds,
    pub source: Source,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&default_path())
    }

    /// Missing or malformed files are (re)written with defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(path, self)?;
        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(PASS_LEN_MIN..=PASS_LEN_MAX).contains(&self.pass_length) {
            return Err(SettingsError::LengthOutOfRange {
                length: self.pass_length,
                min: PASS_LEN_MIN,
                max: PASS_LEN_MAX,
            });
        }
        Ok(())
    }

    pub fn path() -> PathBuf {
        default_path()
    }
}

/// Pull a requested length into the allowed range.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(PASS_LEN_MIN, PASS_LEN_MAX)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            classes: ClassSet::all(),
            count: 1,
            to_clipboard: false,
            thresholds: Thresholds::Standard,
            source: Source::Os,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn length_bounds() {
        let mut s = Settings {
            pass_length: 3,
            ..Default::default()
        };
        assert!(matches!(
            s.validate(),
            Err(SettingsError::LengthOutOfRange { length: 3, min: 4, max: 32 })
        ));
        s.pass_length = 33;
        assert!(s.validate().is_err());
        s.pass_length = 32;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn clamp_pulls_into_range() {
        assert_eq!(clamp_length(0), PASS_LEN_MIN);
        assert_eq!(clamp_length(12), 12);
        assert_eq!(clamp_length(100), PASS_LEN_MAX);
    }
}
