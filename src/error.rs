//! Error types shared by the calculators, the generator and the front ends.

use thiserror::Error;

/// BMI input rejected before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalcError {
    #[error("Please enter valid values for weight and height.")]
    InvalidInput { weight: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    #[error("Select at least one character type.")]
    NoCharacterClassSelected,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("password length {length} is outside {min}..={max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("malformed settings line: expected {expected} fields, found {found}")]
    Parse { expected: usize, found: usize },

    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}
