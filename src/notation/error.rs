//! Error types for the notation engine

use thiserror::Error;

/// Failures while splitting, normalizing or formatting engineering notation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotationError {
    #[error("Empty input: '{0}'")]
    EmptyInput(String),

    #[error("More than one SI prefix in '{input}': {found:?}")]
    AmbiguousPrefix { input: String, found: Vec<String> },

    #[error("First character in '{input}' is the SI prefix '{prefix}', a number must precede it")]
    LeadingPrefix { input: String, prefix: String },

    #[error("SI prefix '{prefix}' used as decimal separator, but '{input}' also contains a decimal point")]
    DecimalSeparatorConflict { input: String, prefix: String },

    #[error("Non-numeric characters remain in '{residue}' (input: '{input}')")]
    NonNumericResidue { input: String, residue: String },

    #[error("Invalid number '{residue}' in '{input}'")]
    InvalidNumber { input: String, residue: String },

    #[error("Unknown {domain} unit: '{unit}'")]
    UnknownUnit { domain: String, unit: String },

    #[error("Invalid unit: expected '{expected}' but found '{found}' in '{input}'")]
    UnitMismatch {
        input: String,
        expected: String,
        found: String,
    },

    #[error("Can't build a quantity from '{0}': no unit found")]
    MissingUnit(String),

    #[error("Value out of range: {0}")]
    OutOfRange(f64),

    #[error("Can't normalize a null value")]
    NullInput,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl NotationError {
    pub fn empty_input(input: impl Into<String>) -> Self {
        Self::EmptyInput(input.into())
    }

    pub fn non_numeric(input: impl Into<String>, residue: impl Into<String>) -> Self {
        Self::NonNumericResidue {
            input: input.into(),
            residue: residue.into(),
        }
    }

    pub fn unknown_unit(domain: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::UnknownUnit {
            domain: domain.into(),
            unit: unit.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, NotationError>;
