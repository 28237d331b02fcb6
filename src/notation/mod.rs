// Engineering notation: "1k234Ω", "2.5 MHz", "±5%" <-> numbers with units

pub mod config;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod input;
pub mod interpunct;
pub mod normalizer;
pub mod patterns;
pub mod quantity;
pub mod splitter;
pub mod table;
pub mod types;


pub use config::{EngineConfig, PowerRule, PrefixEntry, UnitEntry};
pub use engine::{Engine, DEFAULT_ENGINE};
pub use error::{NotationError, Result};
pub use formatter::{format_scaled, DEFAULT_DIGITS};
pub use input::{Input, Normalized, Numeric, Scalar, Values};
pub use interpunct::normalize_interpunctuation;
pub use quantity::{Quantity, ReturnsUnit};
pub use types::{NormalizeResult, SplitToken, UnitSplit};

// Shortcuts using the generic engine

pub fn split(raw: &str) -> Result<SplitToken> {
    DEFAULT_ENGINE.split(raw)
}

pub fn normalize<'a>(input: impl Into<Input<'a>>) -> Result<Normalized> {
    DEFAULT_ENGINE.normalize(input)
}

pub fn safe_normalize<'a>(input: impl Into<Input<'a>>) -> Normalized {
    DEFAULT_ENGINE.safe_normalize(input)
}

pub fn normalize_numeric<'a>(input: impl Into<Input<'a>>) -> Result<Numeric> {
    DEFAULT_ENGINE.normalize_numeric(input)
}

pub fn normalize_numeric_safe<'a>(input: impl Into<Input<'a>>) -> Numeric {
    DEFAULT_ENGINE.normalize_numeric_safe(input)
}

pub fn format_value(value: f64, unit: &str, digits: usize) -> Result<String> {
    DEFAULT_ENGINE.format(value, unit, digits)
}
