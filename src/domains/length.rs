//! Lengths, normalized to meters.
//!
//! "1 nm" is one nanometer. Nautical miles have to be spelled out.

use crate::domains::constants::{
    ANGSTROM, ASTRONOMICAL_UNIT, FOOT, INCH, LIGHT_YEAR, MIL, MILE, NAUTICAL_MILE, PARSEC, POINT,
    YARD,
};
use crate::notation::{defaults, Engine, EngineConfig, Input, Result, UnitEntry, Values};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref LENGTH_ENGINE: Engine =
        Engine::new(configuration()).expect("built-in length tables are valid");
}

pub fn units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new("m").aliases(&["meter", "meters"]),
        // Imperial
        UnitEntry::with_factor("mil", MIL).aliases(&["mils"]),
        UnitEntry::with_factor("in", INCH).aliases(&["\"", "inch", "inches"]),
        UnitEntry::with_factor("ft", FOOT).aliases(&["foot", "feet"]),
        UnitEntry::with_factor("yd", YARD).aliases(&["yard", "yards"]),
        UnitEntry::with_factor("mile", MILE).aliases(&["miles"]),
        UnitEntry::with_factor("nautical mile", NAUTICAL_MILE).aliases(&["nautical miles"]),
        UnitEntry::with_factor("pt", POINT).aliases(&["point", "points"]),
        // Astronomical
        UnitEntry::with_factor("AU", ASTRONOMICAL_UNIT).aliases(&["au", "AUs"]),
        UnitEntry::with_factor("ly", LIGHT_YEAR).aliases(&[
            "lightyear",
            "lightyears",
            "light years",
            "light year",
        ]),
        UnitEntry::with_factor("pc", PARSEC).aliases(&["parsec", "parsecs"]),
        // Atomic
        UnitEntry::with_factor("Å", ANGSTROM).aliases(&["angstrom", "Angstrom"]),
    ]
}

pub fn configuration() -> EngineConfig {
    EngineConfig::new("length", units()).with_prefixes(defaults::length_prefixes())
}

/// Length(s) in meters. Plain numbers are taken to be meters already,
/// nulls stay `None`.
pub fn normalize_length<'a>(input: impl Into<Input<'a>>) -> Result<Values> {
    LENGTH_ENGINE.normalize_values(input)
}

pub fn convert_length_to_meters(value: f64, unit: &str) -> Result<f64> {
    LENGTH_ENGINE.convert_to_base(value, unit)
}
