//! Volumes, normalized to cubic meters.
//!
//! Prefixes of cubed units apply per dimension (1 cm³ is 1e-6 m³), liquid
//! measures take them once (1 mL is 1e-3 L).

use crate::domains::constants::{
    ANGSTROM, ASTRONOMICAL_UNIT, BOHR_RADIUS, FOOT, INCH, LIGHT_YEAR, PARSEC, PLANCK_LENGTH, YARD,
};
use crate::notation::{
    defaults, Engine, EngineConfig, Input, PowerRule, Result, UnitEntry, Values,
};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref VOLUME_ENGINE: Engine =
        Engine::new(configuration()).expect("built-in volume tables are valid");
}

fn cube(x: f64) -> f64 {
    x * x * x
}

pub fn units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new("m³").aliases(&["m^3", "cubic meter", "cubic meters", "cu m", "cbm"]),
        UnitEntry::alias_group(
            "mm³",
            &[
                "mm^3",
                "cubic millimeter",
                "cubic millimeters",
                "cubic mm",
                "cu mm",
                "mm cu",
                "mm cubed",
                "millimeter cubed",
            ],
        ),
        UnitEntry::alias_group(
            "cm³",
            &[
                "cm^3",
                "cubic centimeter",
                "cubic centimeters",
                "cubic cm",
                "cu cm",
                "cm cu",
                "cm cubed",
                "centimeter cubed",
                "centimeters cubed",
                "cc",
            ],
        ),
        UnitEntry::alias_group(
            "dm³",
            &[
                "dm^3",
                "cubic decimeter",
                "cubic decimeters",
                "cubic dm",
                "cu dm",
                "dm cu",
                "dm cubed",
                "decimeter cubed",
                "decimeters cubed",
            ],
        ),
        UnitEntry::alias_group(
            "km³",
            &[
                "km^3",
                "cubic kilometer",
                "cubic kilometers",
                "cubic km",
                "cu km",
                "km cubed",
                "km cu",
                "kilometers cu",
                "kilometers cubed",
            ],
        ),
        UnitEntry::alias_group(
            "µm³",
            &[
                "µm^3",
                "um³",
                "um^3",
                "cubic micrometer",
                "cubic micrometers",
                "cubic µm",
                "cu µm",
                "cu um",
                "um cu",
                "µm cu",
                "µm cubed",
                "micrometer cubed",
                "micrometers cubed",
            ],
        ),
        UnitEntry::alias_group(
            "nm³",
            &[
                "nm^3",
                "cubic nanometer",
                "cubic nanometers",
                "cubic nm",
                "cu nm",
                "nm cu",
                "nm cubed",
                "nanometer cubed",
                "nanometers cubed",
            ],
        ),
        // Imperial
        UnitEntry::with_factor("in³", cube(INCH)).aliases(&[
            "in^3",
            "cubic inch",
            "cubic inches",
            "cu in",
        ]),
        UnitEntry::with_factor("ft³", cube(FOOT)).aliases(&[
            "ft^3",
            "cubic foot",
            "cubic feet",
            "cu ft",
        ]),
        UnitEntry::with_factor("yd³", cube(YARD)).aliases(&[
            "yd^3",
            "cubic yard",
            "cubic yards",
            "cu yd",
        ]),
        // Liquid measures (US)
        UnitEntry::with_factor("L", 0.001).aliases(&["liter", "liters", "litre", "litres"]),
        UnitEntry::with_factor("gal", 0.003785411784).aliases(&["gallon", "gallons"]),
        UnitEntry::with_factor("qt", 0.000946352946).aliases(&["quart", "quarts"]),
        UnitEntry::with_factor("pt", 0.000473176473).aliases(&["pint", "pints"]),
        UnitEntry::with_factor("fl oz", 2.95735296875e-05).aliases(&[
            "fluid ounce",
            "fluid ounces",
            "floz",
        ]),
        UnitEntry::with_factor("cup", 0.0002365882365).aliases(&["cups"]),
        UnitEntry::with_factor("tbsp", 1.47867648437e-05).aliases(&["tablespoon", "tablespoons"]),
        UnitEntry::with_factor("tsp", 4.92892161458e-06).aliases(&["teaspoon", "teaspoons"]),
        // Oil barrel
        UnitEntry::with_factor("bbl", 0.158987294928).aliases(&["barrel", "barrels"]),
        // Atomic
        UnitEntry::with_factor("Å³", cube(ANGSTROM)).aliases(&[
            "angstrom cubed",
            "angstrom^3",
            "A^3",
            "A³",
        ]),
        UnitEntry::with_factor("bohr³", cube(BOHR_RADIUS)).aliases(&[
            "bohr cubed",
            "bohr^3",
            "a0³",
            "a0^3",
            "atomic unit of volume",
        ]),
        // Astronomical
        UnitEntry::with_factor("AU³", cube(ASTRONOMICAL_UNIT))
            .aliases(&["AU^3", "astronomical unit cubed"]),
        UnitEntry::with_factor("pc³", cube(PARSEC)).aliases(&["parsec cubed", "parsec^3"]),
        UnitEntry::with_factor("ly³", cube(LIGHT_YEAR)).aliases(&[
            "light year cubed",
            "light-year cubed",
            "ly^3",
            "lightyear³",
        ]),
        UnitEntry::with_factor("lP³", cube(PLANCK_LENGTH)).aliases(&[
            "Planck volume",
            "planck volume",
            "lp^3",
            "lp³",
        ]),
    ]
}

pub fn configuration() -> EngineConfig {
    EngineConfig::new("volume", units())
        .with_prefixes(defaults::length_prefixes())
        .with_power(PowerRule::Cube)
}

/// Volume(s) in m³. Plain numbers are taken to be m³ already.
pub fn normalize_volume<'a>(input: impl Into<Input<'a>>) -> Result<Values> {
    VOLUME_ENGINE.normalize_values(input)
}

pub fn convert_volume_to_cubic_meters(value: f64, unit: &str) -> Result<f64> {
    VOLUME_ENGINE.convert_to_base(value, unit)
}
