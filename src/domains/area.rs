//! Areas, normalized to square meters.
//!
//! Prefixes of squared units apply per dimension: 1 cm² is (0.01 m)².
//! Units without a square marker take the prefix once, so 1 µbarn is 1e-6 barn.

use crate::domains::constants::{
    ANGSTROM, ASTRONOMICAL_UNIT, BOHR_RADIUS, FOOT, INCH, LIGHT_YEAR, PARSEC, PLANCK_LENGTH, YARD,
};
use crate::notation::{
    defaults, Engine, EngineConfig, Input, PowerRule, Result, UnitEntry, Values,
};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref AREA_ENGINE: Engine =
        Engine::new(configuration()).expect("built-in area tables are valid");
}

pub fn units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new("m²").aliases(&["m^2", "square meter", "square meters", "sq m", "sqm"]),
        // Spelled-out prefixed meters, re-split into prefix + "m²"
        UnitEntry::alias_group(
            "mm²",
            &[
                "mm^2",
                "square millimeter",
                "square millimeters",
                "square mm",
                "sq mm",
                "mm sq",
                "mm squared",
                "millimeter squared",
            ],
        ),
        UnitEntry::alias_group(
            "cm²",
            &[
                "cm^2",
                "square centimeter",
                "square centimeters",
                "square cm",
                "sq cm",
                "cm sq",
                "cm squared",
                "centimeter squared",
                "centimeters squared",
            ],
        ),
        UnitEntry::alias_group(
            "dm²",
            &[
                "dm^2",
                "square decimeter",
                "square decimeters",
                "square dm",
                "sq dm",
                "dm sq",
                "dm squared",
                "decimeter squared",
                "decimeters squared",
            ],
        ),
        UnitEntry::alias_group(
            "km²",
            &[
                "km^2",
                "square kilometer",
                "square kilometers",
                "square km",
                "sq km",
                "km squared",
                "km sq",
                "kilometers sq",
                "kilometers squared",
            ],
        ),
        UnitEntry::alias_group(
            "µm²",
            &[
                "µm^2",
                "um²",
                "um^2",
                "square micrometer",
                "square micrometers",
                "square µm",
                "sq µm",
                "sq um",
                "um sq",
                "µm sq",
                "µm squared",
                "micrometer squared",
                "micrometers squared",
            ],
        ),
        UnitEntry::alias_group(
            "nm²",
            &[
                "nm^2",
                "square nanometer",
                "square nanometers",
                "square nm",
                "sq nm",
                "nm sq",
                "nm squared",
                "nanometer squared",
                "nanometers squared",
            ],
        ),
        // Imperial
        UnitEntry::with_factor("in²", INCH * INCH).aliases(&[
            "in^2",
            "square inch",
            "square inches",
            "sq in",
        ]),
        UnitEntry::with_factor("ft²", FOOT * FOOT).aliases(&[
            "ft^2",
            "square foot",
            "square feet",
            "sq ft",
        ]),
        UnitEntry::with_factor("yd²", YARD * YARD).aliases(&[
            "yd^2",
            "square yard",
            "square yards",
            "sq yd",
        ]),
        // Land
        UnitEntry::with_factor("acre", 4046.8564224).aliases(&["acres"]),
        UnitEntry::with_factor("ha", 10000.0).aliases(&["hectare", "hectares"]),
        UnitEntry::with_factor("are", 100.0).aliases(&["ares"]),
        UnitEntry::with_factor("ca", 1.0).aliases(&["centiare", "centiares"]),
        UnitEntry::with_factor("decare", 1000.0).aliases(&["decares"]),
        // Cross sections
        UnitEntry::with_factor("barn", 1e-28).aliases(&["barns", "b"]),
        UnitEntry::with_factor("Å²", ANGSTROM * ANGSTROM).aliases(&[
            "angstrom squared",
            "angstrom^2",
            "A^2",
            "A²",
        ]),
        UnitEntry::with_factor("bohr²", BOHR_RADIUS * BOHR_RADIUS).aliases(&[
            "bohr squared",
            "bohr^2",
            "a0²",
            "a0^2",
            "atomic unit of area",
        ]),
        // Astronomical
        UnitEntry::with_factor("AU²", ASTRONOMICAL_UNIT * ASTRONOMICAL_UNIT)
            .aliases(&["AU^2", "astronomical unit squared"]),
        UnitEntry::with_factor("pc²", PARSEC * PARSEC).aliases(&["parsec squared", "parsec^2"]),
        UnitEntry::with_factor("ly²", LIGHT_YEAR * LIGHT_YEAR).aliases(&[
            "light year squared",
            "light-year squared",
            "ly^2",
            "lightyear²",
        ]),
        UnitEntry::with_factor("lP²", PLANCK_LENGTH * PLANCK_LENGTH).aliases(&[
            "Planck area",
            "planck area",
            "lp^2",
            "lp²",
        ]),
    ]
}

pub fn configuration() -> EngineConfig {
    EngineConfig::new("area", units())
        .with_prefixes(defaults::length_prefixes())
        .with_power(PowerRule::Square)
}

/// Area(s) in m². Plain numbers are taken to be m² already.
pub fn normalize_area<'a>(input: impl Into<Input<'a>>) -> Result<Values> {
    AREA_ENGINE.normalize_values(input)
}

pub fn convert_area_to_square_meters(value: f64, unit: &str) -> Result<f64> {
    AREA_ENGINE.convert_to_base(value, unit)
}
