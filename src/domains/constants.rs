//! Physical constants used by the domain tables, in SI base units (CODATA 2018)

pub const INCH: f64 = 0.0254;
pub const FOOT: f64 = 0.3048;
pub const YARD: f64 = 0.9144;
pub const MILE: f64 = 1609.344;
pub const NAUTICAL_MILE: f64 = 1852.0;
/// Typographic (PostScript) point
pub const POINT: f64 = INCH / 72.0;
pub const MIL: f64 = 1e-3 * INCH;

pub const ASTRONOMICAL_UNIT: f64 = 149_597_870_700.0;
/// Julian year times the speed of light
pub const LIGHT_YEAR: f64 = 9_460_730_472_580_800.0;
pub const PARSEC: f64 = 3.085_677_581_491_367_3e16;

pub const ANGSTROM: f64 = 1e-10;
pub const BOHR_RADIUS: f64 = 5.291_772_109_03e-11;
pub const PLANCK_LENGTH: f64 = 1.616_255e-35;

pub const AVOGADRO: f64 = 6.022_140_76e23;

pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 3600.0;
pub const DAY: f64 = 86400.0;
pub const WEEK: f64 = 7.0 * DAY;
/// Gregorian year, 365.2425 days
pub const YEAR: f64 = 31_556_952.0;
pub const MONTH: f64 = YEAR / 12.0;
