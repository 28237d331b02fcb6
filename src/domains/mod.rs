// Built-in notation domains: one engine per physical quantity

pub mod area;
pub mod concentration;
pub mod constants;
pub mod length;
pub mod timespan;
pub mod volume;

#[cfg(test)]
mod tests;

use crate::notation::{Engine, DEFAULT_ENGINE};

pub use area::{convert_area_to_square_meters, normalize_area};
pub use concentration::{
    convert_amount_concentration_to_mol_per_liter, convert_mass_concentration_to_grams_per_liter,
    normalize_amount_concentration, normalize_mass_concentration,
};
pub use length::{convert_length_to_meters, normalize_length};
pub use timespan::{convert_timespan_to_seconds, normalize_timespan};
pub use volume::{convert_volume_to_cubic_meters, normalize_volume};

/// Domain name and the base unit its values are normalized to
pub const DOMAINS: &[(&str, &str)] = &[
    ("generic", ""),
    ("length", "m"),
    ("area", "m²"),
    ("volume", "m³"),
    ("amount-concentration", "mol/l"),
    ("mass-concentration", "g/l"),
    ("timespan", "s"),
];

/// Look up a built-in engine by domain name
pub fn engine(domain: &str) -> Option<&'static Engine> {
    let engine: &'static Engine = match domain {
        "generic" => &*DEFAULT_ENGINE,
        "length" => &*length::LENGTH_ENGINE,
        "area" => &*area::AREA_ENGINE,
        "volume" => &*volume::VOLUME_ENGINE,
        "amount-concentration" => &*concentration::AMOUNT_CONCENTRATION_ENGINE,
        "mass-concentration" => &*concentration::MASS_CONCENTRATION_ENGINE,
        "timespan" => &*timespan::TIMESPAN_ENGINE,
        _ => return None,
    };
    Some(engine)
}

/// Base unit of a built-in domain
pub fn base_unit(domain: &str) -> Option<&'static str> {
    DOMAINS
        .iter()
        .find(|(name, _)| *name == domain)
        .map(|(_, unit)| *unit)
}
