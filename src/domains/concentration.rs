//! Amount concentrations (normalized to mol/l) and mass concentrations
//! (normalized to g/l).
//!
//! Units per milliliter, microliter and nanoliter are listed as units of
//! their own so "mmol/ml" does not get read as milli-"mol/ml".

use crate::domains::constants::AVOGADRO;
use crate::notation::{defaults, Engine, EngineConfig, Input, Result, UnitEntry, Values};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref AMOUNT_CONCENTRATION_ENGINE: Engine = Engine::new(amount_configuration())
        .expect("built-in amount concentration tables are valid");
    pub static ref MASS_CONCENTRATION_ENGINE: Engine = Engine::new(mass_configuration())
        .expect("built-in mass concentration tables are valid");
}

/// Dimensionless fractions shared by both concentration kinds
fn fraction_units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::with_factor("%", 0.01).aliases(&["percent", "% v/v", "% w/v"]),
        UnitEntry::with_factor("ppm", 1e-6).aliases(&["parts per million"]),
        UnitEntry::with_factor("ppb", 1e-9).aliases(&["parts per billion"]),
        UnitEntry::with_factor("ppt", 1e-12).aliases(&["parts per trillion"]),
    ]
}

pub fn amount_units() -> Vec<UnitEntry> {
    let mut units = vec![
        UnitEntry::with_factor("1/l", 1.0 / AVOGADRO).aliases(&[
            "per liter",
            "per litre",
            "1/L",
            "1/litre",
            "1/liter",
            "per l",
        ]),
        UnitEntry::new("mol/l").aliases(&[
            "M",
            "mol/L",
            "molar",
            "mole per liter",
            "moles per liter",
        ]),
        UnitEntry::alias_group(
            "mmol/l",
            &[
                "mmol/L",
                "millimolar",
                "millimole per liter",
                "millimoles per liter",
            ],
        ),
        UnitEntry::alias_group(
            "µmol/l",
            &[
                "umol/l",
                "umol/L",
                "µmol/L",
                "micromolar",
                "micromole per liter",
                "micromoles per liter",
            ],
        ),
        UnitEntry::alias_group(
            "nmol/l",
            &[
                "nmol/L",
                "nanomolar",
                "nanomole per liter",
                "nanomoles per liter",
            ],
        ),
        UnitEntry::alias_group(
            "pmol/l",
            &[
                "pmol/L",
                "picomolar",
                "picomole per liter",
                "picomoles per liter",
            ],
        ),
        // Per milliliter
        UnitEntry::with_factor("mol/ml", 1e3).aliases(&[
            "mol/mL",
            "mole per milliliter",
            "moles per milliliter",
        ]),
        UnitEntry::with_factor("mmol/ml", 1.0).aliases(&[
            "mmol/mL",
            "millimole per milliliter",
            "millimoles per milliliter",
        ]),
        UnitEntry::with_factor("µmol/ml", 1e-3).aliases(&[
            "umol/ml",
            "umol/mL",
            "µmol/mL",
            "micromole per milliliter",
            "micromoles per milliliter",
        ]),
        UnitEntry::with_factor("nmol/ml", 1e-6).aliases(&[
            "nmol/mL",
            "nanomole per milliliter",
            "nanomoles per milliliter",
        ]),
        UnitEntry::with_factor("pmol/ml", 1e-9).aliases(&[
            "pmol/mL",
            "picomole per milliliter",
            "picomoles per milliliter",
        ]),
        // Per microliter
        UnitEntry::with_factor("mol/µl", 1e6).aliases(&[
            "mol/ul",
            "mol/uL",
            "mole per microliter",
            "moles per microliter",
        ]),
        UnitEntry::with_factor("mmol/µl", 1e3).aliases(&[
            "mmol/ul",
            "mmol/uL",
            "millimole per microliter",
            "millimoles per microliter",
        ]),
        UnitEntry::with_factor("µmol/µl", 1.0).aliases(&[
            "umol/ul",
            "umol/uL",
            "µmol/ul",
            "µmol/uL",
            "micromole per microliter",
            "micromoles per microliter",
        ]),
        UnitEntry::with_factor("nmol/µl", 1e-3).aliases(&[
            "nmol/ul",
            "nmol/uL",
            "nanomole per microliter",
            "nanomoles per microliter",
        ]),
        UnitEntry::with_factor("pmol/µl", 1e-6).aliases(&[
            "pmol/ul",
            "pmol/uL",
            "picomole per microliter",
            "picomoles per microliter",
        ]),
        // Per nanoliter
        UnitEntry::with_factor("mol/nl", 1e9).aliases(&[
            "mol/nL",
            "mole per nanoliter",
            "moles per nanoliter",
        ]),
        UnitEntry::with_factor("mmol/nl", 1e6).aliases(&[
            "mmol/nL",
            "millimole per nanoliter",
            "millimoles per nanoliter",
        ]),
        UnitEntry::with_factor("µmol/nl", 1e3).aliases(&[
            "umol/nl",
            "umol/nL",
            "µmol/nL",
            "micromole per nanoliter",
            "micromoles per nanoliter",
        ]),
        UnitEntry::with_factor("nmol/nl", 1.0).aliases(&[
            "nmol/nL",
            "nanomole per nanoliter",
            "nanomoles per nanoliter",
        ]),
        UnitEntry::with_factor("pmol/nl", 1e-3).aliases(&[
            "pmol/nL",
            "picomole per nanoliter",
            "picomoles per nanoliter",
        ]),
    ];
    units.extend(fraction_units());
    units
}

pub fn mass_units() -> Vec<UnitEntry> {
    let mut units = vec![
        UnitEntry::new("g/l").aliases(&["g/L", "gram per liter", "grams per liter"]),
        UnitEntry::alias_group(
            "mg/l",
            &["mg/L", "milligram per liter", "milligrams per liter"],
        ),
        UnitEntry::alias_group(
            "µg/l",
            &[
                "ug/l",
                "ug/L",
                "µg/L",
                "microgram per liter",
                "micrograms per liter",
            ],
        ),
        UnitEntry::alias_group(
            "ng/l",
            &["ng/L", "nanogram per liter", "nanograms per liter"],
        ),
        // Per milliliter
        UnitEntry::with_factor("g/ml", 1e3).aliases(&[
            "g/mL",
            "gram per milliliter",
            "grams per milliliter",
        ]),
        UnitEntry::with_factor("mg/ml", 1.0).aliases(&[
            "mg/mL",
            "milligram per milliliter",
            "milligrams per milliliter",
        ]),
        UnitEntry::with_factor("µg/ml", 1e-3).aliases(&[
            "ug/ml",
            "ug/mL",
            "µg/mL",
            "microgram per milliliter",
            "micrograms per milliliter",
        ]),
        UnitEntry::with_factor("ng/ml", 1e-6).aliases(&[
            "ng/mL",
            "nanogram per milliliter",
            "nanograms per milliliter",
        ]),
        UnitEntry::with_factor("pg/ml", 1e-9).aliases(&[
            "pg/mL",
            "picogram per milliliter",
            "picograms per milliliter",
        ]),
        // Per microliter
        UnitEntry::with_factor("g/µl", 1e6).aliases(&[
            "g/ul",
            "g/uL",
            "gram per microliter",
            "grams per microliter",
        ]),
        UnitEntry::with_factor("mg/µl", 1e3).aliases(&[
            "mg/ul",
            "mg/uL",
            "milligram per microliter",
            "milligrams per microliter",
        ]),
        UnitEntry::with_factor("µg/µl", 1.0).aliases(&[
            "ug/ul",
            "ug/uL",
            "µg/ul",
            "µg/uL",
            "microgram per microliter",
            "micrograms per microliter",
        ]),
        UnitEntry::with_factor("ng/µl", 1e-3).aliases(&[
            "ng/ul",
            "ng/uL",
            "nanogram per microliter",
            "nanograms per microliter",
        ]),
        UnitEntry::with_factor("pg/µl", 1e-6).aliases(&[
            "pg/ul",
            "pg/uL",
            "picogram per microliter",
            "picograms per microliter",
        ]),
        // Per nanoliter
        UnitEntry::with_factor("g/nl", 1e9).aliases(&[
            "g/nL",
            "g/nanoliter",
            "gram per nanoliter",
            "grams per nanoliter",
        ]),
        UnitEntry::with_factor("mg/nl", 1e6).aliases(&[
            "mg/nL",
            "milligram per nanoliter",
            "milligrams per nanoliter",
        ]),
        UnitEntry::with_factor("µg/nl", 1e3).aliases(&[
            "ug/nl",
            "ug/nL",
            "µg/nL",
            "microgram per nanoliter",
            "micrograms per nanoliter",
        ]),
        UnitEntry::with_factor("ng/nl", 1.0).aliases(&[
            "ng/nL",
            "nanogram per nanoliter",
            "nanograms per nanoliter",
        ]),
        UnitEntry::with_factor("pg/nl", 1e-3).aliases(&[
            "pg/nL",
            "picogram per nanoliter",
            "picograms per nanoliter",
        ]),
    ];
    units.extend(fraction_units());
    units
}

pub fn amount_configuration() -> EngineConfig {
    EngineConfig::new("amount-concentration", amount_units())
        .with_prefixes(defaults::length_prefixes())
}

pub fn mass_configuration() -> EngineConfig {
    EngineConfig::new("mass-concentration", mass_units()).with_prefixes(defaults::length_prefixes())
}

/// Amount concentration(s) in mol/l
pub fn normalize_amount_concentration<'a>(input: impl Into<Input<'a>>) -> Result<Values> {
    AMOUNT_CONCENTRATION_ENGINE.normalize_values(input)
}

pub fn convert_amount_concentration_to_mol_per_liter(value: f64, unit: &str) -> Result<f64> {
    AMOUNT_CONCENTRATION_ENGINE.convert_to_base(value, unit)
}

/// Mass concentration(s) in g/l
pub fn normalize_mass_concentration<'a>(input: impl Into<Input<'a>>) -> Result<Values> {
    MASS_CONCENTRATION_ENGINE.normalize_values(input)
}

pub fn convert_mass_concentration_to_grams_per_liter(value: f64, unit: &str) -> Result<f64> {
    MASS_CONCENTRATION_ENGINE.convert_to_base(value, unit)
}
