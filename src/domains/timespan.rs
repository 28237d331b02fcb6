//! Timespans, normalized to seconds

use crate::domains::constants::{DAY, HOUR, MINUTE, MONTH, WEEK, YEAR};
use crate::notation::{Engine, EngineConfig, Input, Result, UnitEntry, Values};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref TIMESPAN_ENGINE: Engine =
        Engine::new(configuration()).expect("built-in timespan tables are valid");
}

pub fn units() -> Vec<UnitEntry> {
    vec![
        UnitEntry::new("s").aliases(&["second", "seconds", "sec", "secs"]),
        // Spelled-out prefixed seconds, re-split into prefix + "s"
        UnitEntry::alias_group("as", &["attosecond", "attoseconds", "asec", "asecs"]),
        UnitEntry::alias_group("fs", &["femtosecond", "femtoseconds", "fsec", "fsecs"]),
        UnitEntry::alias_group("ps", &["picosecond", "picoseconds", "psec", "psecs"]),
        UnitEntry::alias_group("ns", &["nanosecond", "nanoseconds", "nsec", "nsecs"]),
        UnitEntry::alias_group(
            "µs",
            &["microsecond", "microseconds", "µsecond", "µsec", "usec", "us"],
        ),
        UnitEntry::alias_group("ms", &["millisecond", "milliseconds"]),
        UnitEntry::with_factor("min", MINUTE).aliases(&["minute", "minutes"]),
        UnitEntry::with_factor("h", HOUR).aliases(&["hour", "hours"]),
        UnitEntry::with_factor("d", DAY).aliases(&["day", "days"]),
        UnitEntry::with_factor("w", WEEK).aliases(&["week", "weeks"]),
        UnitEntry::with_factor("mo", MONTH).aliases(&["month", "months"]),
        UnitEntry::with_factor("y", YEAR).aliases(&["year", "years"]),
        UnitEntry::with_factor("decade", 10.0 * YEAR).aliases(&["decades"]),
        UnitEntry::with_factor("century", 100.0 * YEAR).aliases(&["centuries"]),
        UnitEntry::with_factor("millenium", 1000.0 * YEAR).aliases(&[
            "millenia",
            "millennium",
            "millennia",
        ]),
        // Prefixed years, re-split into prefix + "y"
        UnitEntry::alias_group("My", &["megayear", "megayears", "Myr", "Myrs"]),
        UnitEntry::alias_group("Gy", &["gigayear", "gigayears", "Gyr", "Gyrs"]),
        UnitEntry::alias_group("Ty", &["terayear", "terayears", "Tyr", "Tyrs"]),
    ]
}

/// Plain SI prefixes: "d" is a day here, not deci
pub fn configuration() -> EngineConfig {
    EngineConfig::new("timespan", units())
}

/// Timespan(s) in seconds. Plain numbers are taken to be seconds already.
pub fn normalize_timespan<'a>(input: impl Into<Input<'a>>) -> Result<Values> {
    TIMESPAN_ENGINE.normalize_values(input)
}

pub fn convert_timespan_to_seconds(value: f64, unit: &str) -> Result<f64> {
    TIMESPAN_ENGINE.convert_to_base(value, unit)
}
