//! Built-in tables for the generic (electrical/physics) notation domain

use crate::notation::config::{EngineConfig, PrefixEntry, UnitEntry};

/// Markers that may precede the number ("±5%") or the unit ("3.2 °C")
pub fn markers() -> Vec<String> {
    ["Δ", "±", "°"].iter().map(|m| m.to_string()).collect()
}

/// SI magnitude prefixes. Order matters: the first symbol listed for an
/// exponent is the one used when formatting.
pub fn si_prefixes() -> Vec<PrefixEntry> {
    vec![
        PrefixEntry::new("y", -24),
        PrefixEntry::new("z", -21),
        PrefixEntry::new("a", -18),
        PrefixEntry::new("f", -15),
        PrefixEntry::new("p", -12),
        PrefixEntry::new("n", -9),
        // micro: micro sign, greek mu, ascii
        PrefixEntry::new("µ", -6),
        PrefixEntry::new("μ", -6),
        PrefixEntry::new("u", -6),
        PrefixEntry::new("m", -3),
        PrefixEntry::new("k", 3),
        PrefixEntry::new("M", 6),
        PrefixEntry::new("G", 9),
        PrefixEntry::new("T", 12),
        PrefixEntry::new("P", 15),
        PrefixEntry::new("E", 18),
        PrefixEntry::new("Z", 21),
        PrefixEntry::new("Y", 24),
    ]
}

/// SI prefixes plus centi and deci, for lengths, areas, volumes and concentrations.
/// c and d are only ever parsed, never displayed.
pub fn length_prefixes() -> Vec<PrefixEntry> {
    let mut prefixes = si_prefixes();
    prefixes.push(PrefixEntry::new("c", -2));
    prefixes.push(PrefixEntry::new("d", -1));
    prefixes
}

/// Pseudo-units that scale the value and then disappear from the result.
/// Returned as the divisor: "12.5 ppm" is 12.5 / 1e6, exactly 1.25e-5.
pub fn fraction_divisor(unit: &str) -> Option<f64> {
    match unit {
        "%" => Some(1e2),
        "ppm" => Some(1e6),
        "ppb" => Some(1e9),
        _ => None,
    }
}

pub fn generic_units() -> Vec<UnitEntry> {
    vec![
        // Electrical
        UnitEntry::new("F").aliases(&["Farad", "farad", "farads"]),
        UnitEntry::new("A").aliases(&["Amp", "Amps", "Ampere", "amperes"]),
        // U+2126 OHM SIGN resolves to U+03A9 GREEK CAPITAL LETTER OMEGA
        UnitEntry::new("Ω").aliases(&["\u{2126}", "Ohm", "Ohms", "ohm", "ohms", "R"]),
        UnitEntry::new("W").aliases(&["Watt", "Watts", "watt", "watts"]),
        UnitEntry::new("H").aliases(&["Henry", "Henries", "henry", "henries"]),
        UnitEntry::new("C").aliases(&["Coulomb", "coulombs"]),
        UnitEntry::new("V").aliases(&["Volt", "Volts", "volt", "volts"]),
        UnitEntry::new("J").aliases(&["Joule", "Joules", "joule", "joules"]),
        UnitEntry::new("S").aliases(&["Siemens", "siemens"]),
        UnitEntry::new("Hz").aliases(&["Hertz", "hertz"]),
        UnitEntry::new("K").aliases(&["Kelvin", "kelvin"]),
        // Time
        UnitEntry::new("s").aliases(&["second", "seconds", "sec"]),
        UnitEntry::new("h").aliases(&["hour", "hours", "hr"]),
        UnitEntry::new("min").aliases(&["minute", "minutes"]),
        // Fractions
        UnitEntry::new("ppm").aliases(&["parts per million"]),
        UnitEntry::new("ppb").aliases(&["parts per billion"]),
        UnitEntry::new("%").aliases(&["percent", "percentage"]),
        // Lighting
        UnitEntry::new("lm").aliases(&["lumen", "lumens"]),
        UnitEntry::new("lx").aliases(&["lux"]),
        UnitEntry::new("cd").aliases(&["candela", "candelas"]),
        // Composite
        UnitEntry::new("C/W"),
        UnitEntry::new("€/km"),
        UnitEntry::new("€/m"),
        UnitEntry::new("F/m"),
        UnitEntry::new("V/√Hz"),
        UnitEntry::new("A/√Hz"),
        // Currencies
        UnitEntry::new("€").aliases(&["Euro", "Euros", "euro", "euros"]),
        UnitEntry::new("$").aliases(&["Dollar", "Dollars", "dollar", "dollars", "USD"]),
        UnitEntry::new("元").aliases(&["Yuan", "yuan", "CNY"]),
        UnitEntry::new("﷼").aliases(&["Riyal", "riyal", "SAR"]),
        UnitEntry::new("₽").aliases(&["Ruble", "ruble", "RUB"]),
        UnitEntry::new("௹").aliases(&["Rupee", "rupee", "INR"]),
        UnitEntry::new("૱"),
        UnitEntry::new("₺").aliases(&["Lira", "lira", "TRY"]),
        UnitEntry::new("Zł").aliases(&["Zloty", "zloty", "PLN"]),
        UnitEntry::new("₩").aliases(&["Won", "won", "KRW"]),
        UnitEntry::new("¥").aliases(&["Yen", "yen", "JPY"]),
    ]
}

/// Configuration of the default engine
pub fn generic() -> EngineConfig {
    EngineConfig::new("generic", generic_units())
}
