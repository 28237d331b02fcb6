//! Unit and prefix lookup tables, built once from an [`EngineConfig`]

use crate::notation::config::{EngineConfig, PowerRule};
use crate::notation::error::{NotationError, Result};
use std::collections::{BTreeMap, HashMap};

/// 10^exponent, correctly rounded also for large magnitudes
pub fn pow10(exponent: i32) -> f64 {
    10f64.powf(f64::from(exponent))
}

#[derive(Debug, Clone)]
pub struct UnitTable {
    domain: String,
    power: PowerRule,
    markers: Vec<String>,
    /// canonical symbol -> factor to the base unit
    units: HashMap<String, f64>,
    /// alias -> canonical string (which may itself carry a prefix, e.g. "cm²")
    aliases: HashMap<String, String>,
    /// prefix -> decimal exponent
    prefixes: HashMap<String, i32>,
    /// exponent / 3 -> display prefix
    display: BTreeMap<i32, String>,
}

impl UnitTable {
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let mut units = HashMap::new();
        let mut aliases: HashMap<String, String> = HashMap::new();

        for entry in &config.units {
            if entry.symbol.is_empty() {
                return Err(NotationError::config(format!(
                    "empty unit symbol in domain '{}'",
                    config.domain
                )));
            }
            if !entry.factor.is_finite() {
                return Err(NotationError::config(format!(
                    "unit '{}' has non-finite factor {}",
                    entry.symbol, entry.factor
                )));
            }
            if !entry.alias_only && units.insert(entry.symbol.clone(), entry.factor).is_some() {
                return Err(NotationError::config(format!(
                    "unit '{}' is defined twice",
                    entry.symbol
                )));
            }
            for alias in &entry.aliases {
                if alias.is_empty() || *alias == entry.symbol {
                    continue;
                }
                if let Some(previous) = aliases.insert(alias.clone(), entry.symbol.clone()) {
                    return Err(NotationError::config(format!(
                        "alias '{}' maps to both '{}' and '{}'",
                        alias, previous, entry.symbol
                    )));
                }
            }
        }

        if let Some(alias) = aliases.keys().find(|a| units.contains_key(*a)) {
            return Err(NotationError::config(format!(
                "alias '{}' is also a unit",
                alias
            )));
        }

        for marker in &config.markers {
            if marker.is_empty() {
                return Err(NotationError::config("empty marker"));
            }
            if units.contains_key(marker) || aliases.contains_key(marker) {
                return Err(NotationError::config(format!(
                    "marker '{}' collides with a unit or alias",
                    marker
                )));
            }
        }

        let mut prefixes = HashMap::new();
        let mut display = BTreeMap::new();
        display.insert(0, String::new());
        for prefix in &config.prefixes {
            if prefix.symbol.is_empty() {
                return Err(NotationError::config("empty prefix symbol"));
            }
            if prefix.exponent == 0 {
                return Err(NotationError::config(format!(
                    "prefix '{}' has exponent 0",
                    prefix.symbol
                )));
            }
            match prefixes.insert(prefix.symbol.clone(), prefix.exponent) {
                Some(previous) if previous != prefix.exponent => {
                    return Err(NotationError::config(format!(
                        "prefix '{}' has exponents {} and {}",
                        prefix.symbol, previous, prefix.exponent
                    )));
                }
                _ => {}
            }
            if prefix.exponent % 3 == 0 {
                display
                    .entry(prefix.exponent / 3)
                    .or_insert_with(|| prefix.symbol.clone());
            }
        }

        Ok(Self {
            domain: config.domain.clone(),
            power: config.power,
            markers: config.markers.clone(),
            units,
            aliases,
            prefixes,
            display,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn power(&self) -> PowerRule {
        self.power
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Conversion factor of a canonical unit
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.units.get(unit).copied()
    }

    /// The table's own copy of a unit symbol
    pub fn canonical_unit(&self, unit: &str) -> Option<&str> {
        self.units.get_key_value(unit).map(|(symbol, _)| symbol.as_str())
    }

    pub fn resolve_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn exponent(&self, prefix: &str) -> Option<i32> {
        self.prefixes.get(prefix).copied()
    }

    /// Single-character prefixes take part in the mid-string scan ("1k5")
    pub fn is_prefix_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.prefixes.contains_key(&*c.encode_utf8(&mut buf))
    }

    /// Prefix used when formatting values of magnitude 1000^tier
    pub fn display_prefix(&self, tier: i32) -> Option<&str> {
        self.display.get(&tier).map(String::as_str)
    }

    /// Smallest and largest formattable tier (inclusive)
    pub fn tier_range(&self) -> (i32, i32) {
        let min = self.display.keys().next().copied().unwrap_or(0);
        let max = self.display.keys().next_back().copied().unwrap_or(0);
        (min, max)
    }

    pub fn unit_symbols(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn alias_names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    pub fn prefix_symbols(&self) -> impl Iterator<Item = &str> {
        self.prefixes.keys().map(String::as_str)
    }
}
