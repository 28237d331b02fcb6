use crate::notation::defaults;
use crate::notation::error::{NotationError, Result};
use serde::{Deserialize, Serialize};

/// A canonical unit, its conversion factor to the domain's base unit and its aliases
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnitEntry {
    pub symbol: String,

    #[serde(default = "default_factor")]
    pub factor: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    // Alias groups only contribute aliases: their symbol is re-split
    // (e.g. "cm²" is parsed as prefix "c" + unit "m²")
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub alias_only: bool,
}

fn default_factor() -> f64 {
    1.0
}

impl UnitEntry {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            factor: 1.0,
            aliases: Vec::new(),
            alias_only: false,
        }
    }

    pub fn with_factor(symbol: &str, factor: f64) -> Self {
        Self {
            factor,
            ..Self::new(symbol)
        }
    }

    /// Aliases that resolve to a string which is not a unit of its own
    pub fn alias_group(symbol: &str, aliases: &[&str]) -> Self {
        Self {
            alias_only: true,
            ..Self::new(symbol).aliases(aliases)
        }
    }

    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_string()));
        self
    }
}

/// One magnitude prefix string and its decimal exponent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrefixEntry {
    pub symbol: String,
    pub exponent: i32,
}

impl PrefixEntry {
    pub fn new(symbol: &str, exponent: i32) -> Self {
        Self {
            symbol: symbol.to_string(),
            exponent,
        }
    }
}

/// How often a magnitude prefix applies to units of this domain.
/// "cm²" means (cm)², so the prefix factor has to be applied twice for area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerRule {
    #[default]
    Linear,
    Square,
    Cube,
}

impl PowerRule {
    pub fn exponent(self) -> i32 {
        match self {
            PowerRule::Linear => 1,
            PowerRule::Square => 2,
            PowerRule::Cube => 3,
        }
    }

    fn markers(self) -> &'static [&'static str] {
        match self {
            PowerRule::Linear => &[],
            PowerRule::Square => &["²", "^2", "square", "sq "],
            PowerRule::Cube => &["³", "^3", "cubic", "cu "],
        }
    }

    /// Power to raise the prefix multiplier to for the given unit symbol
    pub fn power_for(self, unit: &str) -> i32 {
        if self.markers().iter().any(|m| unit.contains(m)) {
            self.exponent()
        } else {
            1
        }
    }
}

/// Immutable bundle describing one notation domain
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    pub domain: String,

    #[serde(default)]
    pub power: PowerRule,

    #[serde(default = "defaults::markers")]
    pub markers: Vec<String>,

    #[serde(default)]
    pub units: Vec<UnitEntry>,

    #[serde(default = "defaults::si_prefixes")]
    pub prefixes: Vec<PrefixEntry>,
}

impl EngineConfig {
    pub fn new(domain: &str, units: Vec<UnitEntry>) -> Self {
        Self {
            domain: domain.to_string(),
            power: PowerRule::Linear,
            markers: defaults::markers(),
            units,
            prefixes: defaults::si_prefixes(),
        }
    }

    pub fn with_prefixes(mut self, prefixes: Vec<PrefixEntry>) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn with_markers(mut self, markers: &[&str]) -> Self {
        self.markers = markers.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_power(mut self, power: PowerRule) -> Self {
        self.power = power;
        self
    }

    /// Build the prefix table from consecutive power-of-1000 tiers.
    /// `first_exponent` is the exponent of the first tier, the first symbol
    /// of a tier is the one used for display and an empty tier has no prefix.
    pub fn with_prefix_tiers(mut self, first_exponent: i32, tiers: &[&[&str]]) -> Self {
        self.prefixes = tiers
            .iter()
            .enumerate()
            .flat_map(|(i, tier)| {
                let exponent = first_exponent + 3 * i as i32;
                tier.iter().map(move |s| PrefixEntry::new(s, exponent))
            })
            .collect();
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NotationError::config(e.to_string()))
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NotationError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| NotationError::config(e.to_string()))
    }
}
