use crate::notation::config::EngineConfig;
use crate::notation::defaults;
use crate::notation::error::Result;
use crate::notation::patterns::Patterns;
use crate::notation::table::UnitTable;
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    /// Process-wide engine for the generic electrical/physics units
    pub static ref DEFAULT_ENGINE: Engine =
        Engine::new(defaults::generic()).expect("built-in generic notation tables are valid");
}

/// Parser and formatter for one notation domain.
///
/// Immutable after construction and safe to share between threads.
/// To change units or prefixes, build a new engine from a new [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    pub(crate) table: UnitTable,
    pub(crate) patterns: Patterns,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let table = UnitTable::from_config(&config)?;
        let patterns = Patterns::compile(&table)?;
        debug!(domain = %config.domain, "notation engine ready");
        Ok(Self {
            config,
            table,
            patterns,
        })
    }

    pub fn generic() -> &'static Engine {
        &DEFAULT_ENGINE
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn domain(&self) -> &str {
        &self.config.domain
    }

    pub fn table(&self) -> &UnitTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::config::UnitEntry;
    use crate::notation::error::NotationError;

    #[test]
    fn test_default_engine() {
        let engine = Engine::generic();
        assert_eq!(engine.domain(), "generic");
        assert_eq!(engine.table().factor("Ω"), Some(1.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig::new(
            "broken",
            vec![
                UnitEntry::new("a").aliases(&["x"]),
                UnitEntry::new("b").aliases(&["x"]),
            ],
        );
        assert!(matches!(Engine::new(config), Err(NotationError::Config(_))));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
