//! End-anchored longest-match patterns compiled from a [`UnitTable`]

use crate::notation::error::{NotationError, Result};
use crate::notation::table::UnitTable;
use regex::Regex;
use tracing::trace;

/// Compiled matchers, cached on the engine for its lifetime
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Unit aliases at the end of the string
    pub aliases: Option<Regex>,
    /// Canonical units at the end of the string
    pub units: Option<Regex>,
    /// Magnitude prefixes at the end of the string
    pub prefix_suffix: Option<Regex>,
    /// Run of markers at the start of the string ("±Δ")
    pub leading_markers: Option<Regex>,
    /// Run of markers at the end of the string ("°" in "3.2 °C")
    pub trailing_markers: Option<Regex>,
}

impl Patterns {
    pub fn compile(table: &UnitTable) -> Result<Self> {
        let aliases: Vec<&str> = table.alias_names().collect();
        let units: Vec<&str> = table.unit_symbols().collect();
        let prefixes: Vec<&str> = table.prefix_symbols().collect();
        let markers: Vec<&str> = table.markers().iter().map(String::as_str).collect();

        trace!(
            domain = table.domain(),
            aliases = aliases.len(),
            units = units.len(),
            prefixes = prefixes.len(),
            "compiling notation patterns"
        );

        Ok(Self {
            aliases: build(&aliases, "(?:", ")$")?,
            units: build(&units, "(?:", ")$")?,
            prefix_suffix: build(&prefixes, "(?:", ")$")?,
            leading_markers: build(&markers, "^(?:", ")+")?,
            trailing_markers: build(&markers, "(?:", ")+$")?,
        })
    }
}

/// Alternation of the escaped items, longest first. With leftmost-first
/// matching and an end anchor the longest matching suffix wins.
fn build(items: &[&str], open: &str, close: &str) -> Result<Option<Regex>> {
    if items.is_empty() {
        return Ok(None);
    }

    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let alternation = sorted
        .iter()
        .map(|item| regex::escape(item))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("{}{}{}", open, alternation, close))
        .map(Some)
        .map_err(|e| NotationError::config(format!("Failed to compile pattern: {}", e)))
}

/// Find the last match of an end-anchored pattern, returning (start, matched text)
pub fn match_suffix<'a>(pattern: Option<&Regex>, s: &'a str) -> Option<(usize, &'a str)> {
    pattern
        .and_then(|re| re.find(s))
        .map(|m| (m.start(), m.as_str()))
}
