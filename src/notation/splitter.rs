//! Tokenizer: raw string -> (marker, number, prefix, unit marker, unit)

use crate::notation::engine::Engine;
use crate::notation::error::{NotationError, Result};
use crate::notation::interpunct::normalize_interpunctuation;
use crate::notation::patterns::match_suffix;
use crate::notation::types::{SplitToken, UnitSplit};
use tracing::debug;

/// Characters a mantissa may consist of
const NUMERIC_CHARS: &str = "+-0123456789eE.";

impl Engine {
    /// Split a raw string into its parts without parsing the number.
    ///
    /// A magnitude prefix between two digits acts as the decimal separator
    /// ("1k234" is 1.234 k). Whitespace anywhere in the number is ignored.
    pub fn split(&self, raw: &str) -> Result<SplitToken> {
        let normalized = normalize_interpunctuation(raw.trim());
        let UnitSplit {
            remainder,
            unit_marker,
            mut unit,
        } = self.split_unit(&normalized);

        let compact: String = remainder.chars().filter(|c| !c.is_whitespace()).collect();
        let (marker, rest) = match self
            .patterns
            .leading_markers
            .as_ref()
            .and_then(|re| re.find(&compact))
        {
            Some(m) => (m.as_str(), &compact[m.end()..]),
            None => ("", compact.as_str()),
        };

        if rest.is_empty() {
            return Err(NotationError::empty_input(raw));
        }

        let (prefix, number) = self.extract_prefix(raw, rest, &mut unit)?;
        let number = self.strip_markers(&number);

        if number.is_empty() {
            return Err(NotationError::empty_input(raw));
        }
        if !number.chars().all(|c| NUMERIC_CHARS.contains(c)) {
            return Err(NotationError::non_numeric(raw, number));
        }

        Ok(SplitToken {
            marker: marker.to_string(),
            number: number.to_string(),
            prefix,
            unit_marker,
            unit,
        })
    }

    /// Split off the unit at the end of `s`.
    ///
    /// The longest alias at the end is replaced by its canonical form first, so
    /// an alias may expand into a prefixed unit ("sq cm" -> "cm²"). Then the
    /// longest canonical unit at the end is removed together with any markers
    /// directly in front of it.
    pub fn split_unit(&self, s: &str) -> UnitSplit {
        let substituted = match_suffix(self.patterns.aliases.as_ref(), s).and_then(
            |(start, alias)| {
                self.table.resolve_alias(alias).map(|canonical| {
                    debug!(alias, canonical, "unit alias substituted");
                    format!("{}{}", &s[..start], canonical)
                })
            },
        );
        let s = substituted.as_deref().unwrap_or(s);

        let (remainder, unit) = match match_suffix(self.patterns.units.as_ref(), s) {
            Some((start, unit)) => (s[..start].trim(), unit),
            None => (s.trim(), ""),
        };

        let (remainder, unit_marker) =
            match match_suffix(self.patterns.trailing_markers.as_ref(), remainder) {
                Some((start, marker)) => (remainder[..start].trim_end(), marker),
                None => (remainder, ""),
            };

        UnitSplit {
            remainder: remainder.to_string(),
            unit_marker: unit_marker.to_string(),
            unit: unit.to_string(),
        }
    }

    /// The longest magnitude prefix `s` ends with, and what precedes it
    pub fn suffix_prefix<'a>(&self, s: &'a str) -> Option<(&'a str, &'a str)> {
        match_suffix(self.patterns.prefix_suffix.as_ref(), s)
            .map(|(start, prefix)| (prefix, &s[..start]))
    }

    fn extract_prefix(&self, raw: &str, s: &str, unit: &mut String) -> Result<(String, String)> {
        if let Some((prefix, rest)) = self.suffix_prefix(s) {
            // "1.5cm" with no "cm" unit: the trailing "m" belongs to the unit
            if prefix == "m" {
                if let Some((inner, inner_rest)) = self.suffix_prefix(rest) {
                    debug!(input = raw, prefix = inner, "trailing 'm' moved to the unit");
                    unit.insert(0, 'm');
                    return Ok((inner.to_string(), inner_rest.to_string()));
                }
            }
            return Ok((prefix.to_string(), rest.to_string()));
        }

        let hits: Vec<(usize, char)> = s
            .char_indices()
            .filter(|(_, c)| self.table.is_prefix_char(*c))
            .collect();

        match hits.as_slice() {
            [] => Ok((String::new(), s.to_string())),
            [(0, c), ..] => Err(NotationError::LeadingPrefix {
                input: raw.to_string(),
                prefix: c.to_string(),
            }),
            [(idx, c)] => {
                let (before, after) = (&s[..*idx], &s[idx + c.len_utf8()..]);
                let between_digits = before.ends_with(|ch: char| ch.is_ascii_digit())
                    && after.starts_with(|ch: char| ch.is_ascii_digit());
                if !between_digits {
                    // Left in place, rejected as non-numeric residue
                    return Ok((c.to_string(), s.to_string()));
                }
                if s.contains('.') {
                    return Err(NotationError::DecimalSeparatorConflict {
                        input: raw.to_string(),
                        prefix: c.to_string(),
                    });
                }
                debug!(input = raw, prefix = %c, "prefix used as decimal separator");
                Ok((c.to_string(), format!("{}.{}", before, after)))
            }
            _ => Err(NotationError::AmbiguousPrefix {
                input: raw.to_string(),
                found: hits.iter().map(|(_, c)| c.to_string()).collect(),
            }),
        }
    }

    fn strip_markers<'a>(&self, s: &'a str) -> &'a str {
        let mut s = s.trim();
        loop {
            let before = s.len();
            for marker in self.table.markers() {
                s = s.trim_start_matches(marker.as_str());
                s = s.trim_end_matches(marker.as_str());
            }
            s = s.trim();
            if s.len() == before {
                return s;
            }
        }
    }
}
