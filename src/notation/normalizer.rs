//! Split tokens -> numeric values in the domain's base unit

use crate::notation::defaults::fraction_divisor;
use crate::notation::engine::Engine;
use crate::notation::error::{NotationError, Result};
use crate::notation::table::pow10;
use crate::notation::input::{Input, Normalized, Numeric, Scalar, Values};
use crate::notation::types::{NormalizeResult, SplitToken};
use tracing::warn;

impl Engine {
    /// Normalize a string, number or sequence of them.
    /// Nulls stay `None`, the first failing element aborts with its error.
    pub fn normalize<'a>(&self, input: impl Into<Input<'a>>) -> Result<Normalized> {
        match input.into() {
            Input::One(scalar) => self.normalize_scalar(&scalar).map(Normalized::One),
            Input::Many(values) => values
                .iter()
                .map(|scalar| self.normalize_scalar(scalar))
                .collect::<Result<Vec<_>>>()
                .map(Normalized::Many),
        }
    }

    /// Like [`Engine::normalize`], but elements that fail become `None`
    pub fn safe_normalize<'a>(&self, input: impl Into<Input<'a>>) -> Normalized {
        match input.into() {
            Input::One(scalar) => Normalized::One(self.safe_scalar(&scalar)),
            Input::Many(values) => {
                Normalized::Many(values.iter().map(|s| self.safe_scalar(s)).collect())
            }
        }
    }

    /// Normalize a single string
    pub fn normalize_str(&self, raw: &str) -> Result<NormalizeResult> {
        let token = self.split(raw)?;
        self.resolve(raw, token)
    }

    /// Numeric value(s) only, the unit is discarded. Nulls stay `None`.
    pub fn normalize_values<'a>(&self, input: impl Into<Input<'a>>) -> Result<Values> {
        self.normalize(input).map(Values::from)
    }

    /// Numeric value(s) only, the unit is discarded. Null is an error.
    pub fn normalize_numeric<'a>(&self, input: impl Into<Input<'a>>) -> Result<Numeric> {
        self.numeric_with(input.into(), |_, result| Ok(result.value))
    }

    /// Numeric value(s) only, with NaN in place of nulls and failures
    pub fn normalize_numeric_safe<'a>(&self, input: impl Into<Input<'a>>) -> Numeric {
        let value_of = |scalar: &Scalar| {
            self.safe_scalar(scalar)
                .map_or(f64::NAN, |result| result.value)
        };
        match input.into() {
            Input::One(scalar) => Numeric::Scalar(value_of(&scalar)),
            Input::Many(values) => Numeric::Sequence(values.iter().map(value_of).collect()),
        }
    }

    /// Numeric value(s), failing with [`NotationError::UnitMismatch`] when a
    /// string carries a unit other than `reference`. No unit counts as a match.
    pub fn normalize_numeric_verify_unit<'a>(
        &self,
        input: impl Into<Input<'a>>,
        reference: &str,
    ) -> Result<Numeric> {
        self.numeric_with(input.into(), |scalar, result| {
            if !result.unit.is_empty() && result.unit != reference {
                let input = match scalar {
                    Scalar::Text(s) => s.to_string(),
                    _ => String::new(),
                };
                return Err(NotationError::UnitMismatch {
                    input,
                    expected: reference.to_string(),
                    found: result.unit,
                });
            }
            Ok(result.value)
        })
    }

    /// Convert `value` given in `unit` (optionally prefixed) to the base unit
    pub fn convert_to_base(&self, value: f64, unit: &str) -> Result<f64> {
        self.normalize_str(&format!("{} {}", value, unit))
            .map(|result| result.value)
    }

    fn normalize_scalar(&self, scalar: &Scalar) -> Result<Option<NormalizeResult>> {
        match scalar {
            Scalar::Null => Ok(None),
            Scalar::Number(v) => Ok(Some(NormalizeResult::from_number(*v))),
            Scalar::Text(s) => self.normalize_str(s).map(Some),
        }
    }

    fn safe_scalar(&self, scalar: &Scalar) -> Option<NormalizeResult> {
        match self.normalize_scalar(scalar) {
            Ok(result) => result,
            Err(e) => {
                warn!(domain = self.domain(), "{}", e);
                None
            }
        }
    }

    fn numeric_with<F>(&self, input: Input, check: F) -> Result<Numeric>
    where
        F: Fn(&Scalar, NormalizeResult) -> Result<f64>,
    {
        let value_of = |scalar: &Scalar| match self.normalize_scalar(scalar)? {
            Some(result) => check(scalar, result),
            None => Err(NotationError::NullInput),
        };
        match input {
            Input::One(scalar) => value_of(&scalar).map(Numeric::Scalar),
            Input::Many(values) => values
                .iter()
                .map(value_of)
                .collect::<Result<Vec<_>>>()
                .map(Numeric::Sequence),
        }
    }

    fn resolve(&self, raw: &str, token: SplitToken) -> Result<NormalizeResult> {
        let original_number: f64 =
            token
                .number
                .parse()
                .map_err(|_| NotationError::InvalidNumber {
                    input: raw.to_string(),
                    residue: token.number.clone(),
                })?;

        let exponent = self.table.exponent(&token.prefix).unwrap_or(0);

        let (unit, unit_factor, divisor) = match fraction_divisor(&token.unit) {
            Some(divisor) => (String::new(), 1.0, divisor),
            None if token.unit.is_empty() => (String::new(), 1.0, 1.0),
            None => match self.table.factor(&token.unit) {
                Some(factor) => (token.unit, factor, 1.0),
                None => return Err(NotationError::unknown_unit(self.domain(), token.unit)),
            },
        };

        // "cm²" is (cm)², so the prefix applies once per dimension
        let power = self.table.power().power_for(&unit);
        let value = original_number * pow10(exponent * power) * unit_factor / divisor;

        Ok(NormalizeResult {
            marker: token.marker,
            value,
            original_number,
            unit_marker: token.unit_marker,
            unit,
            prefix: token.prefix,
            prefix_multiplier: pow10(exponent),
            unit_factor: unit_factor / divisor,
        })
    }
}
