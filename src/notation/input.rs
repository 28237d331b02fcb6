//! Input and output shapes accepted and produced by the engine

use crate::notation::types::NormalizeResult;
use serde::Serialize;
use std::borrow::Cow;

/// A single value: nothing, an already parsed number or a string to parse
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Number(f64),
    Text(Cow<'a, str>),
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(s: &'a str) -> Self {
        Scalar::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Scalar<'_> {
    fn from(s: String) -> Self {
        Scalar::Text(Cow::Owned(s))
    }
}

impl From<f64> for Scalar<'_> {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<i32> for Scalar<'_> {
    fn from(v: i32) -> Self {
        Scalar::Number(f64::from(v))
    }
}

impl<'a, T: Into<Scalar<'a>>> From<Option<T>> for Scalar<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::Null, Into::into)
    }
}

/// One scalar or a sequence of them
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    One(Scalar<'a>),
    Many(Vec<Scalar<'a>>),
}

impl<'a> Input<'a> {
    /// Decode UTF-8 bytes, replacing invalid sequences
    pub fn from_utf8(bytes: &'a [u8]) -> Self {
        Input::One(Scalar::Text(String::from_utf8_lossy(bytes)))
    }
}

impl<'a> From<Scalar<'a>> for Input<'a> {
    fn from(s: Scalar<'a>) -> Self {
        Input::One(s)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::One(s.into())
    }
}

impl From<String> for Input<'_> {
    fn from(s: String) -> Self {
        Input::One(s.into())
    }
}

impl From<f64> for Input<'_> {
    fn from(v: f64) -> Self {
        Input::One(v.into())
    }
}

impl From<i32> for Input<'_> {
    fn from(v: i32) -> Self {
        Input::One(v.into())
    }
}

impl<'a, T: Into<Scalar<'a>>> From<Option<T>> for Input<'a> {
    fn from(v: Option<T>) -> Self {
        Input::One(v.into())
    }
}

impl<'a, T: Into<Scalar<'a>>> From<Vec<T>> for Input<'a> {
    fn from(values: Vec<T>) -> Self {
        Input::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<'a> From<&'a [&'a str]> for Input<'a> {
    fn from(values: &'a [&'a str]) -> Self {
        Input::Many(values.iter().map(|s| Scalar::from(*s)).collect())
    }
}

impl From<&[f64]> for Input<'_> {
    fn from(values: &[f64]) -> Self {
        Input::Many(values.iter().map(|v| Scalar::Number(*v)).collect())
    }
}

/// Result of [`Engine::normalize`](crate::notation::Engine::normalize),
/// shaped like its input. Null inputs stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    One(Option<NormalizeResult>),
    Many(Vec<Option<NormalizeResult>>),
}

impl Normalized {
    pub fn one(self) -> Option<NormalizeResult> {
        match self {
            Normalized::One(result) => result,
            Normalized::Many(_) => None,
        }
    }

    pub fn many(self) -> Vec<Option<NormalizeResult>> {
        match self {
            Normalized::One(result) => vec![result],
            Normalized::Many(results) => results,
        }
    }
}

/// Numeric values only, shaped like the input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl Numeric {
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Numeric::Scalar(v) => Some(*v),
            Numeric::Sequence(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Numeric::Scalar(v) => vec![v],
            Numeric::Sequence(values) => values,
        }
    }
}

/// Numeric values shaped like the input, with nulls kept as `None`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    One(Option<f64>),
    Many(Vec<Option<f64>>),
}

impl Values {
    pub fn one(&self) -> Option<f64> {
        match self {
            Values::One(value) => *value,
            Values::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<Option<f64>> {
        match self {
            Values::One(value) => vec![value],
            Values::Many(values) => values,
        }
    }
}

impl From<Normalized> for Values {
    fn from(normalized: Normalized) -> Self {
        let value_of = |result: Option<NormalizeResult>| result.map(|r| r.value);
        match normalized {
            Normalized::One(result) => Values::One(value_of(result)),
            Normalized::Many(results) => Values::Many(results.into_iter().map(value_of).collect()),
        }
    }
}
