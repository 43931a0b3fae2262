//! Lenient JSON leaf values.
//!
//! Workflow exports are not consistently typed: a score can arrive as a
//! number, a numeric string, or garbage. [`Scalar`] captures any JSON leaf
//! and defers type coercion to the table builder, which turns unparsable
//! values into nulls instead of failing the batch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single JSON leaf value: boolean, number, or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// String representation: numbers without trailing zeros, booleans as
    /// `true`/`false`.
    pub fn as_text(&self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => format_numeric(*n),
            Scalar::Text(s) => s.clone(),
        }
    }

    /// Numeric view. Text is parsed after trimming; booleans and
    /// unparsable text yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Bool(_) => None,
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => parse_f64(s),
        }
    }

    /// Integer view. Numbers truncate; text must parse as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Bool(_) => None,
            Scalar::Number(n) => Some(*n as i64),
            Scalar::Text(s) => parse_i64(s),
        }
    }

    /// Truthiness: booleans as-is, nonzero numbers, non-empty text.
    pub fn truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => *n != 0.0,
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_each_leaf_kind() {
        assert_eq!(
            serde_json::from_str::<Scalar>("true").unwrap(),
            Scalar::Bool(true)
        );
        assert_eq!(
            serde_json::from_str::<Scalar>("42").unwrap(),
            Scalar::Number(42.0)
        );
        assert_eq!(
            serde_json::from_str::<Scalar>("\"QC\"").unwrap(),
            Scalar::Text("QC".to_string())
        );
    }

    #[test]
    fn numeric_views() {
        assert_eq!(Scalar::Number(1.25).as_f64(), Some(1.25));
        assert_eq!(Scalar::Text(" 30 ".into()).as_f64(), Some(30.0));
        assert_eq!(Scalar::Text("not-a-number".into()).as_f64(), None);
        assert_eq!(Scalar::Bool(true).as_f64(), None);
        assert_eq!(Scalar::Number(3.9).as_i64(), Some(3));
        assert_eq!(Scalar::Text("6".into()).as_i64(), Some(6));
        assert_eq!(Scalar::Text("6.5".into()).as_i64(), None);
    }

    #[test]
    fn truthiness() {
        assert!(Scalar::Bool(true).truthy());
        assert!(!Scalar::Bool(false).truthy());
        assert!(Scalar::Number(-1.0).truthy());
        assert!(!Scalar::Number(0.0).truthy());
        assert!(Scalar::Text("x".into()).truthy());
        assert!(!Scalar::Text(String::new()).truthy());
    }

    #[test]
    fn text_formatting_drops_trailing_zeros() {
        assert_eq!(Scalar::Number(1.50).as_text(), "1.5");
        assert_eq!(Scalar::Number(10.0).as_text(), "10");
        assert_eq!(Scalar::Bool(false).as_text(), "false");
    }
}
