//! Raw threshold values as configured by the user.
//!
//! Each filter declares whether it takes a number or text. The raw value
//! is mapped into the filter's own typed threshold when the filter is
//! built, so a pass never re-parses configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of value a filter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValueKind {
    Number,
    Text,
}

impl fmt::Display for FilterValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValueKind::Number => write!(f, "number"),
            FilterValueKind::Text => write!(f, "text"),
        }
    }
}

/// A configured threshold, before mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
}

impl FilterValue {
    /// Interpret a command-line / settings string for a filter of `kind`.
    ///
    /// Number filters get the string parsed when it is numeric; anything
    /// else stays text and is rejected later by the filter's value map.
    pub fn from_raw(raw: &str, kind: FilterValueKind) -> Self {
        match kind {
            FilterValueKind::Number => match raw.trim().parse::<f64>() {
                Ok(n) => FilterValue::Number(n),
                Err(_) => FilterValue::Text(raw.to_string()),
            },
            FilterValueKind::Text => FilterValue::Text(raw.to_string()),
        }
    }

    /// Finite numeric value, accepting numeric text the way a settings
    /// form field would hand it over
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            FilterValue::Number(n) => *n,
            FilterValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Text value; numbers are rendered back to text
    pub fn as_text(&self) -> String {
        match self {
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_number() {
        assert_eq!(
            FilterValue::from_raw(" 24 ", FilterValueKind::Number),
            FilterValue::Number(24.0)
        );
        assert_eq!(
            FilterValue::from_raw("abc", FilterValueKind::Number),
            FilterValue::Text("abc".to_string())
        );
    }

    #[test]
    fn test_from_raw_text_keeps_digits_as_text() {
        assert_eq!(
            FilterValue::from_raw("12", FilterValueKind::Text),
            FilterValue::Text("12".to_string())
        );
    }

    #[test]
    fn test_as_number() {
        assert_eq!(FilterValue::Number(1.5).as_number(), Some(1.5));
        assert_eq!(FilterValue::from("1.01").as_number(), Some(1.01));
        assert_eq!(FilterValue::from("leech").as_number(), None);
        assert_eq!(FilterValue::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn test_untagged_deserialize() {
        let n: FilterValue = serde_json::from_str("24").unwrap();
        let s: FilterValue = serde_json::from_str("\"金 -曜\"").unwrap();
        assert_eq!(n, FilterValue::Number(24.0));
        assert_eq!(s, FilterValue::Text("金 -曜".to_string()));
    }
}
