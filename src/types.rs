//! Core types for motion-tokens.
//!
//! These types define the foundation that everything builds on.
//! They flow through the reactive pipeline and define what the sinks understand.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// TokenValue
// =============================================================================

/// The current value of a single token.
///
/// Duration and easing tokens carry free-form text (`"150ms"`,
/// `"cubic-bezier(0.2, 0, 0, 1)"`). Spring tokens carry numbers once they have
/// been parsed or edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Numeric value (spring coefficients, unitless durations).
    Number(f64),
    /// Any textual value, stored verbatim.
    Text(String),
}

impl TokenValue {
    /// Check if this is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Get the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Get the text value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

/// Numbers print without a trailing `.0` (`42`, `0.5`), matching how style
/// variables expect them.
impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// =============================================================================
// Number parsing
// =============================================================================

/// Parse the longest leading floating-point number in `raw`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12px"`
/// parses as `12.0`. Returns `None` when no digits lead the input or the
/// result is not finite. Never yields `NaN`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

// =============================================================================
// TokenState
// =============================================================================

/// The authoritative mapping from token identifier to current value.
///
/// Iteration follows schema order. The identifier set is fixed at creation:
/// [`TokenState::with_value`] only ever replaces existing entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenState {
    values: IndexMap<String, TokenValue>,
}

impl TokenState {
    /// Build a state from already-resolved pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, TokenValue)>,
        K: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Get the current value of a token.
    pub fn get(&self, identifier: &str) -> Option<&TokenValue> {
        self.values.get(identifier)
    }

    /// Check if the state holds this identifier.
    pub fn contains(&self, identifier: &str) -> bool {
        self.values.contains_key(identifier)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the state has no tokens.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Identifiers in schema order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// (identifier, value) pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Return a copy with one identifier's value replaced.
    ///
    /// Returns `None` if the identifier is not part of this state, so the
    /// identifier set can never grow.
    pub fn with_value(&self, identifier: &str, value: TokenValue) -> Option<Self> {
        if !self.values.contains_key(identifier) {
            return None;
        }
        let mut next = self.clone();
        if let Some(slot) = next.values.get_mut(identifier) {
            *slot = value;
        }
        Some(next)
    }
}

// =============================================================================
// Tests
// =============================================================================
