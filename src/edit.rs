//! Edit coercion and validation.
//!
//! Spring tokens are always numeric: raw input is parsed, and anything that
//! does not parse becomes the kind's default. Every other token stores the
//! raw input verbatim. No edit is ever rejected.

use log::{debug, warn};

use crate::classify::{classify, TokenKind};
use crate::types::{parse_number, TokenState, TokenValue};

// =============================================================================
// Kind defaults and input hints
// =============================================================================

/// Inclusive numeric input range with a step, for editor controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl TokenKind {
    /// Fallback for unparseable spring input. `None` for non-spring kinds.
    pub const fn default_value(self) -> Option<f64> {
        match self {
            Self::SpringStiffness => Some(200.0),
            Self::SpringDamping => Some(18.0),
            Self::SpringMass => Some(1.0),
            Self::Duration | Self::Motion => None,
        }
    }

    /// Suggested input range. Hints only, edits are not clamped.
    pub const fn input_range(self) -> Option<NumericRange> {
        match self {
            Self::SpringStiffness => Some(NumericRange { min: 1.0, max: 1000.0, step: 10.0 }),
            Self::SpringDamping => Some(NumericRange { min: 0.0, max: 100.0, step: 1.0 }),
            Self::SpringMass => Some(NumericRange { min: 0.1, max: 10.0, step: 0.1 }),
            Self::Duration | Self::Motion => None,
        }
    }
}

// =============================================================================
// Coercion
// =============================================================================

/// Normalize raw input for a token of the given kind.
pub fn coerce(kind: Option<TokenKind>, raw: &str) -> TokenValue {
    match kind.and_then(TokenKind::default_value) {
        Some(default) => match parse_number(raw) {
            Some(n) => TokenValue::Number(n),
            None => {
                debug!("Invalid spring input {:?}, using default {}", raw, default);
                TokenValue::Number(default)
            }
        },
        None => TokenValue::Text(raw.to_string()),
    }
}

/// Apply a single-token edit, returning the next state.
///
/// The identifier set never changes: an edit to an identifier outside the
/// state is logged and leaves the state as it was.
pub fn apply_edit(state: &TokenState, identifier: &str, raw: &str) -> TokenState {
    let value = coerce(classify(identifier), raw);
    match state.with_value(identifier, value) {
        Some(next) => next,
        None => {
            warn!("Ignoring edit to unknown token {}", identifier);
            state.clone()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
