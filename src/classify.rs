//! Token classification.
//!
//! Kinds are never stored. They are recomputed from the identifier whenever
//! needed, using substring rules checked in a fixed order (first match wins):
//!
//! 1. `DURATION` → [`TokenKind::Duration`]
//! 2. `MOTION` or `EASING` → [`TokenKind::Motion`]
//! 3. `SPRING` plus `STIFFNESS` / `DAMPING` / `MASS` → the matching spring kind
//!
//! Anything else is unclassified and stays out of every kind-specific bucket.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

/// Separator between identifier segments (`THUMB_HOVER_DURATION`).
pub const SEGMENT_SEPARATOR: char = '_';

// =============================================================================
// TokenKind
// =============================================================================

/// Semantic category of a token, governing coercion and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Duration,
    Motion,
    SpringStiffness,
    SpringDamping,
    SpringMass,
}

impl TokenKind {
    /// All kinds in presentation order.
    pub const fn all() -> &'static [TokenKind] {
        &[
            Self::Duration,
            Self::Motion,
            Self::SpringStiffness,
            Self::SpringDamping,
            Self::SpringMass,
        ]
    }

    /// Stable name (`duration`, `spring-damping`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Motion => "motion",
            Self::SpringStiffness => "spring-stiffness",
            Self::SpringDamping => "spring-damping",
            Self::SpringMass => "spring-mass",
        }
    }

    /// The single flag for this kind.
    pub const fn flag(self) -> KindSet {
        match self {
            Self::Duration => KindSet::DURATION,
            Self::Motion => KindSet::MOTION,
            Self::SpringStiffness => KindSet::SPRING_STIFFNESS,
            Self::SpringDamping => KindSet::SPRING_DAMPING,
            Self::SpringMass => KindSet::SPRING_MASS,
        }
    }

    /// Check if this is one of the three spring-physics kinds.
    pub fn is_spring(self) -> bool {
        KindSet::SPRING.contains(self.flag())
    }

    /// Check if values of this kind are picked from the base table.
    pub fn is_selectable(self) -> bool {
        KindSet::SELECTABLE.contains(self.flag())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duration" => Ok(Self::Duration),
            "motion" => Ok(Self::Motion),
            "spring-stiffness" => Ok(Self::SpringStiffness),
            "spring-damping" => Ok(Self::SpringDamping),
            "spring-mass" => Ok(Self::SpringMass),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

bitflags! {
    /// Set of token kinds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KindSet: u8 {
        const DURATION = 1 << 0;
        const MOTION = 1 << 1;
        const SPRING_STIFFNESS = 1 << 2;
        const SPRING_DAMPING = 1 << 3;
        const SPRING_MASS = 1 << 4;

        /// Spring-physics coefficients (numeric, coerced on edit).
        const SPRING = Self::SPRING_STIFFNESS.bits()
            | Self::SPRING_DAMPING.bits()
            | Self::SPRING_MASS.bits();
        /// Free-form values offered with base-table options.
        const SELECTABLE = Self::DURATION.bits() | Self::MOTION.bits();
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Classify an identifier. Pure and total: every identifier maps to at most
/// one kind.
pub fn classify(identifier: &str) -> Option<TokenKind> {
    if identifier.contains("DURATION") {
        return Some(TokenKind::Duration);
    }
    if identifier.contains("MOTION") || identifier.contains("EASING") {
        return Some(TokenKind::Motion);
    }
    if identifier.contains("SPRING") {
        if identifier.contains("STIFFNESS") {
            return Some(TokenKind::SpringStiffness);
        }
        if identifier.contains("DAMPING") {
            return Some(TokenKind::SpringDamping);
        }
        if identifier.contains("MASS") {
            return Some(TokenKind::SpringMass);
        }
    }
    None
}

/// Check if an identifier names a spring-physics token.
pub fn is_spring(identifier: &str) -> bool {
    classify(identifier).is_some_and(TokenKind::is_spring)
}

// =============================================================================
// Sub-components
// =============================================================================

/// The owning sub-component: everything before the first separator.
///
/// Identifiers without a separator are their own component.
pub fn component_of(identifier: &str) -> &str {
    identifier
        .split(SEGMENT_SEPARATOR)
        .next()
        .unwrap_or(identifier)
}

/// Human-readable label for a sub-component. Unknown names pass through.
pub fn component_label(component: &str) -> &str {
    match component {
        "THUMB" => "Thumb",
        "AXIS" => "Slider axis",
        "COUNTER" => "Counter",
        "SLIDER" => "General settings",
        other => other,
    }
}

// =============================================================================
// Tests
// =============================================================================
