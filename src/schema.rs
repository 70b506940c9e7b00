//! Component token schema and base-table resolution.
//!
//! A schema entry is either a literal value or a reference into the shared
//! base token table. References are written `tokens.<category>('<key>')` in
//! the JSON sources and parsed once, at load time, into
//! [`SchemaEntry::Reference`].
//!
//! # Example
//!
//! ```ignore
//! use motion_tokens::schema::{BaseTokenTable, ComponentTokenSchema, resolve};
//!
//! let schema = ComponentTokenSchema::from_json(r#"{"THUMB_HOVER_DURATION": "tokens.duration('100')"}"#)?;
//! let base = BaseTokenTable::from_json(r#"{"duration": {"100": "150ms"}, "motion": {}}"#)?;
//!
//! let state = resolve(&schema, &base);
//! assert_eq!(state.get("THUMB_HOVER_DURATION").unwrap().to_string(), "150ms");
//! ```

use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::classify::is_spring;
use crate::error::ConfigError;
use crate::types::{parse_number, TokenState, TokenValue};

/// Namespace every reference expression starts with.
const REFERENCE_NAMESPACE: &str = "tokens.";

// =============================================================================
// References
// =============================================================================

/// Which base-table category a reference points into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceCategory {
    /// `tokens.duration(...)`
    Duration,
    /// `tokens.motion(...)` or `tokens.easing(...)`
    Motion,
    /// Any other category name. Never resolves.
    Other(String),
}

impl ReferenceCategory {
    fn from_name(name: &str) -> Self {
        match name {
            "duration" => Self::Duration,
            "motion" | "easing" => Self::Motion,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A symbolic reference to a base token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReference {
    pub category: ReferenceCategory,
    pub key: String,
    /// The expression as written, surfaced when resolution fails.
    pub expression: String,
}

impl TokenReference {
    /// Parse `tokens.<category>('<key>')`.
    ///
    /// The category must be a non-empty word (`[A-Za-z0-9_]`), the key a
    /// non-empty run without quotes. Returns `None` for any other shape.
    pub fn parse(expression: &str) -> Option<Self> {
        let rest = expression.strip_prefix(REFERENCE_NAMESPACE)?;
        let open = rest.find("('")?;
        let name = &rest[..open];
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }

        let key = rest[open + 2..].strip_suffix("')")?;
        if key.is_empty() || key.contains('\'') {
            return None;
        }

        Some(Self {
            category: ReferenceCategory::from_name(name),
            key: key.to_string(),
            expression: expression.to_string(),
        })
    }
}

// =============================================================================
// SchemaEntry
// =============================================================================

/// A single schema definition.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaEntry {
    Literal(TokenValue),
    Reference(TokenReference),
}

impl SchemaEntry {
    /// Interpret a raw schema string: a reference if it has the reference
    /// shape, otherwise a literal copied verbatim.
    pub fn parse(raw: &str) -> Self {
        match TokenReference::parse(raw) {
            Some(reference) => Self::Reference(reference),
            None => Self::Literal(TokenValue::Text(raw.to_string())),
        }
    }
}

impl From<TokenValue> for SchemaEntry {
    fn from(value: TokenValue) -> Self {
        Self::Literal(value)
    }
}

// =============================================================================
// ComponentTokenSchema
// =============================================================================

/// Declarative token definitions for one component, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentTokenSchema {
    entries: IndexMap<String, SchemaEntry>,
}

impl ComponentTokenSchema {
    /// Build a schema from parsed entries.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaEntry)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Parse a JSON object of identifier → string or number.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: IndexMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut entries = IndexMap::with_capacity(raw.len());

        for (identifier, value) in raw {
            let entry = match value {
                serde_json::Value::String(s) => SchemaEntry::parse(&s),
                serde_json::Value::Number(n) => match n.as_f64() {
                    Some(n) => SchemaEntry::Literal(TokenValue::Number(n)),
                    None => SchemaEntry::Literal(TokenValue::Text(n.to_string())),
                },
                other => {
                    return Err(ConfigError::InvalidSchemaValue {
                        identifier,
                        found: json_type_name(&other),
                    });
                }
            };
            entries.insert(identifier, entry);
        }

        Ok(Self { entries })
    }

    /// Look up an entry.
    pub fn get(&self, identifier: &str) -> Option<&SchemaEntry> {
        self.entries.get(identifier)
    }

    /// Identifiers in source order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// =============================================================================
// BaseTokenTable
// =============================================================================

/// Shared named values referenced by schemas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseTokenTable {
    #[serde(default)]
    pub duration: IndexMap<String, TokenValue>,
    #[serde(default)]
    pub motion: IndexMap<String, TokenValue>,
}

impl BaseTokenTable {
    /// Parse `{ "duration": {...}, "motion": {...} }`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a reference. `None` for missing keys and unknown categories.
    pub fn lookup(&self, reference: &TokenReference) -> Option<&TokenValue> {
        match &reference.category {
            ReferenceCategory::Duration => self.duration.get(&reference.key),
            ReferenceCategory::Motion => self.motion.get(&reference.key),
            ReferenceCategory::Other(_) => None,
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// A reference that could not be resolved against the base table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub identifier: String,
    pub expression: String,
}

/// Resolve a single entry. The second value is `false` when a reference
/// failed and the raw expression was used instead.
pub fn resolve_entry(
    identifier: &str,
    entry: &SchemaEntry,
    base: &BaseTokenTable,
) -> (TokenValue, bool) {
    match entry {
        SchemaEntry::Literal(TokenValue::Text(s)) if is_spring(identifier) => match parse_number(s) {
            Some(n) => (TokenValue::Number(n), true),
            None => (TokenValue::Text(s.clone()), true),
        },
        SchemaEntry::Literal(value) => (value.clone(), true),
        SchemaEntry::Reference(reference) => match base.lookup(reference) {
            Some(value) => (value.clone(), true),
            None => (TokenValue::Text(reference.expression.clone()), false),
        },
    }
}

/// Resolve the schema and report every reference that fell back to its raw
/// expression.
pub fn resolve_with_report(
    schema: &ComponentTokenSchema,
    base: &BaseTokenTable,
) -> (TokenState, Vec<UnresolvedReference>) {
    let mut unresolved = Vec::new();

    let state = TokenState::from_pairs(schema.iter().map(|(identifier, entry)| {
        let (value, resolved) = resolve_entry(identifier, entry, base);
        if !resolved {
            unresolved.push(UnresolvedReference {
                identifier: identifier.to_string(),
                expression: value.to_string(),
            });
        }
        (identifier, value)
    }));

    (state, unresolved)
}

/// Resolve the schema into a concrete initial state. Never fails: unresolved
/// references keep their expression as the value and are logged.
pub fn resolve(schema: &ComponentTokenSchema, base: &BaseTokenTable) -> TokenState {
    let (state, unresolved) = resolve_with_report(schema, base);
    for miss in &unresolved {
        warn!(
            "Unresolved token reference for {}: {}",
            miss.identifier, miss.expression
        );
    }
    state
}

// =============================================================================
// Tests
// =============================================================================
