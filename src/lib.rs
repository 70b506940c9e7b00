//! # motion-tokens
//!
//! Live editing engine for a component's animation design tokens: durations,
//! easing curves and spring physics coefficients.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! One signal holds the authoritative Token State. Everything else is derived
//! from it or reacts to it:
//!
//! ```text
//! Schema + Base Table → resolve → Signal<TokenState> → grouped view (derived)
//!                                        ↑                   │
//!                                  edit coercion             └→ propagation effect
//!                                                                 ├→ style variables (sync)
//!                                                                 └→ runtime cache (async)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (TokenValue, TokenState, number parsing)
//! - [`schema`] - Component token schema, base table, resolution
//! - [`classify`] - Token kinds and sub-components
//! - [`group`] - Bucketing and presentation order
//! - [`edit`] - Edit coercion and kind defaults
//! - [`pipeline`] - Propagation to the style surface and runtime cache
//! - [`editor`] - Reactive editing session
//! - [`boundary`] - Fault isolation around the rendered sample

pub mod boundary;
pub mod classify;
pub mod config;
pub mod descriptions;
pub mod edit;
pub mod editor;
pub mod error;
pub mod group;
pub mod options;
pub mod pipeline;
pub mod schema;
pub mod types;

// Re-export commonly used items
pub use types::{parse_number, TokenState, TokenValue};

pub use error::{CacheError, ConfigError, RenderFault};

pub use schema::{
    resolve, resolve_with_report, BaseTokenTable, ComponentTokenSchema, ReferenceCategory,
    SchemaEntry, TokenReference, UnresolvedReference,
};

pub use classify::{classify, component_label, component_of, is_spring, KindSet, TokenKind};

pub use group::{group, group_with, ComponentGroup, GroupedView, TokenEntry};

pub use edit::{apply_edit, coerce, NumericRange};

pub use pipeline::{
    style_var_name, CacheDispatcher, MemoryTokenCache, PropagationReport, Propagator,
    RuntimeTokenCache, StyleSheet, StyleSurface,
};

pub use editor::TokenEditor;

pub use boundary::{BoundaryView, FaultBoundary, SampleRenderer};

pub use config::{EditorConfig, TokenSources};

pub use descriptions::DescriptionTable;

pub use options::{duration_options, motion_options, options_for, SelectOption};
