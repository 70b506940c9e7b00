//! Propagation Pipeline
//!
//! Pushes every Token State change to the two downstream consumers.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Signal<TokenState> → propagation effect → StyleSurface (sync, authoritative)
//!                                        └→ RuntimeTokenCache (async, fire-and-forget)
//! ```
//!
//! ## Guarantees
//!
//! - **Style first**: for each identifier the style variable is written before
//!   the cache update is even requested
//! - **Isolation**: each cache update runs as its own task; a failure is logged
//!   and never affects other identifiers or the style surface
//! - **Full re-run**: every pass pushes every pair, unchanged pairs included

pub mod cache;
pub mod propagate;
pub mod style;

// Re-exports
pub use cache::{CacheDispatcher, MemoryTokenCache, RuntimeTokenCache};
pub use propagate::{PropagationReport, Propagator};
pub use style::{style_var_name, style_var_name_with_prefix, StyleSheet, StyleSurface, STYLE_VAR_PREFIX};
