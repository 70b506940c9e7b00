//! Propagator - pushes a Token State snapshot to both consumers.

use log::trace;

use super::cache::CacheDispatcher;
use super::style::{style_var_name_with_prefix, StyleSurface, STYLE_VAR_PREFIX};
use crate::types::TokenState;

/// What one propagation pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Style variables written (unchanged values included).
    pub styled: usize,
    /// Cache updates requested.
    pub dispatched: usize,
}

/// Writes every (identifier, value) pair to the style surface and, when a
/// cache is attached, requests a cache update for the same pair.
///
/// Both collaborators are injected at construction.
pub struct Propagator {
    surface: Box<dyn StyleSurface>,
    cache: Option<CacheDispatcher>,
    prefix: String,
}

impl Propagator {
    /// Propagate to a style surface only.
    pub fn new(surface: impl StyleSurface + 'static) -> Self {
        Self {
            surface: Box::new(surface),
            cache: None,
            prefix: STYLE_VAR_PREFIX.to_string(),
        }
    }

    /// Also push every pair to a runtime cache.
    pub fn with_cache(mut self, cache: CacheDispatcher) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Use a different style-variable prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    /// Run one full pass over the state.
    ///
    /// For each identifier the style variable is set before the cache update
    /// is requested. Cache updates are not awaited.
    pub fn propagate(&self, state: &TokenState) -> PropagationReport {
        let mut report = PropagationReport::default();

        for (identifier, value) in state.iter() {
            let name = style_var_name_with_prefix(&self.prefix, identifier);
            self.surface.set_property(&name, &value.to_string());
            report.styled += 1;

            if let Some(cache) = &self.cache {
                // Fire-and-forget
                drop(cache.dispatch(identifier, value));
                report.dispatched += 1;
            }
        }

        trace!(
            "Propagated {} tokens ({} cache updates)",
            report.styled, report.dispatched
        );
        report
    }
}

// =============================================================================
// Tests
// =============================================================================
