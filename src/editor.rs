//! Token editor - the reactive core.
//!
//! Owns the one authoritative Token State inside a signal and wires the rest
//! of the engine around it:
//!
//! ```text
//! schema + base table → resolve → Signal<TokenState> → grouped view (derived)
//!                                        │
//!                                        └→ propagation effect → style surface / runtime cache
//! ```
//!
//! Edits go through [`apply_edit`] and replace the signal value; the derived
//! view and the propagation effect follow automatically.
//!
//! # Example
//!
//! ```ignore
//! use motion_tokens::{TokenEditor, Propagator, StyleSheet};
//!
//! let sheet = StyleSheet::new();
//! let editor = TokenEditor::new(&schema, &base, Propagator::new(sheet.clone()));
//!
//! editor.edit("AXIS_SPRING_DAMPING", "42");
//! assert_eq!(sheet.get("--axis-spring-damping").as_deref(), Some("42"));
//! ```

use std::rc::Rc;

use spark_signals::{derived, effect, flush_sync, signal, Signal};

use crate::classify::{classify, TokenKind};
use crate::edit::apply_edit;
use crate::group::{group, GroupedView};
use crate::pipeline::Propagator;
use crate::schema::{resolve_with_report, BaseTokenTable, ComponentTokenSchema, UnresolvedReference};
use crate::types::{TokenState, TokenValue};

use log::warn;

/// Live editing session over one component's tokens.
pub struct TokenEditor {
    state: Signal<TokenState>,
    view: Rc<dyn Fn() -> GroupedView>,
    unresolved: Vec<UnresolvedReference>,
    stop_propagation: Option<Box<dyn FnOnce()>>,
}

impl TokenEditor {
    /// Resolve the schema, seed the state and start propagating.
    ///
    /// The initial state is propagated once before this returns.
    pub fn new(
        schema: &ComponentTokenSchema,
        base: &BaseTokenTable,
        propagator: Propagator,
    ) -> Self {
        let (initial, unresolved) = resolve_with_report(schema, base);
        for miss in &unresolved {
            warn!(
                "Unresolved token reference for {}: {}",
                miss.identifier, miss.expression
            );
        }

        // Start empty so seeding below is always a change the effect sees
        let state: Signal<TokenState> = signal(TokenState::default());

        let state_for_view = state.clone();
        let view_derived = derived(move || group(&state_for_view.get()));
        let view: Rc<dyn Fn() -> GroupedView> = Rc::new(move || view_derived.get());

        let state_for_effect = state.clone();
        let stop = effect(move || {
            // Read state (creates dependency)
            let snapshot = state_for_effect.get();
            propagator.propagate(&snapshot);
        });

        state.set(initial);
        flush_sync();

        Self {
            state,
            view,
            unresolved,
            stop_propagation: Some(Box::new(stop)),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> TokenState {
        self.state.get()
    }

    /// The underlying signal, for building further deriveds.
    pub fn state_signal(&self) -> Signal<TokenState> {
        self.state.clone()
    }

    /// Grouped, ordered view of the current state.
    pub fn view(&self) -> GroupedView {
        (self.view)()
    }

    /// Current value of one token.
    pub fn value(&self, identifier: &str) -> Option<TokenValue> {
        self.state.get().get(identifier).cloned()
    }

    /// Kind of a token in this session. `None` when unknown or unclassified.
    pub fn kind(&self, identifier: &str) -> Option<TokenKind> {
        if !self.state.get().contains(identifier) {
            return None;
        }
        classify(identifier)
    }

    /// Identifiers in schema order.
    pub fn identifiers(&self) -> Vec<String> {
        self.state.get().identifiers().map(String::from).collect()
    }

    /// References that fell back to their raw expression at initialization.
    pub fn unresolved(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    /// Apply one edit. Propagation has run by the time this returns.
    pub fn edit(&self, identifier: &str, raw: &str) {
        let next = apply_edit(&self.state.get(), identifier, raw);
        self.state.set(next);
        flush_sync();
    }

    /// Stop propagating. The state stays readable and editable.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop_propagation.take() {
            stop();
        }
    }

    pub fn is_propagating(&self) -> bool {
        self.stop_propagation.is_some()
    }
}

impl Drop for TokenEditor {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Tests
// =============================================================================
