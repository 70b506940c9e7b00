//! Fault boundary around the rendered sample component.
//!
//! Wraps a [`SampleRenderer`] and catches whatever it raises, errors and
//! panics alike. While faulted, the child is not rendered; a visible message
//! is returned instead until [`FaultBoundary::reset`] is called. The boundary
//! only reads Token State, so a faulted sample never affects editing or
//! propagation.

use std::panic::{self, AssertUnwindSafe};

use log::error;

use crate::error::RenderFault;
use crate::types::TokenState;

/// The visual consumer of Token State.
pub trait SampleRenderer {
    type Output;

    fn render(&mut self, tokens: &TokenState) -> Result<Self::Output, RenderFault>;
}

/// Result of rendering through the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryView<T> {
    Rendered(T),
    /// Recoverable message shown in place of the sample.
    Faulted { message: String },
}

impl<T> BoundaryView<T> {
    pub fn is_faulted(&self) -> bool {
        matches!(self, Self::Faulted { .. })
    }
}

/// Supervisor wrapper around a renderer.
pub struct FaultBoundary<R> {
    inner: R,
    fault: Option<RenderFault>,
}

impl<R: SampleRenderer> FaultBoundary<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, fault: None }
    }

    /// Render the child, or the fault message if faulted.
    pub fn render(&mut self, tokens: &TokenState) -> BoundaryView<R::Output> {
        if let Some(fault) = &self.fault {
            return BoundaryView::Faulted {
                message: fault.message.clone(),
            };
        }

        let inner = &mut self.inner;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| inner.render(tokens)));

        let fault = match outcome {
            Ok(Ok(output)) => return BoundaryView::Rendered(output),
            Ok(Err(fault)) => fault,
            Err(payload) => RenderFault::new(panic_message(payload.as_ref())),
        };

        error!("Caught render fault: {}", fault);
        let message = fault.message.clone();
        self.fault = Some(fault);
        BoundaryView::Faulted { message }
    }

    /// Clear the fault so the next render tries the child again.
    pub fn reset(&mut self) {
        self.fault = None;
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    pub fn fault(&self) -> Option<&RenderFault> {
        self.fault.as_ref()
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown error".to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
