//! Host integration for the flow layout engine.
//!
//! [`FlowPanel`] owns a sequence of elements, remembers when its layout went stale, and
//! before each pass settles its own size from the auto-size policy, the way its parent
//! places it, and its size limits. The arrangement itself is delegated to `flow_engine`.

mod autosize;
mod panel;

pub use autosize::{
    AutoSizeMode, HostRoles, ReconcileInputs, SizeLimits, measurement_proposal, reconcile_size,
};
pub use panel::{ElementId, FlowPanel, LayoutOutcome};
