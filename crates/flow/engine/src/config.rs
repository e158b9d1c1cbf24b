//! Container configuration.

use crate::direction::{DEFAULT_FLOW_DIRECTION, FlowDirection};
use crate::geometry::Edges;

/// Whether lines wrap when the caller does not say otherwise.
pub const DEFAULT_WRAP_CONTENTS: bool = true;

/// Per-container flow settings, supplied fresh for every pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlowConfig {
    pub direction: FlowDirection,
    /// When false everything stays on one line and `flow_break` markers are ignored.
    pub wrap_contents: bool,
    /// Space between the container edge and its content box.
    pub padding: Edges,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            direction: DEFAULT_FLOW_DIRECTION,
            wrap_contents: DEFAULT_WRAP_CONTENTS,
            padding: Edges::ZERO,
        }
    }
}

impl FlowConfig {
    #[must_use]
    pub const fn with_direction(mut self, direction: FlowDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn with_wrap_contents(mut self, wrap_contents: bool) -> Self {
        self.wrap_contents = wrap_contents;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }
}
