//! Sequential flow layout.
//!
//! Arranges a sequence of rectangular elements along a main axis, wrapping into lines when
//! space runs out or an element asks for a break, and answers "preferred size" queries for
//! auto-sizing hosts. Every entry point is a pure function of its inputs; nothing is cached
//! between passes. Extent sums saturate at `i32::MAX` instead of overflowing.
//!
//! ```text
//! elements + FlowConfig
//!   ↓ collect_flow_items   (resolver called once per visible element)
//!   ↓ sequence             (line assignment)
//!   ↓ position_line        (per-line logical rectangles)
//!   ↓ FlowDirection::to_physical
//! Arrangement / preferred Size
//! ```

mod arrange;
mod config;
mod direction;
mod element;
mod error;
mod geometry;
mod measure;
mod positioner;
mod sequencer;

#[cfg(test)]
mod tests;

pub use arrange::{Arrangement, LineBand, Placement, arrange};
pub use config::{DEFAULT_WRAP_CONTENTS, FlowConfig};
pub use direction::{
    Axes, AxisEdges, DEFAULT_FLOW_DIRECTION, FlowDirection, LogicalRect, resolve_axes,
};
pub use element::{
    AxisRole, Element, ElementResolver, FlowItem, PreferredSizeResolver, collect_flow_items,
};
pub use error::{FlowError, check_size, validate};
pub use geometry::{
    AvailableExtent, DEFAULT_ELEMENT_MARGIN, Edges, Rect, Size, UNCONSTRAINED_EXTENT,
};
pub use measure::{measure, preferred_size};
pub use positioner::{LineContext, PositionMode, PositionedItem, line_main_end, position_line};
pub use sequencer::{Line, sequence};
