//! Line assignment: partition flow items into lines along the main axis.

use log::{debug, trace};

use crate::element::FlowItem;
use crate::geometry::AvailableExtent;

/// A contiguous run of flow items sharing one cross-axis band: items `[start, end)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Line {
    pub start: usize,
    pub end: usize,
    /// Sum of the members' outer main extents (intrinsic, before fill resolution).
    pub main_extent: i32,
    /// Largest outer cross extent among the members.
    pub cross_extent: i32,
}

impl Line {
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Fold one more item into the running line totals.
    #[inline]
    fn push(&mut self, item: &FlowItem) {
        self.end += 1;
        self.main_extent = self.main_extent.saturating_add(item.outer_main());
        self.cross_extent = self.cross_extent.max(item.outer_cross());
    }
}

/// Break items into lines by accumulating outer main extents.
///
/// Behavior:
/// - With `wrap_contents == false` every item lands on a single line.
/// - Otherwise a non-empty line closes before an item whose outer extent would push the
///   running total past a definite `available` limit, or before an item carrying
///   `flow_break`.
/// - An `Unconstrained` limit never wraps on overflow.
/// - The first item of a line always stays, even if it alone overflows.
///
/// Lines are returned in order and cover `items` exactly once. An empty input yields no lines.
pub fn sequence(items: &[FlowItem], available: AvailableExtent, wrap_contents: bool) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current = Line::default();
    for (idx, item) in items.iter().enumerate() {
        if wrap_contents && !current.is_empty() {
            let next_end = current.main_extent.saturating_add(item.outer_main());
            let overflows = available.is_exceeded_by(next_end);
            if overflows || item.flow_break {
                debug!(
                    target: "flow::sequencer",
                    "[FLOW-WRAP] closing line [{}, {}) main_used={} next_outer={} limit={:?} forced={}",
                    current.start,
                    current.end,
                    current.main_extent,
                    item.outer_main(),
                    available,
                    item.flow_break
                );
                lines.push(current);
                current = Line {
                    start: idx,
                    end: idx,
                    ..Line::default()
                };
            }
        }
        current.push(item);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    trace!(
        target: "flow::sequencer",
        "[FLOW-WRAP] items={} lines={} wrap={} limit={:?}",
        items.len(),
        lines.len(),
        wrap_contents,
        available
    );
    lines
}
