//! Axis resolution and coordinate mirroring.
//!
//! The sequencer and positioner work in logical `(main, cross)` coordinates measured from
//! the flow start of the content rectangle. This module owns every mapping between that
//! logical space and physical `(x, y)` space.

use crate::geometry::{Edges, Rect, Size};

/// Direction in which elements flow along the main axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlowDirection {
    /// Main axis is horizontal, advancing left to right.
    #[default]
    LeftToRight,
    /// Main axis is vertical, advancing top to bottom.
    TopDown,
    /// Main axis is horizontal, advancing right to left.
    RightToLeft,
    /// Main axis is vertical, advancing bottom to top.
    BottomUp,
}

/// Direction used when the caller does not choose one.
pub const DEFAULT_FLOW_DIRECTION: FlowDirection = FlowDirection::LeftToRight;

/// Resolved axes information for a flow container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis maps to physical x.
    pub main_is_horizontal: bool,
    /// True when the main axis runs against physical coordinates (right-to-left or bottom-up).
    pub main_reverse: bool,
}

/// Resolve main/cross axes for a flow direction.
pub const fn resolve_axes(direction: FlowDirection) -> Axes {
    match direction {
        FlowDirection::LeftToRight => Axes {
            main_is_horizontal: true,
            main_reverse: false,
        },
        FlowDirection::RightToLeft => Axes {
            main_is_horizontal: true,
            main_reverse: true,
        },
        FlowDirection::TopDown => Axes {
            main_is_horizontal: false,
            main_reverse: false,
        },
        FlowDirection::BottomUp => Axes {
            main_is_horizontal: false,
            main_reverse: true,
        },
    }
}

/// A rectangle in logical flow space, relative to the flow start of the content box.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LogicalRect {
    pub main_offset: i32,
    pub cross_offset: i32,
    pub main_extent: i32,
    pub cross_extent: i32,
}

/// Leading and trailing thickness along one axis, in flow order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct AxisEdges {
    pub leading: i32,
    pub trailing: i32,
}

impl AxisEdges {
    #[inline]
    pub const fn sum(self) -> i32 {
        self.leading.saturating_add(self.trailing)
    }
}

impl FlowDirection {
    #[inline]
    pub const fn axes(self) -> Axes {
        resolve_axes(self)
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        self.axes().main_is_horizontal
    }

    /// Component of `size` along the main axis.
    #[inline]
    pub const fn main_of(self, size: Size) -> i32 {
        if self.is_horizontal() {
            size.width
        } else {
            size.height
        }
    }

    /// Component of `size` along the cross axis.
    #[inline]
    pub const fn cross_of(self, size: Size) -> i32 {
        if self.is_horizontal() {
            size.height
        } else {
            size.width
        }
    }

    /// Build a physical size from logical main/cross extents.
    #[inline]
    pub const fn physical_size(self, main: i32, cross: i32) -> Size {
        if self.is_horizontal() {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    }

    /// Main-axis edges in flow order. Reverse directions lead with the right or bottom side.
    #[inline]
    pub const fn main_edges(self, edges: Edges) -> AxisEdges {
        let axes = self.axes();
        let (start, end) = if axes.main_is_horizontal {
            (edges.left, edges.right)
        } else {
            (edges.top, edges.bottom)
        };
        if axes.main_reverse {
            AxisEdges {
                leading: end,
                trailing: start,
            }
        } else {
            AxisEdges {
                leading: start,
                trailing: end,
            }
        }
    }

    /// Cross-axis edges. The cross axis never reverses: lines stack top-down or left-to-right.
    #[inline]
    pub const fn cross_edges(self, edges: Edges) -> AxisEdges {
        if self.is_horizontal() {
            AxisEdges {
                leading: edges.top,
                trailing: edges.bottom,
            }
        } else {
            AxisEdges {
                leading: edges.left,
                trailing: edges.right,
            }
        }
    }

    /// Map a logical rectangle onto physical coordinates inside `content`.
    ///
    /// Reverse directions mirror the main offset about the trailing edge of the content box:
    /// `x = content.right - main_offset - main_extent` for right-to-left, and the same with
    /// `bottom`/`y` for bottom-up.
    pub const fn to_physical(self, logical: LogicalRect, content: Rect) -> Rect {
        let axes = self.axes();
        let (main_start, main_end, cross_start) = if axes.main_is_horizontal {
            (content.x, content.right(), content.y)
        } else {
            (content.y, content.bottom(), content.x)
        };
        let main = if axes.main_reverse {
            main_end
                .saturating_sub(logical.main_offset)
                .saturating_sub(logical.main_extent)
        } else {
            main_start.saturating_add(logical.main_offset)
        };
        let cross = cross_start.saturating_add(logical.cross_offset);
        if axes.main_is_horizontal {
            Rect::new(main, cross, logical.main_extent, logical.cross_extent)
        } else {
            Rect::new(cross, main, logical.cross_extent, logical.main_extent)
        }
    }
}
