//! Per-line placement: turn one sequenced line into logical rectangles.

use log::debug;

use crate::direction::LogicalRect;
use crate::element::FlowItem;
use crate::geometry::AvailableExtent;
use crate::sequencer::Line;

/// Whether a positioning run produces final geometry or only extents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PositionMode {
    /// Resolve fill and stretch roles and produce final logical rectangles.
    Layout,
    /// Keep intrinsic extents; coordinates are only used to derive the line's extent.
    Measure,
}

/// A flow item's logical placement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PositionedItem {
    /// Position of the source element in the caller's sequence.
    pub index: usize,
    pub logical: LogicalRect,
}

/// Inputs for positioning one line.
#[derive(Copy, Clone, Debug)]
pub struct LineContext<'items> {
    /// Members of the line, in flow order.
    pub items: &'items [FlowItem],
    pub line: &'items Line,
    /// Cross offset of the line band from the content box's cross start.
    pub cross_origin: i32,
    /// Main-axis space of the content box.
    pub available: AvailableExtent,
    pub mode: PositionMode,
}

/// Main extents after fill resolution.
///
/// Fill items share one leftover figure, `max(0, limit - sum of non-fill outer extents)`.
/// The last fill item in the line receives it; earlier fill items collapse to zero. With an
/// unconstrained limit (or in measurement mode) every item keeps its intrinsic extent.
fn resolve_main_extents(
    items: &[FlowItem],
    available: AvailableExtent,
    mode: PositionMode,
) -> Vec<i32> {
    let intrinsic = || -> Vec<i32> { items.iter().map(|item| item.main_extent).collect() };
    let (PositionMode::Layout, Some(limit)) = (mode, available.definite()) else {
        return intrinsic();
    };
    let Some(last_fill) = items.iter().rposition(FlowItem::fills_main) else {
        return intrinsic();
    };
    let others: i32 = items
        .iter()
        .filter(|item| !item.fills_main())
        .map(FlowItem::outer_main)
        .fold(0i32, i32::saturating_add);
    let leftover = limit.saturating_sub(others).max(0);
    debug!(
        target: "flow::positioner",
        "[FLOW-FILL] limit={limit} others={others} leftover={leftover} receiver={last_fill}"
    );
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| match (item.fills_main(), idx == last_fill) {
            (false, _) => item.main_extent,
            (true, true) => leftover,
            (true, false) => 0,
        })
        .collect()
}

/// Cross extent of an item inside a line band of `line_cross` outer extent.
#[inline]
fn resolve_cross_extent(item: &FlowItem, line_cross: i32, mode: PositionMode) -> i32 {
    if mode == PositionMode::Layout && item.cross_role.is_stretch() {
        line_cross.saturating_sub(item.cross_margin.sum()).max(0)
    } else {
        item.cross_extent
    }
}

/// Place every item of a line.
///
/// Behavior:
/// - Main axis: the cursor starts at 0; each item advances it by its leading margin, its
///   extent, then its trailing margin. Margins between neighbours add up.
/// - Cross axis: each item starts at `cross_origin + leading cross margin`; stretch items
///   take the line's cross extent less their own cross margins, floored at zero.
/// - Output order matches the line's item order.
pub fn position_line(ctx: &LineContext<'_>) -> Vec<PositionedItem> {
    debug_assert_eq!(ctx.items.len(), ctx.line.len(), "line and item slice disagree");
    let main_extents = resolve_main_extents(ctx.items, ctx.available, ctx.mode);
    let mut cursor = 0i32;
    ctx.items
        .iter()
        .zip(main_extents)
        .map(|(item, main_extent)| {
            cursor = cursor.saturating_add(item.main_margin.leading);
            let logical = LogicalRect {
                main_offset: cursor,
                cross_offset: ctx.cross_origin.saturating_add(item.cross_margin.leading),
                main_extent,
                cross_extent: resolve_cross_extent(item, ctx.line.cross_extent, ctx.mode),
            };
            cursor = cursor
                .saturating_add(main_extent)
                .saturating_add(item.main_margin.trailing);
            PositionedItem {
                index: item.index,
                logical,
            }
        })
        .collect()
}

/// Outer main extent of a positioned line: from flow start to the last item's trailing margin.
pub fn line_main_end(items: &[FlowItem], placed: &[PositionedItem]) -> i32 {
    items
        .last()
        .zip(placed.last())
        .map_or(0, |(item, place)| {
            place
                .logical
                .main_offset
                .saturating_add(place.logical.main_extent)
                .saturating_add(item.main_margin.trailing)
        })
}
