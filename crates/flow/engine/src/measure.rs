//! Preferred-size calculation: the sequencer and positioner run in measurement mode and
//! only the resulting extents are kept.

use log::debug;

use crate::config::FlowConfig;
use crate::element::{Element, ElementResolver, collect_flow_items};
use crate::error::{FlowError, check_size, validate};
use crate::geometry::{AvailableExtent, Rect, Size};
use crate::positioner::{LineContext, PositionMode, line_main_end, position_line};
use crate::sequencer::sequence;

/// Size the container would like to be, given a proposed constraint.
///
/// Behavior:
/// - Without wrapping the proposal is ignored and all visible elements form one line.
/// - With wrapping the proposal's main-axis component is the wrap limit; `0` on that
///   component is the unconstrained sentinel. A definite limit is reduced by the main-axis
///   padding, never below a definite zero. The cross-axis component never affects wrapping.
/// - The result is (longest line, summed line cross extents) mapped onto width/height, plus
///   padding on both axes.
///
/// # Errors
/// Returns a `FlowError` when validation fails or `proposed` has a negative component.
pub fn measure(
    elements: &[Element],
    config: &FlowConfig,
    proposed: Size,
    resolver: &dyn ElementResolver,
) -> Result<Size, FlowError> {
    validate(config, elements)?;
    check_size("proposed constraint", proposed)?;
    let direction = config.direction;
    let padding = config.padding.total();
    let available = if config.wrap_contents {
        AvailableExtent::from_extent(direction.main_of(proposed))
            .shrink_by(direction.main_of(padding))
    } else {
        AvailableExtent::Unconstrained
    };
    let hint = Rect::from_size(proposed).deflate(config.padding);
    let items = collect_flow_items(elements, direction, hint, resolver);
    let lines = sequence(&items, available, config.wrap_contents);

    let mut longest_main = 0i32;
    let mut cross_total = 0i32;
    for line in &lines {
        let Some(line_items) = items.get(line.start..line.end) else {
            continue;
        };
        let placed = position_line(&LineContext {
            items: line_items,
            line,
            cross_origin: cross_total,
            available,
            mode: PositionMode::Measure,
        });
        longest_main = longest_main.max(line_main_end(line_items, &placed));
        cross_total = cross_total.saturating_add(line.cross_extent);
    }
    let content = direction.physical_size(longest_main, cross_total);
    let preferred = Size::new(
        content.width.saturating_add(padding.width),
        content.height.saturating_add(padding.height),
    );
    debug!(
        target: "flow::measure",
        "[FLOW-MEASURE] proposed={proposed:?} available={available:?} lines={} preferred={preferred:?}",
        lines.len()
    );
    Ok(preferred)
}

/// Preferred size with no constraint; identical to `measure` with an all-zero proposal.
///
/// # Errors
/// Returns a `FlowError` when validation fails.
pub fn preferred_size(
    elements: &[Element],
    config: &FlowConfig,
    resolver: &dyn ElementResolver,
) -> Result<Size, FlowError> {
    measure(elements, config, Size::ZERO, resolver)
}
