//! Full layout pass: sequence lines, position each line, map to physical coordinates.

use log::debug;

use crate::config::FlowConfig;
use crate::element::{Element, ElementResolver, collect_flow_items};
use crate::error::{FlowError, validate};
use crate::geometry::{AvailableExtent, Rect, Size};
use crate::positioner::{LineContext, PositionMode, line_main_end, position_line};
use crate::sequencer::{Line, sequence};

/// Final bounds for one visible element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Placement {
    /// Position of the element in the caller's sequence.
    pub index: usize,
    /// Bounds in the container's coordinate space.
    pub bounds: Rect,
}

/// A sequenced line together with where its band starts on the cross axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LineBand {
    pub line: Line,
    /// Cross offset of the band from the content box's cross start.
    pub cross_origin: i32,
}

/// Result of one layout pass.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Arrangement {
    /// One entry per visible element, in input order.
    pub placements: Vec<Placement>,
    pub lines: Vec<LineBand>,
    /// Space occupied by the lines: longest line by summed line bands, as a physical size.
    pub content_extent: Size,
}

impl Arrangement {
    /// Bounds of the element at `index`, or `None` when it was hidden or out of range.
    pub fn bounds_of(&self, index: usize) -> Option<Rect> {
        self.placements
            .iter()
            .find(|placement| placement.index == index)
            .map(|placement| placement.bounds)
    }
}

/// Lay out `elements` inside a container occupying `bounds`.
///
/// The content box is `bounds` deflated by the configured padding; its main-axis extent is
/// the available extent for wrapping. A zero main extent on `bounds` is the unconstrained
/// sentinel. Lines
/// stack along the cross axis in sequence order with no spacing between bands.
///
/// # Errors
/// Returns a `FlowError` when the configuration or an element fails boundary validation.
pub fn arrange(
    elements: &[Element],
    config: &FlowConfig,
    bounds: Rect,
    resolver: &dyn ElementResolver,
) -> Result<Arrangement, FlowError> {
    validate(config, elements)?;
    let direction = config.direction;
    let content = bounds.deflate(config.padding);
    // padding that eats the whole container leaves a definite zero, not the sentinel
    let available = AvailableExtent::from_extent(direction.main_of(bounds.size()))
        .shrink_by(direction.main_of(config.padding.total()));
    let items = collect_flow_items(elements, direction, content, resolver);
    let lines = sequence(&items, available, config.wrap_contents);
    debug!(
        target: "flow::arrange",
        "[FLOW-ARRANGE] direction={:?} wrap={} content={:?} available={:?} items={} lines={}",
        direction,
        config.wrap_contents,
        content,
        available,
        items.len(),
        lines.len()
    );

    let mut arrangement = Arrangement {
        placements: Vec::with_capacity(items.len()),
        lines: Vec::with_capacity(lines.len()),
        content_extent: Size::ZERO,
    };
    let mut cross_origin = 0i32;
    let mut longest_main = 0i32;
    for line in &lines {
        let Some(line_items) = items.get(line.start..line.end) else {
            continue;
        };
        let placed = position_line(&LineContext {
            items: line_items,
            line,
            cross_origin,
            available,
            mode: PositionMode::Layout,
        });
        longest_main = longest_main.max(line_main_end(line_items, &placed));
        arrangement
            .placements
            .extend(placed.iter().map(|place| Placement {
                index: place.index,
                bounds: direction.to_physical(place.logical, content),
            }));
        arrangement.lines.push(LineBand {
            line: *line,
            cross_origin,
        });
        cross_origin = cross_origin.saturating_add(line.cross_extent);
    }
    arrangement.content_extent = direction.physical_size(longest_main, cross_origin);
    Ok(arrangement)
}
