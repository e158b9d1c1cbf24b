//! Scenario tests for full layout passes and measurement.

use super::*;

mod arrange_tests;

/// Helper to create a square element with zero margins.
#[inline]
pub fn square_zero_margins(side: i32) -> Element {
    Element::new(side, side).with_margin(Edges::ZERO)
}

/// Helper to create two 100×100 elements with the default margin.
#[inline]
pub fn two_hundreds() -> Vec<Element> {
    vec![Element::new(100, 100), Element::new(100, 100)]
}

/// Bounds of every placement, in placement order.
#[inline]
pub fn all_bounds(arrangement: &Arrangement) -> Vec<Rect> {
    arrangement
        .placements
        .iter()
        .map(|placement| placement.bounds)
        .collect()
}

/// Run a layout pass with the preferred-size resolver.
///
/// # Panics
/// Panics if the inputs fail boundary validation.
#[inline]
pub fn arranged(elements: &[Element], config: &FlowConfig, bounds: Rect) -> Arrangement {
    arrange(elements, config, bounds, &PreferredSizeResolver).expect("valid layout inputs")
}
