//! Tests for forward-direction layout passes.

use super::*;

#[test]
/// # Panics
/// Panics if zero-margin elements are not packed edge to edge on one line.
fn two_elements_zero_margin_single_line() {
    let elements = vec![square_zero_margins(100), square_zero_margins(100)];
    let out = arranged(&elements, &FlowConfig::default(), Rect::new(0, 0, 300, 300));
    assert_eq!(
        all_bounds(&out),
        vec![Rect::new(0, 0, 100, 100), Rect::new(100, 0, 100, 100)]
    );
}

#[test]
/// # Panics
/// Panics if the default margin is not applied on both sides of each element.
fn two_elements_default_margin_single_line() {
    let out = arranged(&two_hundreds(), &FlowConfig::default(), Rect::new(0, 0, 300, 300));
    assert_eq!(
        all_bounds(&out),
        vec![Rect::new(3, 3, 100, 100), Rect::new(109, 3, 100, 100)]
    );
    assert_eq!(out.lines.len(), 1);
    assert_eq!(out.content_extent, Size::new(212, 106));
}

#[test]
/// # Panics
/// Panics if padding does not offset the content box or wrapped lines do not stack.
fn padding_offsets_content_and_lines_stack() {
    let elements = vec![Element::new(50, 50), Element::new(50, 50)];
    let config = FlowConfig::default().with_padding(Edges::uniform(20));
    let out = arranged(&elements, &config, Rect::new(0, 0, 100, 200));
    // content width 60 → 56 + 56 overflows → second line at 20 + 56 + 3
    assert_eq!(
        all_bounds(&out),
        vec![Rect::new(23, 23, 50, 50), Rect::new(23, 79, 50, 50)]
    );
    let origins: Vec<i32> = out.lines.iter().map(|band| band.cross_origin).collect();
    assert_eq!(origins, vec![0, 56]);
}

#[test]
/// # Panics
/// Panics if disabling wrap does not keep overflowing elements on one line.
fn wrap_disabled_overflows_single_line() {
    let elements = vec![Element::new(50, 50), Element::new(50, 50).with_flow_break(true)];
    let config = FlowConfig::default()
        .with_padding(Edges::uniform(20))
        .with_wrap_contents(false);
    let out = arranged(&elements, &config, Rect::new(0, 0, 100, 200));
    assert_eq!(
        all_bounds(&out),
        vec![Rect::new(23, 23, 50, 50), Rect::new(79, 23, 50, 50)]
    );
}

#[test]
/// # Panics
/// Panics if a zero-width content box wraps even though zero is the unconstrained sentinel.
fn zero_width_container_is_unconstrained() {
    let out = arranged(&two_hundreds(), &FlowConfig::default(), Rect::new(0, 0, 0, 0));
    assert_eq!(out.lines.len(), 1);
    assert_eq!(out.bounds_of(1), Some(Rect::new(109, 3, 100, 100)));
}

#[test]
/// # Panics
/// Panics if padding that consumes the whole width turns into the unconstrained sentinel.
fn padding_consuming_width_still_wraps() {
    let config = FlowConfig::default().with_padding(Edges::uniform(60));
    let out = arranged(&two_hundreds(), &config, Rect::new(0, 0, 100, 400));
    assert_eq!(out.lines.len(), 2);
}

#[test]
/// # Panics
/// Panics if a flow break does not start a new line while space remains.
fn flow_break_starts_new_line() {
    let elements = vec![
        Element::new(20, 10),
        Element::new(20, 30).with_flow_break(true),
        Element::new(20, 10),
    ];
    let out = arranged(&elements, &FlowConfig::default(), Rect::new(0, 0, 500, 500));
    assert_eq!(
        all_bounds(&out),
        vec![
            Rect::new(3, 3, 20, 10),
            Rect::new(3, 19, 20, 30),
            Rect::new(29, 19, 20, 10),
        ]
    );
}

#[test]
/// # Panics
/// Panics if a cross-stretch element does not span its line less its margins.
fn cross_stretch_fills_line_band() {
    let elements = vec![
        Element::new(50, 20).with_cross_role(AxisRole::Stretch),
        Element::new(50, 60),
        Element::new(50, 5).with_flow_break(true).with_cross_role(AxisRole::Stretch),
    ];
    let out = arranged(&elements, &FlowConfig::default(), Rect::new(0, 0, 500, 500));
    assert_eq!(out.bounds_of(0), Some(Rect::new(3, 3, 50, 60)));
    // second band holds only the stretch element itself → its own intrinsic extent
    assert_eq!(out.bounds_of(2), Some(Rect::new(3, 69, 50, 5)));
}

#[test]
/// # Panics
/// Panics if a main-fill element does not absorb the leftover width of its line.
fn main_fill_absorbs_leftover_width() {
    let elements = vec![
        Element::new(50, 20),
        Element::new(20, 20).with_main_role(AxisRole::Stretch),
    ];
    let out = arranged(&elements, &FlowConfig::default(), Rect::new(0, 0, 300, 100));
    assert_eq!(out.bounds_of(1), Some(Rect::new(59, 3, 244, 20)));
}

#[test]
/// # Panics
/// Panics if hidden elements receive bounds or shift their visible neighbours.
fn hidden_elements_are_skipped() {
    let elements = vec![
        Element::new(40, 40),
        Element::new(40, 40).with_visible(false),
        Element::new(40, 40),
    ];
    let out = arranged(&elements, &FlowConfig::default(), Rect::new(0, 0, 300, 100));
    assert_eq!(out.placements.len(), 2);
    assert_eq!(out.bounds_of(1), None);
    assert_eq!(out.bounds_of(2), Some(Rect::new(49, 3, 40, 40)));
}

#[test]
/// # Panics
/// Panics if an empty sequence produces lines or a non-zero extent.
fn empty_sequence_is_empty_arrangement() {
    let out = arranged(&[], &FlowConfig::default(), Rect::new(0, 0, 300, 100));
    assert_eq!(out, Arrangement::default());
}

#[test]
/// # Panics
/// Panics if a negative margin is not rejected before layout.
fn negative_margin_fails_fast() {
    let elements = vec![Element::new(10, 10).with_margin(Edges::new(-1, 0, 0, 0))];
    let result = arrange(
        &elements,
        &FlowConfig::default(),
        Rect::new(0, 0, 300, 100),
        &PreferredSizeResolver,
    );
    assert_eq!(result, Err(FlowError::NegativeMargin { index: 0 }));
}

#[test]
/// # Panics
/// Panics if a top-down flow does not wrap into columns by container height.
fn top_down_wraps_into_columns() {
    let config = FlowConfig::default().with_direction(FlowDirection::TopDown);
    let out = arranged(&two_hundreds(), &config, Rect::new(0, 0, 300, 150));
    assert_eq!(
        all_bounds(&out),
        vec![Rect::new(3, 3, 100, 100), Rect::new(109, 3, 100, 100)]
    );
    assert_eq!(out.content_extent, Size::new(212, 106));
}

#[test]
/// # Panics
/// Panics if a pass over near-limit extents overflows instead of saturating.
fn huge_extents_saturate_in_layout() {
    let elements = [
        Element::new(i32::MAX / 2, 10),
        Element::new(i32::MAX / 2, 10),
    ];
    let out = arranged(&elements, &FlowConfig::default(), Rect::new(0, 0, 0, 0));
    assert_eq!(out.lines.len(), 1);
    assert_eq!(out.content_extent, Size::new(i32::MAX, 16));
    assert_eq!(out.bounds_of(1).map(|bounds| bounds.x), Some(i32::MAX / 2 + 9));
}
