//! Flow elements, per-element roles, and the sizing collaborator seam.

use crate::direction::{AxisEdges, FlowDirection};
use crate::geometry::{DEFAULT_ELEMENT_MARGIN, Edges, Rect, Size};

/// How an element uses one axis of the space it is given.
///
/// The same vocabulary governs elements inside a flow (cross axis: `Fixed` = start-aligned,
/// `Stretch` = fill the line; main axis: `Fixed` = intrinsic, `Stretch` = absorb leftover
/// space) and a flow container inside its own parent.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AxisRole {
    /// Keep the resolved size on this axis.
    #[default]
    Fixed,
    /// Take the full extent offered on this axis.
    Stretch,
}

impl AxisRole {
    #[inline]
    pub const fn is_stretch(self) -> bool {
        matches!(self, Self::Stretch)
    }
}

/// A positionable unit owned by a flow container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    /// Intrinsic size handed to the resolver.
    pub preferred_size: Size,
    /// Outer spacing; adjacent margins add up, they never collapse.
    pub margin: Edges,
    /// Cross-axis role: `Stretch` fills the line's cross extent.
    pub cross_role: AxisRole,
    /// Main-axis role: `Stretch` absorbs leftover main-axis space in its line.
    pub main_role: AxisRole,
    /// Start a new line before this element when wrapping is enabled.
    pub flow_break: bool,
    /// Hidden elements take no part in sequencing, positioning or measurement.
    pub visible: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            preferred_size: Size::ZERO,
            margin: Edges::uniform(DEFAULT_ELEMENT_MARGIN),
            cross_role: AxisRole::Fixed,
            main_role: AxisRole::Fixed,
            flow_break: false,
            visible: true,
        }
    }
}

impl Element {
    /// Visible element of the given preferred size with the default margin.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            preferred_size: Size::new(width, height),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub const fn with_cross_role(mut self, role: AxisRole) -> Self {
        self.cross_role = role;
        self
    }

    #[must_use]
    pub const fn with_main_role(mut self, role: AxisRole) -> Self {
        self.main_role = role;
        self
    }

    #[must_use]
    pub const fn with_flow_break(mut self, flow_break: bool) -> Self {
        self.flow_break = flow_break;
        self
    }

    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// External sizing collaborator.
///
/// Called once per visible element per pass, before sequencing. `available` is the content
/// rectangle the element is being laid out into (or the proposed constraint during
/// measurement).
pub trait ElementResolver {
    fn resolve(&self, element: &Element, available: Rect) -> Size;
}

/// Resolver that returns each element's preferred size unchanged.
#[derive(Copy, Clone, Debug, Default)]
pub struct PreferredSizeResolver;

impl ElementResolver for PreferredSizeResolver {
    #[inline]
    fn resolve(&self, element: &Element, _available: Rect) -> Size {
        element.preferred_size
    }
}

/// A visible element projected into logical flow space for one pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlowItem {
    /// Position of the source element in the caller's sequence.
    pub index: usize,
    /// Resolved main-axis extent (before fill resolution).
    pub main_extent: i32,
    /// Resolved cross-axis extent (before stretch resolution).
    pub cross_extent: i32,
    pub main_margin: AxisEdges,
    pub cross_margin: AxisEdges,
    pub cross_role: AxisRole,
    pub main_role: AxisRole,
    pub flow_break: bool,
}

impl FlowItem {
    /// Main extent plus both main-axis margins.
    #[inline]
    pub const fn outer_main(&self) -> i32 {
        self.main_extent.saturating_add(self.main_margin.sum())
    }

    /// Cross extent plus both cross-axis margins.
    #[inline]
    pub const fn outer_cross(&self) -> i32 {
        self.cross_extent.saturating_add(self.cross_margin.sum())
    }

    #[inline]
    pub const fn fills_main(&self) -> bool {
        self.main_role.is_stretch()
    }
}

/// Collect visible elements as flow items, resolving each one's size exactly once.
///
/// Behavior:
/// - Skips elements with `visible == false`; their indices do not appear in the output.
/// - Resolver output is clamped to be non-negative.
/// - Preserves input order.
pub fn collect_flow_items(
    elements: &[Element],
    direction: FlowDirection,
    available: Rect,
    resolver: &dyn ElementResolver,
) -> Vec<FlowItem> {
    let mut out = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        if !element.visible {
            continue;
        }
        let size = resolver.resolve(element, available).clamp_non_negative();
        out.push(FlowItem {
            index,
            main_extent: direction.main_of(size),
            cross_extent: direction.cross_of(size),
            main_margin: direction.main_edges(element.margin),
            cross_margin: direction.cross_edges(element.margin),
            cross_role: element.cross_role,
            main_role: element.main_role,
            flow_break: element.flow_break,
        });
    }
    out
}
