//! Basic geometry types used by the flow engine.
//!
//! All coordinates are whole layout units. Sizes and edges are validated to be
//! non-negative at the engine boundary; arithmetic inside a pass clamps at zero.

/// Margin applied on every side of an element unless the caller overrides it.
pub const DEFAULT_ELEMENT_MARGIN: i32 = 3;

/// Raw extent value that callers pass to mean "this axis is unconstrained".
pub const UNCONSTRAINED_EXTENT: i32 = 0;

/// A width/height pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// The empty size, also the fully-unconstrained measurement proposal.
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Clamp both components to be non-negative.
    #[inline]
    #[must_use]
    pub fn clamp_non_negative(self) -> Self {
        Self::new(self.width.max(0), self.height.max(0))
    }
}

/// A simple rectangle for layout geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Shrink the rectangle by `edges` on each side. The resulting size never goes negative.
    #[inline]
    #[must_use]
    pub fn deflate(self, edges: Edges) -> Self {
        Self::new(
            self.x.saturating_add(edges.left),
            self.y.saturating_add(edges.top),
            self.width.saturating_sub(edges.horizontal()).max(0),
            self.height.saturating_sub(edges.vertical()).max(0),
        )
    }
}

/// Four-sided thickness used for both element margins and container padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edges {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Edges {
    pub const ZERO: Self = Self::uniform(0);

    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same thickness on every side.
    #[inline]
    pub const fn uniform(all: i32) -> Self {
        Self::new(all, all, all, all)
    }

    /// Sum of the left and right sides.
    #[inline]
    pub const fn horizontal(self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of the top and bottom sides.
    #[inline]
    pub const fn vertical(self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Total thickness as a size (`horizontal`, `vertical`).
    #[inline]
    pub const fn total(self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }

    /// True when no side is negative.
    #[inline]
    pub const fn is_non_negative(self) -> bool {
        self.left >= 0 && self.top >= 0 && self.right >= 0 && self.bottom >= 0
    }
}

/// Space available along the main axis for one pass.
///
/// Raw inputs use `UNCONSTRAINED_EXTENT` as a sentinel; once lifted into this type a
/// definite zero stays distinct from "no limit".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AvailableExtent {
    /// No limit: lines never wrap on overflow.
    Unconstrained,
    /// A concrete limit in layout units.
    Definite(i32),
}

impl AvailableExtent {
    /// Lift a raw caller-supplied extent, treating the sentinel (and anything below it) as
    /// unconstrained.
    #[inline]
    pub const fn from_extent(extent: i32) -> Self {
        if extent <= UNCONSTRAINED_EXTENT {
            Self::Unconstrained
        } else {
            Self::Definite(extent)
        }
    }

    /// The concrete limit, if any.
    #[inline]
    pub const fn definite(self) -> Option<i32> {
        match self {
            Self::Unconstrained => None,
            Self::Definite(limit) => Some(limit),
        }
    }

    /// Reduce a definite limit by `amount`, flooring at a definite zero.
    #[inline]
    #[must_use]
    pub fn shrink_by(self, amount: i32) -> Self {
        match self {
            Self::Unconstrained => Self::Unconstrained,
            Self::Definite(limit) => Self::Definite(limit.saturating_sub(amount).max(0)),
        }
    }

    /// True when `used` exceeds a definite limit. Never true when unconstrained.
    #[inline]
    pub const fn is_exceeded_by(self, used: i32) -> bool {
        match self {
            Self::Unconstrained => false,
            Self::Definite(limit) => used > limit,
        }
    }
}
