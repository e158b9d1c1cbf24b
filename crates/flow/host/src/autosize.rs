//! Auto-size reconciliation: how a flow panel's own size follows its measured content and
//! the way its parent places it.

use flow_engine::{AxisRole, Size, UNCONSTRAINED_EXTENT};

/// How a panel's own size responds to its measured content.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AutoSizeMode {
    /// The explicit (or parent-assigned) size is kept; content never feeds back.
    #[default]
    None,
    /// Grow to fit the content but never below the explicit size.
    GrowOnly,
    /// Track the measured content size exactly.
    GrowAndShrink,
}

impl AutoSizeMode {
    /// True when the panel must measure its content to decide its own size.
    #[inline]
    pub const fn measures_content(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// How the parent places the panel on each physical axis.
///
/// A `Stretch` axis always takes the extent the parent provides there.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct HostRoles {
    pub horizontal: AxisRole,
    pub vertical: AxisRole,
}

impl HostRoles {
    pub const FIXED: Self = Self {
        horizontal: AxisRole::Fixed,
        vertical: AxisRole::Fixed,
    };

    /// Stretched on both axes.
    pub const FILL: Self = Self {
        horizontal: AxisRole::Stretch,
        vertical: AxisRole::Stretch,
    };
}

/// Minimum and maximum panel size. A zero component of `maximum` means "no limit".
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SizeLimits {
    pub minimum: Size,
    pub maximum: Size,
}

impl SizeLimits {
    /// Clamp `size` into the limits, applying the minimum first.
    #[must_use]
    pub fn apply(self, size: Size) -> Size {
        Size::new(
            clamp_axis(size.width, self.minimum.width, self.maximum.width),
            clamp_axis(size.height, self.minimum.height, self.maximum.height),
        )
    }
}

#[inline]
fn clamp_axis(value: i32, minimum: i32, maximum: i32) -> i32 {
    let floored = value.max(minimum);
    if maximum > UNCONSTRAINED_EXTENT {
        floored.min(maximum)
    } else {
        floored
    }
}

/// Everything needed to settle a panel's own size for one pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ReconcileInputs {
    pub mode: AutoSizeMode,
    /// Size last assigned through the explicit setter.
    pub explicit: Size,
    /// Result of measuring the panel's content (ignored in `AutoSizeMode::None`).
    pub measured: Size,
    pub roles: HostRoles,
    /// Extent offered by the parent, when the panel has been placed in one.
    pub parent_extent: Option<Size>,
    pub limits: SizeLimits,
}

/// Settle one axis. A stretched axis with a parent extent takes that extent in every mode.
#[inline]
fn reconcile_axis(
    mode: AutoSizeMode,
    explicit: i32,
    measured: i32,
    stretched_to: Option<i32>,
) -> i32 {
    if let Some(parent) = stretched_to {
        return parent;
    }
    match mode {
        AutoSizeMode::None => explicit,
        AutoSizeMode::GrowOnly => explicit.max(measured),
        AutoSizeMode::GrowAndShrink => measured,
    }
}

/// Final panel size after auto-size policy, parent stretch, and size limits.
pub fn reconcile_size(inputs: &ReconcileInputs) -> Size {
    let stretched_width = inputs
        .parent_extent
        .filter(|_| inputs.roles.horizontal.is_stretch())
        .map(|parent| parent.width);
    let stretched_height = inputs
        .parent_extent
        .filter(|_| inputs.roles.vertical.is_stretch())
        .map(|parent| parent.height);
    let width = reconcile_axis(
        inputs.mode,
        inputs.explicit.width,
        inputs.measured.width,
        stretched_width,
    );
    let height = reconcile_axis(
        inputs.mode,
        inputs.explicit.height,
        inputs.measured.height,
        stretched_height,
    );
    inputs.limits.apply(Size::new(width, height))
}

/// Constraint proposed when measuring the panel's content for auto-sizing.
///
/// A stretched axis proposes the parent's extent there so the content wraps against it;
/// every other axis proposes the unconstrained sentinel. A maximum size limit caps the
/// proposal on its axis, turning an unconstrained axis into a definite one, so content
/// wraps inside the size the panel will be clamped to.
pub fn measurement_proposal(
    roles: HostRoles,
    parent_extent: Option<Size>,
    limits: SizeLimits,
) -> Size {
    let stretched = |role: AxisRole, parent: Option<i32>| match parent {
        Some(extent) if role.is_stretch() => extent,
        _ => UNCONSTRAINED_EXTENT,
    };
    Size::new(
        cap_proposal(
            stretched(roles.horizontal, parent_extent.map(|parent| parent.width)),
            limits.maximum.width,
        ),
        cap_proposal(
            stretched(roles.vertical, parent_extent.map(|parent| parent.height)),
            limits.maximum.height,
        ),
    )
}

#[inline]
fn cap_proposal(proposed: i32, maximum: i32) -> i32 {
    if maximum <= UNCONSTRAINED_EXTENT {
        proposed
    } else if proposed <= UNCONSTRAINED_EXTENT {
        maximum
    } else {
        proposed.min(maximum)
    }
}
