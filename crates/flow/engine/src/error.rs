//! Boundary validation errors.
//!
//! The layout algorithm itself never fails; these faults are raised before a pass starts
//! when the caller hands in a configuration the engine cannot lay out.

use thiserror::Error;

use crate::config::FlowConfig;
use crate::element::Element;
use crate::geometry::Size;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("element {index} has a negative margin")]
    NegativeMargin { index: usize },

    #[error("container padding is negative")]
    NegativePadding,

    #[error("negative size {width}x{height} for {what}")]
    NegativeSize {
        what: &'static str,
        width: i32,
        height: i32,
    },

    #[error("unknown or removed element")]
    UnknownElement,
}

/// Reject a configuration/element sequence the engine cannot lay out.
///
/// # Errors
/// Returns the first fault found: negative padding, then per element (in order) a negative
/// preferred size or a negative margin.
pub fn validate(config: &FlowConfig, elements: &[Element]) -> Result<(), FlowError> {
    if !config.padding.is_non_negative() {
        return Err(FlowError::NegativePadding);
    }
    for (index, element) in elements.iter().enumerate() {
        check_size("element preferred size", element.preferred_size)?;
        if !element.margin.is_non_negative() {
            return Err(FlowError::NegativeMargin { index });
        }
    }
    Ok(())
}

/// Reject a size with a negative component.
///
/// # Errors
/// Returns `FlowError::NegativeSize` naming `what` when either component is below zero.
pub fn check_size(what: &'static str, size: Size) -> Result<(), FlowError> {
    if size.width < 0 || size.height < 0 {
        return Err(FlowError::NegativeSize {
            what,
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}
