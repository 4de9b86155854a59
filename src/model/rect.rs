//! Target rectangle read from the highlighted element.

use serde::{Deserialize, Serialize};

/// Screen-space bounding box of the highlighted element, in CSS pixels.
///
/// Mirrors the host's layout rectangle: `right` and `bottom` are absolute
/// edge coordinates, not insets, so `right = left + width` and
/// `bottom = top + height` for a well-formed rect. The value is read fresh
/// from the host on every computation and never cached; layout can change
/// between frames.
///
/// Zero-size and off-screen (negative coordinate) rects are legal inputs
/// everywhere in this crate and produce degenerate but well-defined
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetRect {
    /// Left edge, viewport-relative.
    pub left: f64,
    /// Top edge, viewport-relative.
    pub top: f64,
    /// Right edge, viewport-relative.
    pub right: f64,
    /// Bottom edge, viewport-relative.
    pub bottom: f64,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
}

impl TargetRect {
    /// Zero-size rect at the origin.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Builds a rect from its top-left corner and dimensions, deriving the
    /// far edges.
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Builds a rect from its four edges, deriving the dimensions.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }
}
