//! Style records emitted by the geometry engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS pixel length.
///
/// Displays in CSS notation: `Px(90.0)` renders as `90px`, fractional values
/// keep their decimals (`86.5px`). Serializes as a bare number so JSON
/// bridges receive plain floats.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Px(pub f64);

impl Px {
    /// The numeric value in pixels.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<f64> for Px {
    fn from(value: f64) -> Self {
        Px(value)
    }
}

/// CSS positioning scheme for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Positioned against the viewport; immune to page scroll.
    Fixed,
    /// Positioned against the nearest positioned ancestor.
    Absolute,
}

impl Position {
    /// The CSS keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Position::Fixed => "fixed",
            Position::Absolute => "absolute",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS border line style carried by border strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// A solid line.
    Solid,
}

impl BorderStyle {
    /// The CSS keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position and size of one panel, as an optional CSS-shaped field set.
///
/// Only the fields meaningful for a given piece are populated: backdrops
/// anchor to the far viewport edges with `right`/`bottom` insets, the
/// overlay carries explicit dimensions, border strips add the border
/// declarations. Unpopulated fields are skipped during serialization.
///
/// [`StyleRecord::declarations`] renders the populated fields as CSS
/// property/value pairs for adapters that write styles directly to a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StyleRecord {
    /// `position` declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// `z-index` declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// `top` offset from the viewport top.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Px>,
    /// `left` offset from the viewport left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Px>,
    /// `right` inset from the viewport right.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Px>,
    /// `bottom` inset from the viewport bottom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Px>,
    /// Explicit `width`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Px>,
    /// Explicit `height`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Px>,
    /// `border-style` declaration (border strips only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    /// `border-width` declaration (border strips only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Px>,
}

impl StyleRecord {
    /// True when no field is populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Renders the populated fields as `(css-property, value)` pairs.
    ///
    /// The order is stable: `position`, `z-index`, the box offsets (`top`,
    /// `left`, `right`, `bottom`), the dimensions (`width`, `height`), then
    /// the border declarations.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(position) = self.position {
            out.push(("position", position.to_string()));
        }
        if let Some(z_index) = self.z_index {
            out.push(("z-index", z_index.to_string()));
        }
        if let Some(top) = self.top {
            out.push(("top", top.to_string()));
        }
        if let Some(left) = self.left {
            out.push(("left", left.to_string()));
        }
        if let Some(right) = self.right {
            out.push(("right", right.to_string()));
        }
        if let Some(bottom) = self.bottom {
            out.push(("bottom", bottom.to_string()));
        }
        if let Some(width) = self.width {
            out.push(("width", width.to_string()));
        }
        if let Some(height) = self.height {
            out.push(("height", height.to_string()));
        }
        if let Some(border_style) = self.border_style {
            out.push(("border-style", border_style.to_string()));
        }
        if let Some(border_width) = self.border_width {
            out.push(("border-width", border_width.to_string()));
        }
        out
    }
}
