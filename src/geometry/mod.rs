//! Pure geometry: target rectangle in, per-piece style out.
//!
//! [`compute_style`] derives every panel's position and size from the
//! highlighted element's bounding box. The target rect is first expanded by
//! `indent` on all four sides into the *frame*; backdrops butt against the
//! frame, the overlay covers it exactly, and border strips sit entirely
//! outside it, thickened by `border_width`.
//!
//! Viewport dimensions are deliberately not an input: spans that reach a far
//! viewport edge anchor there with `right: 0` / `bottom: 0`, so the emitted
//! styles stay valid across resizes without recomputing those fields.

use crate::model::{BorderStyle, PieceKind, Position, Px, StyleRecord, TargetRect};

/// Z-index layers, bottom to top: container, backdrops, borders, overlay.
pub mod layer {
    /// Container layer hosting every other panel.
    pub const CONTAINER: i32 = 970;
    /// The four dimming backdrops.
    pub const BACKDROP: i32 = 980;
    /// The four border strips.
    pub const BORDER: i32 = 985;
    /// The click-intercepting cover.
    pub const OVERLAY: i32 = 990;
}

/// The indent-expanded box around the target.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn expand(rect: TargetRect, indent: f64) -> Self {
        Self {
            left: rect.left - indent,
            top: rect.top - indent,
            right: rect.right + indent,
            bottom: rect.bottom + indent,
            width: rect.width + 2.0 * indent,
            height: rect.height + 2.0 * indent,
        }
    }
}

fn layer_base(z_index: i32) -> StyleRecord {
    StyleRecord {
        position: Some(Position::Fixed),
        z_index: Some(z_index),
        ..StyleRecord::default()
    }
}

fn border_base(border_width: f64) -> StyleRecord {
    StyleRecord {
        border_style: Some(BorderStyle::Solid),
        border_width: Some(Px(border_width)),
        ..layer_base(layer::BORDER)
    }
}

/// Derives the style of one panel piece from the target's current bounding
/// box.
///
/// `indent` widens the protected region outward on all four sides before any
/// geometry is derived. `border_width` only affects border strips: each is a
/// `border_width`-thick bar just outside the widened box with zero gap on
/// its inner edge, its length extended by `2 * border_width` so the four
/// strips close at the corners.
///
/// Pure and total: no I/O, no state, and every [`PieceKind`] yields a
/// well-defined record, including for degenerate zero-size or off-screen
/// rects, which pass through without clamping.
///
/// # Examples
///
/// ```
/// use spotlight_core::{compute_style, PieceKind, Px, TargetRect};
///
/// let rect = TargetRect::from_ltwh(100.0, 50.0, 200.0, 100.0);
/// let overlay = compute_style(rect, PieceKind::Overlay, 4.0, 10.0);
/// assert_eq!(overlay.left, Some(Px(90.0)));
/// assert_eq!(overlay.width, Some(Px(220.0)));
/// ```
pub fn compute_style(
    rect: TargetRect,
    piece: PieceKind,
    border_width: f64,
    indent: f64,
) -> StyleRecord {
    let frame = Frame::expand(rect, indent);
    let bw = border_width;

    match piece {
        PieceKind::BackdropTop => StyleRecord {
            top: Some(Px(0.0)),
            left: Some(Px(0.0)),
            right: Some(Px(0.0)),
            height: Some(Px(frame.top)),
            ..layer_base(layer::BACKDROP)
        },
        PieceKind::BackdropBottom => StyleRecord {
            top: Some(Px(frame.bottom)),
            left: Some(Px(0.0)),
            right: Some(Px(0.0)),
            bottom: Some(Px(0.0)),
            ..layer_base(layer::BACKDROP)
        },
        PieceKind::BackdropLeft => StyleRecord {
            top: Some(Px(frame.top)),
            left: Some(Px(0.0)),
            width: Some(Px(frame.left)),
            height: Some(Px(frame.height)),
            ..layer_base(layer::BACKDROP)
        },
        PieceKind::BackdropRight => StyleRecord {
            top: Some(Px(frame.top)),
            left: Some(Px(frame.right)),
            right: Some(Px(0.0)),
            height: Some(Px(frame.height)),
            ..layer_base(layer::BACKDROP)
        },
        PieceKind::BorderTop => StyleRecord {
            top: Some(Px(frame.top - bw)),
            left: Some(Px(frame.left - bw)),
            width: Some(Px(frame.width + 2.0 * bw)),
            height: Some(Px(bw)),
            ..border_base(bw)
        },
        PieceKind::BorderBottom => StyleRecord {
            top: Some(Px(frame.bottom)),
            left: Some(Px(frame.left - bw)),
            width: Some(Px(frame.width + 2.0 * bw)),
            height: Some(Px(bw)),
            ..border_base(bw)
        },
        PieceKind::BorderLeft => StyleRecord {
            top: Some(Px(frame.top - bw)),
            left: Some(Px(frame.left - bw)),
            width: Some(Px(bw)),
            height: Some(Px(frame.height + 2.0 * bw)),
            ..border_base(bw)
        },
        PieceKind::BorderRight => StyleRecord {
            top: Some(Px(frame.top - bw)),
            left: Some(Px(frame.right)),
            width: Some(Px(bw)),
            height: Some(Px(frame.height + 2.0 * bw)),
            ..border_base(bw)
        },
        PieceKind::Overlay => StyleRecord {
            top: Some(Px(frame.top)),
            left: Some(Px(frame.left)),
            width: Some(Px(frame.width)),
            height: Some(Px(frame.height)),
            ..layer_base(layer::OVERLAY)
        },
        PieceKind::Container => StyleRecord {
            top: Some(Px(0.0)),
            left: Some(Px(0.0)),
            right: Some(Px(0.0)),
            bottom: Some(Px(0.0)),
            ..layer_base(layer::CONTAINER)
        },
    }
}
