//! Panel piece identifiers.

use crate::model::error::SpotlightError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of panels a spotlight can create.
///
/// Ten kinds: four backdrops dimming everything around the highlighted
/// region, four border strips framing it, the transparent click-intercepting
/// overlay, and the container layer the other panels are appended into.
///
/// The variant order is load-bearing for teardown: sorted collections visit
/// backdrops, then borders, then the overlay, and the container last, so
/// iterating a panel map removes children before their container.
///
/// Each kind has a canonical kebab-case tag (`"backdrop-top"`, `"overlay"`,
/// …) used for serialization, [`Display`](fmt::Display), and [`FromStr`].
/// Parsing an unknown tag is a host-integration bug and fails fast with
/// [`SpotlightError::InvalidPiece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceKind {
    /// Dark panel above the highlighted region, spanning the viewport width.
    BackdropTop,
    /// Dark panel below the highlighted region, spanning the viewport width.
    BackdropBottom,
    /// Dark panel left of the highlighted region.
    BackdropLeft,
    /// Dark panel right of the highlighted region.
    BackdropRight,
    /// Border strip along the top edge of the highlighted region.
    BorderTop,
    /// Border strip along the bottom edge.
    BorderBottom,
    /// Border strip along the left edge.
    BorderLeft,
    /// Border strip along the right edge.
    BorderRight,
    /// Transparent cover over the highlighted region, intercepting clicks.
    Overlay,
    /// Full-viewport layer hosting every other panel.
    Container,
}

impl PieceKind {
    /// Every piece kind, in declaration order.
    pub const ALL: [PieceKind; 10] = [
        PieceKind::BackdropTop,
        PieceKind::BackdropBottom,
        PieceKind::BackdropLeft,
        PieceKind::BackdropRight,
        PieceKind::BorderTop,
        PieceKind::BorderBottom,
        PieceKind::BorderLeft,
        PieceKind::BorderRight,
        PieceKind::Overlay,
        PieceKind::Container,
    ];

    /// The four backdrop kinds.
    pub const BACKDROPS: [PieceKind; 4] = [
        PieceKind::BackdropTop,
        PieceKind::BackdropBottom,
        PieceKind::BackdropLeft,
        PieceKind::BackdropRight,
    ];

    /// The four border strip kinds.
    pub const BORDERS: [PieceKind; 4] = [
        PieceKind::BorderTop,
        PieceKind::BorderBottom,
        PieceKind::BorderLeft,
        PieceKind::BorderRight,
    ];

    /// Canonical kebab-case tag, e.g. `"backdrop-top"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            PieceKind::BackdropTop => "backdrop-top",
            PieceKind::BackdropBottom => "backdrop-bottom",
            PieceKind::BackdropLeft => "backdrop-left",
            PieceKind::BackdropRight => "backdrop-right",
            PieceKind::BorderTop => "border-top",
            PieceKind::BorderBottom => "border-bottom",
            PieceKind::BorderLeft => "border-left",
            PieceKind::BorderRight => "border-right",
            PieceKind::Overlay => "overlay",
            PieceKind::Container => "container",
        }
    }

    /// CSS class the host adapter should attach to this piece's node.
    pub const fn css_class(self) -> &'static str {
        match self {
            PieceKind::BackdropTop
            | PieceKind::BackdropBottom
            | PieceKind::BackdropLeft
            | PieceKind::BackdropRight => "spotlight__backdrop",
            PieceKind::BorderTop
            | PieceKind::BorderBottom
            | PieceKind::BorderLeft
            | PieceKind::BorderRight => "spotlight__border",
            PieceKind::Overlay => "spotlight__cover",
            PieceKind::Container => "spotlight__container",
        }
    }

    /// True for the four `backdrop-*` kinds.
    pub const fn is_backdrop(self) -> bool {
        matches!(
            self,
            PieceKind::BackdropTop
                | PieceKind::BackdropBottom
                | PieceKind::BackdropLeft
                | PieceKind::BackdropRight
        )
    }

    /// True for the four `border-*` kinds.
    pub const fn is_border(self) -> bool {
        matches!(
            self,
            PieceKind::BorderTop
                | PieceKind::BorderBottom
                | PieceKind::BorderLeft
                | PieceKind::BorderRight
        )
    }

    /// True for the kinds that get a click listener: the backdrops and the
    /// overlay.
    pub const fn is_click_source(self) -> bool {
        self.is_backdrop() || matches!(self, PieceKind::Overlay)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceKind {
    type Err = SpotlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backdrop-top" => Ok(PieceKind::BackdropTop),
            "backdrop-bottom" => Ok(PieceKind::BackdropBottom),
            "backdrop-left" => Ok(PieceKind::BackdropLeft),
            "backdrop-right" => Ok(PieceKind::BackdropRight),
            "border-top" => Ok(PieceKind::BorderTop),
            "border-bottom" => Ok(PieceKind::BorderBottom),
            "border-left" => Ok(PieceKind::BorderLeft),
            "border-right" => Ok(PieceKind::BorderRight),
            "overlay" => Ok(PieceKind::Overlay),
            "container" => Ok(PieceKind::Container),
            _ => Err(SpotlightError::InvalidPiece {
                piece: s.to_string(),
            }),
        }
    }
}
