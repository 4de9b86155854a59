//! Pointer events and the click notification payload.

use crate::model::piece::PieceKind;
use serde::{Deserialize, Serialize};

/// Which pointer button a click came from, following the web's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary button, usually the left one.
    #[default]
    Main,
    /// Auxiliary button, usually the wheel or middle one.
    Auxiliary,
    /// Secondary button, usually the right one.
    Secondary,
}

/// The raw pointer event passed through from the host.
///
/// Coordinates are viewport-relative CSS pixels, the same space as
/// [`crate::model::TargetRect`]. The core never interprets the event; it is
/// forwarded verbatim to click subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Horizontal viewport coordinate of the click.
    pub client_x: f64,
    /// Vertical viewport coordinate of the click.
    pub client_y: f64,
    /// Button that triggered the event.
    pub button: MouseButton,
}

impl PointerEvent {
    /// Event at the given viewport coordinates with the primary button.
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            button: MouseButton::Main,
        }
    }
}

/// Payload of the spotlight click stream.
///
/// Raised once per click on a backdrop or the overlay while the instance is
/// shown. The adapter suppresses the default click behavior before the core
/// raises this notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotlightClick {
    /// Piece that received the click (a backdrop or the overlay).
    pub piece: PieceKind,
    /// The pointer event as delivered by the host.
    pub mouse: PointerEvent,
}
