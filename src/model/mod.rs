//! Domain model types (pure).
//!
//! Rectangles, piece identifiers, style records, ids, click events, and the
//! error taxonomy. All types in this module are pure data with smart
//! constructors; nothing here performs I/O.

pub mod error;
pub mod event;
pub mod id;
pub mod piece;
pub mod rect;
pub mod style;

// Re-export for convenience
pub use error::{InvalidSpotlightId, SpotlightError};
pub use event::{MouseButton, PointerEvent, SpotlightClick};
pub use id::SpotlightId;
pub use piece::PieceKind;
pub use rect::TargetRect;
pub use style::{BorderStyle, Position, Px, StyleRecord};
