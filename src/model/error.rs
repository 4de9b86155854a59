//! Error types for the spotlight core.
//!
//! The taxonomy is deliberately small. Exactly two conditions surface to
//! callers, both indicating host-integration bugs rather than runtime
//! conditions to recover from:
//!
//! - [`SpotlightError::DuplicateId`] - registering an id that is already
//!   live. Surfaced from `mount`/`register`; the existing registration is
//!   never overwritten.
//! - [`SpotlightError::InvalidPiece`] - a piece tag that names no
//!   [`crate::model::PieceKind`], caught at the parse boundary. Fail fast;
//!   the closed enum makes the error unrepresentable past that point.
//!
//! Everything else degrades gracefully: missing targets, zero-size
//! rectangles, and off-screen coordinates all produce degenerate but
//! well-defined geometry. There are no retries anywhere: operations are
//! synchronous and deterministic, so retrying cannot change an outcome.

use crate::model::id::SpotlightId;
use thiserror::Error;

/// Errors surfaced by the spotlight core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpotlightError {
    /// An id was registered while an instance under the same id is still
    /// live. The existing registration keeps functioning; the rejected
    /// instance must not be used.
    #[error("spotlight '{id}' is already registered")]
    DuplicateId {
        /// The contested id.
        id: SpotlightId,
    },

    /// A piece tag from the host named no known panel kind.
    #[error("unrecognized spotlight piece '{piece}'")]
    InvalidPiece {
        /// The offending tag, verbatim.
        piece: String,
    },
}

/// Rejection from the [`SpotlightId`] smart constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidSpotlightId {
    /// Ids must be non-empty.
    #[error("spotlight id cannot be empty")]
    Empty,
}
