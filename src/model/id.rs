//! Spotlight instance identifiers.

use crate::model::error::InvalidSpotlightId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Process-local sequence folded into generated ids so two mounts within the
// same millisecond stay distinct.
static GENERATED_SEQ: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of one highlight target.
///
/// Non-empty by construction: callers either supply their own id through the
/// smart constructor or let the library mint a time-based one with
/// [`SpotlightId::generate`]. Identity is fixed for the life of a mounted
/// instance; the registry enforces uniqueness among live registrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpotlightId(String);

impl SpotlightId {
    /// Smart constructor: validates a non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSpotlightId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidSpotlightId::Empty);
        }
        Ok(Self(raw))
    }

    /// Mints a time-based id of the form `spotlight-<unix-millis>-<seq>`.
    ///
    /// The trailing sequence number breaks ties between mounts landing in
    /// the same millisecond, so generated ids never collide within a
    /// process.
    pub fn generate() -> Self {
        let seq = GENERATED_SEQ.fetch_add(1, Ordering::Relaxed);
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("spotlight-{millis}-{seq}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpotlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SpotlightId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SpotlightId {
    type Error = InvalidSpotlightId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<SpotlightId> for String {
    fn from(id: SpotlightId) -> Self {
        id.0
    }
}
