use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// Globally unique identifier for a ledger participant.
///
/// Freshly generated ids are UUID v4 strings. The wrapper itself accepts any
/// text on the wire: a transfer naming an id that was never issued is a
/// business outcome ("transaction failed"), not a decode error.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse a strictly formatted identifier (hyphenated UUID).
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let uuid = Uuid::parse_str(s).map_err(|e| TypeError::InvalidParticipantId(e.to_string()))?;
        Ok(Self(uuid.hyphenated().to_string()))
    }

    /// Wrap an arbitrary string without validation.
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticipantId({})", self.0)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
