//! Record ID - opaque UUID v4 identifier shared by every record type

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque record identifier, generated once at creation and never changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh random identifier
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        Uuid::parse_str(s.trim())
            .map(RecordId)
            .map_err(|_| RecordIdParseError::InvalidFormat)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// Error when parsing a RecordId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid record id format")]
    InvalidFormat,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<RecordId> for Uuid {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}
