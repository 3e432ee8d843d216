//! Game metadata returned by the games API, validated at the lookup boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-provided descriptor of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    /// Game type, used as the first segment of the game route (e.g. `trivia`).
    pub game_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    /// Seated player names; empty seats are `null`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<Option<String>>,
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("game_type is empty")]
    EmptyGameType,
    #[error("game_type {0:?} is not a valid route segment")]
    UnsafeGameType(String),
}

/// Why a metadata lookup could not produce an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server responded with HTTP {status}")]
    Server { status: u16 },
    #[error("Malformed game metadata: {0}")]
    Malformed(String),
}

impl From<MetadataError> for LookupError {
    fn from(err: MetadataError) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// True when `segment` can be used verbatim as a path segment.
#[must_use]
pub fn is_route_safe(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl GameMetadata {
    #[must_use]
    pub fn new(game_type: impl Into<String>) -> Self {
        Self {
            game_type: game_type.into(),
            game_id: None,
            max_players: None,
            players: Vec::new(),
        }
    }

    /// Decode a lookup response body.
    ///
    /// A JSON `null` means the server knows no such game and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON, does not match the schema, or
    /// carries a `game_type` that cannot be used in a route.
    pub fn from_json(body: &str) -> Result<Option<Self>, MetadataError> {
        let metadata: Option<Self> = serde_json::from_str(body)?;
        metadata.map(Self::validated).transpose()
    }

    /// Check the invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if `game_type` is empty or not route safe.
    pub fn validated(self) -> Result<Self, MetadataError> {
        if self.game_type.is_empty() {
            return Err(MetadataError::EmptyGameType);
        }
        if !is_route_safe(&self.game_type) {
            return Err(MetadataError::UnsafeGameType(self.game_type));
        }
        Ok(self)
    }
}
