//! Games front-end core
//!
//! Platform-agnostic logic behind the join-game flow: game ID normalization and
//! validation, the game metadata schema, the join-form state machine and the
//! session values shared through the application contexts.
//! This crate has no UI or browser dependencies.

pub mod game_id;
pub mod join;
pub mod metadata;
pub mod session;

use async_trait::async_trait;

// Re-export commonly used types
pub use game_id::{GAME_ID_LEN, GameId, normalize_game_id, validate_game_id};
pub use join::{
    FormErrors, GAME_ID_FIELD, INVALID_GAME_MESSAGE, JoinError, JoinEvent, JoinForm, JoinPhase,
    Redirect, SHAPE_INVALID_MESSAGE, SubmitOutcome, plan_submit, resolve_lookup, submit,
};
pub use metadata::{GameMetadata, LookupError, MetadataError, is_route_safe};
pub use session::{ActiveGame, GUEST_LABEL, GameSession, MAX_NAME_LEN, SessionError, UserSession};

/// Trait for abstracting the remote game metadata lookup.
/// Platform-specific implementations should provide this.
#[async_trait(?Send)]
pub trait MetadataLookup {
    /// Fetch metadata for a validated game ID.
    ///
    /// Returns `Ok(None)` when the server knows no game with this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached, answers with a failure
    /// status, or sends a body that does not fit the metadata schema.
    async fn game_metadata(&self, id: &GameId) -> Result<Option<GameMetadata>, LookupError>;
}

/// Trait for the routing collaborator that performs client-side navigation.
pub trait Navigate {
    /// Navigate to an absolute application path such as `/trivia/ABCDE`.
    fn push(&self, path: &str);
}
