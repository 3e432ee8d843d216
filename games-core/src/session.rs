//! Session values held by the user and game contexts.

use thiserror::Error;

use crate::game_id::GameId;
use crate::metadata::is_route_safe;

/// Label used when nobody has signed in.
pub const GUEST_LABEL: &str = "Guest";

pub const MAX_NAME_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("display name is empty")]
    EmptyName,
    #[error("display name is longer than 32 characters")]
    NameTooLong,
    #[error("game route is not valid: /{game_type}/{game_id}")]
    InvalidGameRoute { game_type: String, game_id: String },
}

/// The browsing user. Anonymous until a display name is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    display_name: Option<String>,
}

impl UserSession {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Sign in under `name`, trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or too long.
    pub fn signed_in(name: &str) -> Result<Self, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(SessionError::NameTooLong);
        }
        Ok(Self {
            display_name: Some(name.to_string()),
        })
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name().unwrap_or(GUEST_LABEL)
    }
}

/// The game the page is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveGame {
    pub id: GameId,
    pub game_type: String,
}

impl ActiveGame {
    /// Build from the two segments of a game route. The ID segment must
    /// already be in canonical (upper-case) form.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is not a canonical game ID or the type is not
    /// route safe.
    pub fn from_route(game_type: &str, game_id: &str) -> Result<Self, SessionError> {
        let invalid = || SessionError::InvalidGameRoute {
            game_type: game_type.to_string(),
            game_id: game_id.to_string(),
        };
        if !is_route_safe(game_type) {
            return Err(invalid());
        }
        let id = GameId::parse(game_id)
            .filter(|id| id.as_str() == game_id)
            .ok_or_else(invalid)?;
        Ok(Self {
            id,
            game_type: game_type.to_string(),
        })
    }

    /// Where a non-canonical game route should point instead, e.g.
    /// `/trivia/abcde` to `/trivia/ABCDE`. `None` for canonical or unusable
    /// routes.
    #[must_use]
    pub fn canonical_path(game_type: &str, game_id: &str) -> Option<String> {
        if !is_route_safe(game_type) {
            return None;
        }
        GameId::parse(game_id)
            .filter(|id| id.as_str() != game_id)
            .map(|id| format!("/{game_type}/{id}"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    current: Option<ActiveGame>,
}

impl GameSession {
    #[must_use]
    pub fn current(&self) -> Option<&ActiveGame> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn enter(self, game: ActiveGame) -> Self {
        Self {
            current: Some(game),
        }
    }

    /// Leave `id` if it is the current game. Leaving a game that was already
    /// replaced by another keeps the newer one.
    #[must_use]
    pub fn leave(self, id: &GameId) -> Self {
        let is_current = self.current.as_ref().is_some_and(|game| &game.id == id);
        if is_current { Self::default() } else { self }
    }
}
