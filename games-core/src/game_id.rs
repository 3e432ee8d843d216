//! Game IDs: five ASCII letters, always stored upper-cased.
//! Input format: any casing with surrounding whitespace, e.g. ` abcde `.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Number of characters in a game ID.
pub const GAME_ID_LEN: usize = 5;

static GAME_ID_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Za-z]{5}$").ok());

/// Trim surrounding whitespace and upper-case the remainder.
#[must_use]
pub fn normalize_game_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// True iff `candidate` is exactly five ASCII letters.
#[must_use]
pub fn validate_game_id(candidate: &str) -> bool {
    GAME_ID_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(candidate))
}

/// A normalized, validated game identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(String);

impl GameId {
    /// Normalize `raw` and accept it if it is a five letter string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_game_id(raw);
        validate_game_id(&normalized).then_some(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
