//! Join-game form state machine.
//!
//! The form moves between three phases:
//!
//! ```text
//! Idle/Error --submit(bad shape)--> Error
//! Idle/Error --submit(good shape)--> Submitting --found--> Idle (+ redirect)
//!                                               --none/failure--> Error
//! ```
//!
//! [`JoinForm::apply`] is the pure transition function; UI layers feed it
//! [`JoinEvent`]s and render the resulting value. [`submit`] drives a whole
//! attempt against a [`MetadataLookup`] and a [`Navigate`] implementation.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::game_id::GameId;
use crate::metadata::{GameMetadata, LookupError};
use crate::{MetadataLookup, Navigate};

/// Field key the game ID input reports its errors under.
pub const GAME_ID_FIELD: &str = "GameID";
pub const SHAPE_INVALID_MESSAGE: &str = "Game IDs need to be a 5 letter string.";
pub const INVALID_GAME_MESSAGE: &str = "Invalid game ID";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("game ID is not a 5 letter string")]
    ShapeInvalid,
    #[error("no game with that ID")]
    NotFound,
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl JoinError {
    /// Message shown next to the game ID field.
    #[must_use]
    pub const fn field_message(&self) -> &'static str {
        match self {
            Self::ShapeInvalid => SHAPE_INVALID_MESSAGE,
            Self::NotFound | Self::Lookup(_) => INVALID_GAME_MESSAGE,
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ShapeInvalid => "shape-invalid",
            Self::NotFound => "not-found",
            Self::Lookup(LookupError::Transport(_)) => "transport",
            Self::Lookup(LookupError::Server { .. }) => "server",
            Self::Lookup(LookupError::Malformed(_)) => "malformed",
        }
    }
}

/// Field name to human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), message.to_string());
        Self(errors)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Where a successful join sends the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    path: String,
}

impl Redirect {
    #[must_use]
    pub fn for_game(metadata: &GameMetadata, id: &GameId) -> Self {
        Self {
            path: format!("/{}/{id}", metadata.game_type),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinPhase {
    #[default]
    Idle,
    Submitting,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinEvent {
    /// The input failed the local shape check; no lookup was issued.
    Rejected(JoinError),
    /// A validated lookup is about to be issued.
    Started,
    /// The lookup finished.
    Resolved(Result<Redirect, JoinError>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinForm {
    phase: JoinPhase,
    errors: FormErrors,
}

impl JoinForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> JoinPhase {
        self.phase
    }

    #[must_use]
    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// True strictly while a lookup is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == JoinPhase::Submitting
    }

    #[must_use]
    pub fn game_id_error(&self) -> Option<&str> {
        self.errors.get(GAME_ID_FIELD)
    }

    /// Apply one event. A second `Started` while submitting is ignored.
    #[must_use]
    pub fn apply(self, event: JoinEvent) -> Self {
        match event {
            JoinEvent::Rejected(err) => Self::failed(&err),
            JoinEvent::Started if self.is_loading() => self,
            JoinEvent::Started => Self {
                phase: JoinPhase::Submitting,
                errors: FormErrors::new(),
            },
            JoinEvent::Resolved(Ok(_)) => Self {
                phase: JoinPhase::Idle,
                errors: FormErrors::new(),
            },
            JoinEvent::Resolved(Err(err)) => Self::failed(&err),
        }
    }

    fn failed(err: &JoinError) -> Self {
        Self {
            phase: JoinPhase::Error,
            errors: FormErrors::single(GAME_ID_FIELD, err.field_message()),
        }
    }
}

/// Normalize and shape-check raw input before any network call.
///
/// # Errors
///
/// Returns [`JoinError::ShapeInvalid`] if the normalized input is not five letters.
pub fn plan_submit(raw: &str) -> Result<GameId, JoinError> {
    GameId::parse(raw).ok_or(JoinError::ShapeInvalid)
}

/// Turn a lookup result into a redirect target.
///
/// Metadata is re-validated here whatever lookup produced it, so the redirect
/// path is always a well-formed route.
///
/// # Errors
///
/// Returns [`JoinError::NotFound`] for an empty result and
/// [`JoinError::Lookup`] when the lookup failed or returned unusable metadata.
pub fn resolve_lookup(
    id: &GameId,
    outcome: Result<Option<GameMetadata>, LookupError>,
) -> Result<Redirect, JoinError> {
    match outcome? {
        Some(metadata) => {
            let metadata = metadata.validated().map_err(LookupError::from)?;
            Ok(Redirect::for_game(&metadata, id))
        }
        None => Err(JoinError::NotFound),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A lookup was already in flight; nothing happened.
    Busy,
    /// Local validation failed; no lookup was issued.
    Rejected(JoinError),
    /// The lookup found the game and navigation was requested.
    Redirected(Redirect),
    /// The lookup ran but did not produce a game.
    Failed(JoinError),
}

/// Run one submit attempt end to end.
///
/// The form is left with `is_loading() == false` on every path that issued a
/// lookup, and navigation happens at most once.
pub async fn submit<L, N>(
    form: &mut JoinForm,
    raw: &str,
    lookup: &L,
    navigator: &N,
) -> SubmitOutcome
where
    L: MetadataLookup + ?Sized,
    N: Navigate + ?Sized,
{
    if form.is_loading() {
        return SubmitOutcome::Busy;
    }

    let id = match plan_submit(raw) {
        Ok(id) => id,
        Err(err) => {
            log::debug!("join rejected before lookup: {err}");
            *form = std::mem::take(form).apply(JoinEvent::Rejected(err.clone()));
            return SubmitOutcome::Rejected(err);
        }
    };

    *form = std::mem::take(form).apply(JoinEvent::Started);
    log::debug!("looking up game {id}");
    let resolved = resolve_lookup(&id, lookup.game_metadata(&id).await);
    *form = std::mem::take(form).apply(JoinEvent::Resolved(resolved.clone()));

    match resolved {
        Ok(redirect) => {
            log::info!("joining game {id} at {}", redirect.path());
            navigator.push(redirect.path());
            SubmitOutcome::Redirected(redirect)
        }
        Err(err) => {
            log::warn!("join of {id} failed ({}): {err}", err.kind());
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> GameId {
        GameId::parse(raw).expect("valid id")
    }

    #[test]
    fn initial_form_is_idle_and_clean() {
        let form = JoinForm::new();
        assert_eq!(form.phase(), JoinPhase::Idle);
        assert!(form.errors().is_empty());
        assert!(!form.is_loading());
    }

    #[test]
    fn rejected_sets_shape_message_without_loading() {
        let form = JoinForm::new().apply(JoinEvent::Rejected(JoinError::ShapeInvalid));
        assert_eq!(form.phase(), JoinPhase::Error);
        assert!(!form.is_loading());
        assert_eq!(form.game_id_error(), Some(SHAPE_INVALID_MESSAGE));
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn started_clears_previous_errors() {
        let form = JoinForm::new()
            .apply(JoinEvent::Resolved(Err(JoinError::NotFound)))
            .apply(JoinEvent::Started);
        assert!(form.is_loading());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn second_start_is_ignored() {
        let form = JoinForm::new().apply(JoinEvent::Started);
        let again = form.clone().apply(JoinEvent::Started);
        assert_eq!(form, again);
    }

    #[test]
    fn resolution_always_clears_loading() {
        let ok = Redirect::for_game(&GameMetadata::new("trivia"), &id("abcde"));
        let outcomes = [
            Ok(ok),
            Err(JoinError::NotFound),
            Err(JoinError::Lookup(LookupError::Transport("offline".into()))),
            Err(JoinError::Lookup(LookupError::Server { status: 500 })),
        ];
        for outcome in outcomes {
            let form = JoinForm::new()
                .apply(JoinEvent::Started)
                .apply(JoinEvent::Resolved(outcome));
            assert!(!form.is_loading());
        }
    }

    #[test]
    fn errors_are_replaced_not_merged() {
        let form = JoinForm::new()
            .apply(JoinEvent::Rejected(JoinError::ShapeInvalid))
            .apply(JoinEvent::Resolved(Err(JoinError::NotFound)));
        assert_eq!(form.errors(), &FormErrors::single(GAME_ID_FIELD, INVALID_GAME_MESSAGE));
    }

    #[test]
    fn lookup_failures_collapse_to_invalid_game() {
        for err in [
            JoinError::NotFound,
            LookupError::Transport("x".into()).into(),
            LookupError::Server { status: 503 }.into(),
            LookupError::Malformed("x".into()).into(),
        ] {
            assert_eq!(err.field_message(), INVALID_GAME_MESSAGE);
        }
        assert_eq!(JoinError::ShapeInvalid.field_message(), SHAPE_INVALID_MESSAGE);
    }

    #[test]
    fn resolve_lookup_builds_type_specific_path() {
        let redirect = resolve_lookup(&id("ABCDE"), Ok(Some(GameMetadata::new("trivia"))))
            .expect("redirect");
        assert_eq!(redirect.path(), "/trivia/ABCDE");
        assert_eq!(
            resolve_lookup(&id("ZZZZZ"), Ok(None)),
            Err(JoinError::NotFound)
        );
        assert_eq!(
            resolve_lookup(&id("QQQQQ"), Err(LookupError::Server { status: 502 })),
            Err(JoinError::Lookup(LookupError::Server { status: 502 }))
        );
    }

    #[test]
    fn resolve_lookup_rejects_unsafe_game_types() {
        for game_type in ["../admin", "", "a/b"] {
            let resolved = resolve_lookup(&id("ABCDE"), Ok(Some(GameMetadata::new(game_type))));
            assert!(
                matches!(resolved, Err(JoinError::Lookup(LookupError::Malformed(_)))),
                "{game_type:?}"
            );
        }
    }

    #[test]
    fn plan_submit_gates_on_shape() {
        assert_eq!(plan_submit(" abcde "), Ok(id("ABCDE")));
        assert_eq!(plan_submit(""), Err(JoinError::ShapeInvalid));
        assert_eq!(plan_submit("abc12"), Err(JoinError::ShapeInvalid));
    }

    #[test]
    fn error_kinds_are_distinct() {
        let kinds = [
            JoinError::ShapeInvalid.kind(),
            JoinError::NotFound.kind(),
            JoinError::from(LookupError::Transport(String::new())).kind(),
            JoinError::from(LookupError::Server { status: 500 }).kind(),
            JoinError::from(LookupError::Malformed(String::new())).kind(),
        ];
        let unique: std::collections::BTreeSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }
}
