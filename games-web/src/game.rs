//! Web-specific implementations of the games-core traits
//!
//! This module provides the HTTP metadata lookup used by the join form and
//! re-exports the core join-flow types.

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;
use web_sys::Response;

use crate::dom;

// Re-export all types from games-core
pub use games_core::*;

/// HTTP status the games API uses for an unknown game ID.
const NOT_FOUND: u16 = 404;

/// Looks up game metadata with `GET {base_url}/games/{ID}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMetadataLookup {
    base_url: String,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Response body could not be read: {0}")]
    Body(String),
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        Self::Transport(err.to_string())
    }
}

impl HttpMetadataLookup {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Lookup against the API configured at build time.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(crate::paths::api_url())
    }

    #[must_use]
    pub fn endpoint(&self, id: &GameId) -> String {
        format!("{}/games/{id}", self.base_url)
    }
}

/// Map an HTTP status to "no game" or a server failure; `None` means "read the body".
fn classify_status(status: u16, ok: bool) -> Option<Result<Option<GameMetadata>, LookupError>> {
    if status == NOT_FOUND {
        Some(Ok(None))
    } else if ok {
        None
    } else {
        Some(Err(LookupError::Server { status }))
    }
}

#[allow(clippy::future_not_send)]
async fn read_body(response: &Response) -> Result<String, FetchError> {
    dom::response_text(response)
        .await
        .map_err(|err| FetchError::Body(dom::js_error_message(&err)))
}

#[async_trait(?Send)]
impl MetadataLookup for HttpMetadataLookup {
    async fn game_metadata(&self, id: &GameId) -> Result<Option<GameMetadata>, LookupError> {
        let url = self.endpoint(id);
        log::debug!("GET {url}");
        let response = dom::fetch_json(&url)
            .await
            .map_err(|err| FetchError::Request(dom::js_error_message(&err)))?;

        if let Some(answer) = classify_status(response.status(), response.ok()) {
            return answer;
        }

        let body = read_body(&response).await?;
        Ok(GameMetadata::from_json(&body)?)
    }
}

/// Shared, comparable handle to a lookup implementation, suitable for props.
#[derive(Clone)]
pub struct LookupHandle(Rc<dyn MetadataLookup>);

impl LookupHandle {
    pub fn new(lookup: impl MetadataLookup + 'static) -> Self {
        Self(Rc::new(lookup))
    }

    #[must_use]
    pub fn http() -> Self {
        Self::new(HttpMetadataLookup::from_env())
    }

    #[must_use]
    pub fn lookup(&self) -> &dyn MetadataLookup {
        self.0.as_ref()
    }
}

impl Default for LookupHandle {
    fn default() -> Self {
        Self::http()
    }
}

impl PartialEq for LookupHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
