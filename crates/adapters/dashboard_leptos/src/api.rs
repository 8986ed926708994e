//! Character API client wrapping `gloo-net`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use rickdex_app::ports::CharacterSource;
use rickdex_domain::character::CharacterPage;
use rickdex_domain::error::SourceError;

/// Fixed character listing endpoint. Only the first page is ever read.
pub const CHARACTERS_URL: &str = "https://rickandmortyapi.com/api/character";

/// Error returned by the API client.
#[derive(Debug)]
pub enum ApiError {
    /// The request did not complete (network, CORS, aborted body read).
    Transport(gloo_net::Error),
    /// Non-2xx status code.
    Status(u16),
    /// The body is not a character listing.
    Decode(serde_json::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "request failed: {err}"),
            Self::Status(status) => write!(f, "HTTP {status}"),
            Self::Decode(err) => write!(f, "invalid character listing: {err}"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<ApiError> for SourceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(err) => Self::Transport(err.to_string()),
            ApiError::Status(status) => Self::Status(status),
            ApiError::Decode(err) => Self::Decode(err.to_string()),
        }
    }
}

/// Reject non-2xx responses.
fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

/// Decode a listing body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when `body` is not a character listing.
pub fn decode_page(body: &str) -> Result<CharacterPage, ApiError> {
    serde_json::from_str(body).map_err(ApiError::Decode)
}

/// Fetch and decode the listing at `url`.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures, non-2xx statuses and
/// undecodable bodies.
pub async fn fetch_page(url: &str) -> Result<CharacterPage, ApiError> {
    let resp = check_response(Request::get(url).send().await?)?;
    let body = resp.text().await?;
    decode_page(&body)
}

/// [`CharacterSource`] backed by the public character API.
#[derive(Debug, Clone)]
pub struct HttpCharacterSource {
    url: String,
}

impl HttpCharacterSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpCharacterSource {
    fn default() -> Self {
        Self::new(CHARACTERS_URL)
    }
}

impl CharacterSource for HttpCharacterSource {
    fn fetch_page(&self) -> impl Future<Output = Result<CharacterPage, SourceError>> {
        let url = self.url.clone();
        async move { fetch_page(&url).await.map_err(SourceError::from) }
    }
}
