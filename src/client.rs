//! HTTP client for the notes backend.
//!
//! `NotesBackend` is the seam the interaction layer talks through; `HttpBackend`
//! is the reqwest implementation that speaks to this crate's own server.

use crate::auth::SESSION_COOKIE;
use crate::models::{NoteId, ShareResponse, UpdateNameRequest};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use thiserror::Error;
use url::Url;

/// Header the share endpoint uses to tell script calls from form posts.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[allow(async_fn_in_trait)]
pub trait NotesBackend {
    /// `POST /note/share/{id}`.
    async fn toggle_share(&self, note_id: NoteId) -> Result<ShareResponse, ClientError>;

    /// `POST /update_name`. Any 2xx counts as saved.
    async fn update_name(&self, name: &str) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: Url,
    session: Option<String>,
}

impl HttpBackend {
    pub fn new(base: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        // join() drops the last segment unless the base ends with a slash
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
            session: None,
        })
    }

    /// Send the given session token as the login cookie.
    pub fn with_session(mut self, token: &str) -> Self {
        self.session = Some(token.to_string());
        self
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUESTED_WITH_HEADER, HeaderValue::from_static(REQUESTED_WITH_VALUE));
        if let Some(ref token) = self.session {
            if let Ok(value) = HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, token)) {
                headers.insert(COOKIE, value);
            }
        }
        headers
    }
}

impl NotesBackend for HttpBackend {
    async fn toggle_share(&self, note_id: NoteId) -> Result<ShareResponse, ClientError> {
        let url = self.endpoint(&format!("note/share/{}", note_id))?;
        let res = self
            .client
            .post(url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !res.status().is_success() {
            return Err(ClientError::Status(res.status().as_u16()));
        }

        res.json::<ShareResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn update_name(&self, name: &str) -> Result<(), ClientError> {
        let url = self.endpoint("update_name")?;
        let body = UpdateNameRequest {
            name: Some(name.to_string()),
        };
        let res = self
            .client
            .post(url)
            .headers(self.headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Status(res.status().as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let backend = HttpBackend::new("http://localhost:3000/app").unwrap();
        assert_eq!(
            backend.endpoint("/note/share/4").unwrap().as_str(),
            "http://localhost:3000/app/note/share/4"
        );

        let backend = HttpBackend::new("http://localhost:3000").unwrap();
        assert_eq!(
            backend.endpoint("update_name").unwrap().as_str(),
            "http://localhost:3000/update_name"
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            HttpBackend::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_session_cookie_header() {
        let backend = HttpBackend::new("http://localhost").unwrap().with_session("tok");
        let headers = backend.headers();
        assert_eq!(headers.get(COOKIE).unwrap(), &format!("{}=tok", SESSION_COOKIE));
        assert_eq!(headers.get(REQUESTED_WITH_HEADER).unwrap(), REQUESTED_WITH_VALUE);
    }
}
