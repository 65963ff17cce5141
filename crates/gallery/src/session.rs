//! Per-page session context.
//!
//! Holds what the browser page would otherwise read from globals: the
//! backend address, the anti-forgery token and an HTTP client carrying the
//! session cookie.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Url;

use crate::api::GalleryApiError;
use crate::config::ClientConfig;

/// Explicit context shared by every component that talks to the backend.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: Url,
    csrf_token: String,
    client: reqwest::Client,
}

impl Session {
    /// Build a session from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, GalleryApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            GalleryApiError::Config(format!("invalid backend URL '{}': {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GalleryApiError::Config(format!(
                "backend URL '{}' cannot be used as a base",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| GalleryApiError::Config(format!("invalid session cookie: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url,
            csrf_token: config.csrf_token.clone(),
            client,
        })
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// URL for an endpoint below the base URL, one path segment per entry.
    ///
    /// Segments are percent-encoded, so identifiers containing `/`, `?` or
    /// spaces stay a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
