use homewatch_core::CoreError;

/// Default backend address.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `http://camera-host:5000`.
    pub base_url: String,
    /// Anti-forgery token sent as `X-CSRFToken` on mutating requests.
    pub csrf_token: String,
    /// Raw `Cookie` header value for an authenticated session, if any.
    pub session_cookie: Option<String>,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with every other field defaulted.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            csrf_token: String::new(),
            session_cookie: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOMEWATCH_URL`        | `http://127.0.0.1:5000`  |
    /// | `HOMEWATCH_CSRF_TOKEN` | empty                    |
    /// | `HOMEWATCH_COOKIE`     | unset                    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from an arbitrary
    /// key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let base_url = lookup("HOMEWATCH_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let csrf_token = lookup("HOMEWATCH_CSRF_TOKEN").unwrap_or_default();

        let session_cookie = lookup("HOMEWATCH_COOKIE").filter(|c| !c.trim().is_empty());

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                CoreError::Validation(format!("REQUEST_TIMEOUT_SECS must be a valid u64, got '{raw}'"))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            csrf_token,
            session_cookie,
            request_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.csrf_token, "");
        assert!(config.session_cookie.is_none());
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("HOMEWATCH_URL", "http://cam:8080"),
            ("HOMEWATCH_CSRF_TOKEN", "tok"),
            ("HOMEWATCH_COOKIE", "session=abc"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://cam:8080");
        assert_eq!(config.csrf_token, "tok");
        assert_eq!(config.session_cookie.as_deref(), Some("session=abc"));
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn blank_cookie_is_ignored() {
        let config = ClientConfig::from_lookup(lookup_from(&[("HOMEWATCH_COOKIE", "  ")])).unwrap();
        assert!(config.session_cookie.is_none());
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
    }
}
