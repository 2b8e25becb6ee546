use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};

use crate::error::ServiceError;

/// The core application state that holds the configuration and the HTTP
/// client shared by all services.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) so that concurrent mark requests can
/// read it.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: notibar_bridge::config::Config,
    /// Shared HTTP client carrying the session and AJAX headers.
    pub request_client: reqwest::Client,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;

/// Header marking requests as AJAX calls. Without it the mark endpoint
/// redirects instead of answering `marked`.
const REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// Builds the HTTP client used for every request to the server.
pub(crate) fn build_request_client(
    endpoint: &notibar_bridge::config::EndpointConfig,
) -> Result<reqwest::Client, ServiceError> {
    let mut headers = HeaderMap::new();
    if endpoint.ajax_header {
        headers.insert(REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
    }
    if let Some(cookie) = &endpoint.session_cookie {
        let mut value = HeaderValue::from_str(cookie)?;
        value.set_sensitive(true);
        headers.insert(COOKIE, value);
    }

    Ok(reqwest::Client::builder().default_headers(headers).build()?)
}

#[cfg(test)]
mod tests {
    use notibar_bridge::config::EndpointConfig;

    use super::*;

    #[test]
    fn rejects_cookie_with_newline() {
        let endpoint = EndpointConfig {
            session_cookie: Some("sessionid=abc\r\nX-Evil: 1".to_owned()),
            ..EndpointConfig::default()
        };
        assert!(matches!(
            build_request_client(&endpoint),
            Err(ServiceError::InvalidCookie(_))
        ));
    }

    #[test]
    fn accepts_plain_cookie() {
        let endpoint = EndpointConfig {
            session_cookie: Some("sessionid=abc; csrftoken=def".to_owned()),
            ..EndpointConfig::default()
        };
        assert!(build_request_client(&endpoint).is_ok());
    }
}
