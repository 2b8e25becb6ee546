/// Errors raised while talking to the notification server.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request could not be sent, the status was not successful or the
    /// body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The page URL or a form action is not a valid URL.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The configured session cookie cannot be used as a header value.
    #[error("invalid session cookie: {0}")]
    InvalidCookie(#[from] reqwest::header::InvalidHeaderValue),
}
