use serde::{Deserialize, Serialize};

/// Where the notification page lives and how requests to the server are
/// authenticated.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// URL of the notification page. Relative form actions are resolved
    /// against it.
    pub page_url: String,
    /// Raw `Cookie` header value identifying the user's session, if the
    /// server requires one.
    pub session_cookie: Option<String>,
    /// Whether to send `X-Requested-With: XMLHttpRequest`. The server only
    /// answers `marked` to requests carrying it.
    pub ajax_header: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            page_url: "http://localhost:8000/notifications/".to_owned(),
            session_cookie: None,
            ajax_header: true,
        }
    }
}

/// Configuration for the display of the notification panel.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Maximum amount of items kept per notification list.
    pub notification_amount: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            notification_amount: 8,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Server endpoints used by the backend.
    pub endpoint: EndpointConfig,
    /// Presentation settings of the panel.
    pub panel: PanelConfig,
}
