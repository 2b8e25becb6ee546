//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the
//! notification panel UI with an asynchronous backend responsible for
//! loading the notification page and posting mark requests to the server.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., load the page, mark a notification).
//! - The backend pushes events (e.g., the loaded page, mark responses,
//!   toasts).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod mark;
pub mod page;
pub mod toast;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// A toast to show to the user.
    ToastMessage(toast::ToastMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// The notification page, loaded and truncated to the configured size.
    NotificationPageResponse(page::NotificationPage),
    /// Body of a successful (2xx) response to a mark request. Requests that
    /// fail in transport or with another status produce no message.
    MarkResponse {
        /// The request this response answers.
        request: mark::MarkRequest,
        /// Raw response body.
        body: String,
    },
}

/// Commands issued by the frontend to control or query the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request to (re)load the notification page.
    NotificationPageRequest,
    /// Request to post a mark form. Fire-and-forget.
    MarkRequest(mark::MarkRequest),
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
