//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and toasts back to the frontend bridge.

use std::sync::Arc;

use notibar_bridge::{
    MessageFromBackend, MessageToBackend,
    toast::{ToastMessage, ToastType},
};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
        log::info!("Frontend bridge closed, stopping backend");
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::NotificationPageRequest => {
                services::page_service::handle_page_request(self.clone()).await;
            }
            MessageToBackend::MarkRequest(request) => {
                services::mark_service::handle_mark_request(self.clone(), request).await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        if let Err(e) = self.tx.send(message).await {
            log::error!("Failed to send message to frontend: {e}");
        }
    }

    /// Send a toast message to the frontend bridge.
    pub async fn send_toast(&self, toast_type: ToastType, content: impl Into<String>) {
        self.send(MessageFromBackend::ToastMessage(ToastMessage {
            toast_type,
            message: content.into(),
        }))
        .await;
    }
}
