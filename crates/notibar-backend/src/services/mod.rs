//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, talk to the notification server, and emit responses or
//! toasts back to the frontend.

pub mod config_service;
pub mod mark_service;
pub mod page_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::AppContext>;
