//! Backend runtime entry point and public API surface.
//!
//! This crate owns the backend lifecycle, routes bridge messages to services,
//! and talks to the notification server over HTTP.

mod app;
mod config;
mod error;
mod runtime;
mod services;
mod state;

pub(crate) use crate::app::AppContext;
pub use crate::error::ServiceError;
pub use crate::runtime::{run, run_with_config};
