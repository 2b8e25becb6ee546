//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, and the message
//! dispatch loop that listens to frontend bridge requests.

use std::{sync::Arc, thread};

use notibar_bridge::{MessageFromBackend, MessageToBackend, config::Config, toast::ToastType};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(
    config: Config,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) {
    let (request_client, client_error) =
        match crate::state::build_request_client(&config.endpoint) {
            Ok(client) => (client, None),
            Err(e) => {
                log::error!("Falling back to a plain HTTP client: {e}");
                (reqwest::Client::new(), Some(e))
            }
        };

    let state = Arc::new(RwLock::new(State {
        config,
        request_client,
    }));

    let context = Arc::new(AppContext { state, tx });
    if let Some(e) = client_error {
        context.send_toast(ToastType::Warning, e.to_string()).await;
    }
    context.consume_bridge_messages(rx).await;
}

fn spawn_runtime<F>(setup: F) -> thread::JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    thread::spawn(move || {
        match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(setup),
            Err(e) => log::error!("Failed to build tokio runtime: {e}"),
        }
    })
}

/// Spawn the backend runtime with the configuration stored on disk and begin
/// processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) -> thread::JoinHandle<()> {
    spawn_runtime(async move {
        let config = match crate::config::load_config().await {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config, using defaults: {e}");
                Config::default()
            }
        };
        setup_backend(config, rx, tx).await;
    })
}

/// Spawn the backend runtime with an explicit configuration.
pub fn run_with_config(
    config: Config,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) -> thread::JoinHandle<()> {
    spawn_runtime(setup_backend(config, rx, tx))
}
