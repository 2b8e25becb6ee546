use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::{
    Root, WindowExt,
    notification::{Notification, NotificationType},
};
use notibar_bridge::{MessageFromBackend, mark::MarkRequest, toast::ToastType};
use tokio::sync::mpsc;

use crate::entities::{panel_entity::PanelEntity, settings_entity::SettingsEntity};

pub mod components;
pub mod entities;
pub mod formatting;
mod views;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<notibar_bridge::MessageToBackend>,
}

impl BackendBridge {
    async fn send(&self, message: notibar_bridge::MessageToBackend) {
        if let Err(e) = self.to_backend.send(message).await {
            log::error!("Backend is gone, dropping {:?}", e.0);
        }
    }

    pub async fn request_config(&self) {
        self.send(notibar_bridge::MessageToBackend::ConfigurationRequest)
            .await;
    }

    pub async fn request_page(&self) {
        self.send(notibar_bridge::MessageToBackend::NotificationPageRequest)
            .await;
    }

    pub async fn mark(&self, request: MarkRequest) {
        self.send(notibar_bridge::MessageToBackend::MarkRequest(request))
            .await;
    }
}

impl Global for BackendBridge {}

fn toast_type(toast_type: ToastType) -> NotificationType {
    match toast_type {
        ToastType::Warning => NotificationType::Warning,
        ToastType::Error => NotificationType::Error,
    }
}

pub fn run(
    mut rx: mpsc::Receiver<notibar_bridge::MessageFromBackend>,
    tx: mpsc::Sender<notibar_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let settings = cx.new(|_| SettingsEntity::default());
        let panel = cx.new(|_| PanelEntity::default());

        let data = entities::DataEntities { settings, panel };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                let window_handle = window.window_handle();
                cx.spawn(async move |cx| {
                    while let Some(message) = rx.recv().await {
                        log::debug!("Got a message from backend: {message:?}");
                        match message {
                            MessageFromBackend::ConfigurationResponse(config) => {
                                SettingsEntity::update(&listener_data.settings, config, cx)
                            }
                            MessageFromBackend::NotificationPageResponse(page) => {
                                PanelEntity::load(&listener_data.panel, page, cx)
                            }
                            MessageFromBackend::MarkResponse { request, body } => {
                                PanelEntity::apply_response(&listener_data.panel, request, body, cx)
                            }
                            MessageFromBackend::ToastMessage(toast) => {
                                let result = window_handle.update(cx, |_, window, cx| {
                                    let notification = Notification::new()
                                        .message(toast.message)
                                        .with_type(toast_type(toast.toast_type));
                                    window.push_notification(notification, cx);
                                });
                                if let Err(e) = result {
                                    log::error!("Failed to push a toast: {e}");
                                }
                            }
                        }
                    }
                })
                .detach();

                cx.spawn(async move |_| {
                    bridge.request_config().await;
                    bridge.request_page().await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
