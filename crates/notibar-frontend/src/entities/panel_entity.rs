use gpui::{AppContext, Context, Entity};
use notibar_bridge::{mark::MarkRequest, page::NotificationPage};
use notibar_panel::{ClickOutcome, ClickTarget, MarkOutcome, NotificationPanel};

use crate::BackendBridge;

/// Owner of the [`NotificationPanel`] on the UI thread.
///
/// Every click and every mark response goes through this entity, which makes
/// it the single writer of the badge.
#[derive(Debug, Clone, Default)]
pub struct PanelEntity {
    /// `None` until the first page arrives.
    pub panel: Option<NotificationPanel>,
    /// Why the last page could not be shown.
    pub load_error: Option<String>,
}

impl PanelEntity {
    /// Replaces the panel with one built from a freshly loaded page.
    pub fn load<C: AppContext>(entity: &Entity<Self>, page: NotificationPage, cx: &mut C) {
        let _ = entity.update(cx, |this, cx| {
            match NotificationPanel::initialize(page) {
                Ok(panel) => {
                    this.panel = Some(panel);
                    this.load_error = None;
                }
                Err(e) => {
                    log::error!("Rejected notification page: {e}");
                    this.panel = None;
                    this.load_error = Some(e.to_string());
                }
            }
            cx.notify();
        });
    }

    /// Hands a mark response to the panel.
    pub fn apply_response<C: AppContext>(
        entity: &Entity<Self>,
        request: MarkRequest,
        body: String,
        cx: &mut C,
    ) {
        let _ = entity.update(cx, |this, cx| {
            let Some(panel) = this.panel.as_mut() else {
                return;
            };
            if let MarkOutcome::Marked { marked, .. } = panel.apply_response(&request, &body) {
                log::info!("Request #{} marked {marked} notification(s)", request.sequence);
                cx.notify();
            }
        });
    }

    /// Routes a click to the panel and posts the resulting request, if any.
    pub fn click(&mut self, target: ClickTarget, cx: &mut Context<Self>) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };

        match panel.handle_click(target) {
            ClickOutcome::Request(request) => {
                let bridge = cx.global::<BackendBridge>().clone();
                cx.spawn(async move |_, _| {
                    bridge.mark(request).await;
                })
                .detach();
            }
            ClickOutcome::Toggled { .. } | ClickOutcome::Closed => cx.notify(),
            ClickOutcome::Ignored => {}
        }
    }
}
