mod notification_bar;

use gpui::{
    AppContext, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div,
};
use gpui_component::{ActiveTheme, Root};
use notibar_panel::ClickTarget;

use crate::{entities::DataEntities, views::notification_bar::NotificationBar};

/// Root view of the window. Clicks that bubble up to it close the panel.
pub struct FrontendUi {
    data: DataEntities,
    notification_bar: Entity<NotificationBar>,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, _: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.settings, |_, _, cx| cx.notify()).detach();
        Self {
            data: data.clone(),
            notification_bar: cx.new(|cx| NotificationBar::new(data, cx)),
        }
    }
}

impl Render for FrontendUi {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notification_layer = Root::render_notification_layer(window, cx);
        let page_url = self.data.settings.read(cx).config.endpoint.page_url.clone();

        div()
            .id("root")
            .flex()
            .flex_col()
            .size_full()
            .on_click(cx.listener(|this, _, _, cx| {
                this.data
                    .panel
                    .update(cx, |panel, cx| panel.click(ClickTarget::Outside, cx));
            }))
            .child(self.notification_bar.clone())
            .child(
                div()
                    .p_5()
                    .size_full()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(format!("Notifications from {page_url}")),
            )
            .children(notification_layer)
    }
}
