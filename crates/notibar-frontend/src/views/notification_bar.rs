use gpui::{
    AnyElement, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};
use notibar_panel::{ClickTarget, NotificationList, NotificationPanel};

use crate::{
    BackendBridge,
    components::{count_badge::CountBadge, notification_row::NotificationRow},
    entities::{DataEntities, panel_entity::PanelEntity},
    formatting::format_unread_summary,
};

/// Header with the notification button and the dropdown panel below it.
pub struct NotificationBar {
    panel: Entity<PanelEntity>,
}

impl NotificationBar {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.panel, |_, _, cx| cx.notify()).detach();
        Self {
            panel: data.panel.clone(),
        }
    }

    /// Hands `target` to the panel. Only targets that reach the root keep
    /// bubbling; the root listener turns those into outside clicks.
    fn click(&mut self, target: ClickTarget, cx: &mut Context<Self>) {
        if !target.reaches_root() {
            cx.stop_propagation();
        }
        self.panel.update(cx, |panel, cx| panel.click(target, cx));
    }

    fn render_list(
        &self,
        index: usize,
        list: &NotificationList,
        bulk_action_visible: bool,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .children(list.items().iter().map(|item| {
                let target = ClickTarget::Item {
                    list: index,
                    item_id: item.id().to_owned(),
                };
                NotificationRow::new(index, item).on_click(cx.listener(move |this, _, _, cx| {
                    this.click(target.clone(), cx);
                }))
            }))
            .when(bulk_action_visible, |this| {
                this.child(
                    div().flex().justify_end().pt_1().child(
                        Button::new(("bulk-mark", index))
                            .outline()
                            .small()
                            .label("Mark all as read")
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.click(ClickTarget::BulkButton { list: index }, cx);
                            })),
                    ),
                )
            })
            .into_any_element()
    }

    fn render_dropdown(
        &self,
        panel: &NotificationPanel,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let lists: Vec<AnyElement> = panel
            .lists()
            .iter()
            .enumerate()
            .map(|(index, list)| {
                self.render_list(index, list, panel.is_bulk_action_visible(), cx)
            })
            .collect();
        let theme = cx.theme();

        div()
            .id("notification-bar")
            .absolute()
            .top(px(48.))
            .right(px(16.))
            .w(px(360.))
            .max_h(px(420.))
            .overflow_y_scroll()
            .p_2()
            .flex()
            .flex_col()
            .gap_2()
            .bg(theme.popover)
            .border_1()
            .border_color(theme.border)
            .rounded_lg()
            .shadow_lg()
            .on_click(cx.listener(|this, _, _, cx| {
                this.click(ClickTarget::PanelBody, cx);
            }))
            .child(
                div()
                    .px_1()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .child(format_unread_summary(panel.unread_count())),
            )
            .children(lists)
            .into_any_element()
    }
}

impl Render for NotificationBar {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.panel.read(cx).clone();
        let visible = state.panel.as_ref().is_some_and(NotificationPanel::is_visible);
        let badge = state.panel.as_ref().map(NotificationPanel::badge);
        let dropdown = state
            .panel
            .as_ref()
            .filter(|_| visible)
            .map(|panel| self.render_dropdown(panel, cx));
        let theme = cx.theme();

        div()
            .relative()
            .w_full()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .px_4()
                    .py_2()
                    .border_b_1()
                    .border_color(theme.border)
                    .child(div().child("notibar").font_bold())
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Button::new("reload-page")
                                    .outline()
                                    .small()
                                    .label("Reload")
                                    .on_click(cx.listener(|_, _, _, cx| {
                                        let bridge = cx.global::<BackendBridge>().clone();
                                        cx.spawn(async move |_, _| {
                                            bridge.request_page().await;
                                        })
                                        .detach();
                                    })),
                            )
                            .child(
                                div()
                                    .id("notification-button")
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .px_3()
                                    .py_1()
                                    .rounded_md()
                                    .border_1()
                                    .border_color(theme.border)
                                    .cursor_pointer()
                                    .on_click(cx.listener(|this, _, _, cx| {
                                        this.click(ClickTarget::ToggleButton, cx);
                                    }))
                                    .child("Notifications")
                                    .when_some(badge, |this, badge| {
                                        this.child(CountBadge::new(badge))
                                    }),
                            ),
                    ),
            )
            .when_some(state.load_error, |this, error| {
                this.child(
                    div()
                        .px_4()
                        .py_2()
                        .text_sm()
                        .text_color(theme.danger)
                        .child(error),
                )
            })
            .children(dropdown)
    }
}
