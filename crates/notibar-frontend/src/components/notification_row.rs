use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_component::{ActiveTheme, StyledExt};
use notibar_panel::NotificationItem;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A single notification inside the dropdown. Unread rows carry a dot and a
/// highlighted background.
#[derive(IntoElement)]
pub struct NotificationRow {
    id: ElementId,
    text: SharedString,
    timesince: SharedString,
    unread: bool,
    on_click: Option<ClickHandler>,
}

impl NotificationRow {
    pub fn new(list: usize, item: &NotificationItem) -> Self {
        Self {
            id: ElementId::Name(format!("notification-item-{list}-{}", item.id()).into()),
            text: item.text().to_owned().into(),
            timesince: item.timesince().to_owned().into(),
            unread: item.is_unread(),
            on_click: None,
        }
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl gpui::RenderOnce for NotificationRow {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let hover_background = theme.accent;

        div()
            .id(self.id)
            .w_full()
            .flex()
            .items_start()
            .gap_2()
            .px_3()
            .py_2()
            .rounded_md()
            .cursor_pointer()
            .when(self.unread, |this| this.bg(theme.muted))
            .hover(move |style| style.bg(hover_background))
            .child(
                div()
                    .mt_1()
                    .size_2()
                    .flex_none()
                    .rounded_full()
                    .when(self.unread, |this| this.bg(theme.primary)),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_sm()
                            .when(self.unread, |this| this.font_semibold())
                            .child(self.text),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.muted_foreground)
                            .child(self.timesince),
                    ),
            )
            .when_some(self.on_click, |this, handler| {
                this.on_click(move |event, window, cx| handler(event, window, cx))
            })
    }
}
