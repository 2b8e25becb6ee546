use gpui::{InteractiveElement, IntoElement, ParentElement, Styled, div, prelude::FluentBuilder};
use gpui_component::{ActiveTheme, StyledExt};
use notibar_panel::UnreadBadge;

use crate::formatting::format_badge;

/// The unread counter attached to the notification button.
#[derive(IntoElement)]
pub struct CountBadge {
    badge: UnreadBadge,
}

impl CountBadge {
    pub fn new(badge: UnreadBadge) -> Self {
        Self { badge }
    }
}

impl gpui::RenderOnce for CountBadge {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .id("notification-badge")
            .px_2()
            .rounded_full()
            .text_xs()
            .font_semibold()
            .when_else(
                self.badge.is_emphasized(),
                |this| this.bg(theme.danger).text_color(theme.danger_foreground),
                |this| this.bg(theme.muted).text_color(theme.muted_foreground),
            )
            .child(format_badge(self.badge.count()))
    }
}
