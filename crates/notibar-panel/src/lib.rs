//! Read-state and visibility transitions of the notification panel.
//!
//! [`NotificationPanel`] owns everything the notification bar displays: the
//! rendered lists, the unread badge, the dropdown visibility and the
//! visibility of the "mark all" affordance. It performs no I/O. Marking is
//! split in two steps:
//! - a click produces a [`MarkRequest`] that the caller posts to the server;
//! - the response body is handed back to [`NotificationPanel::apply_response`],
//!   which only mutates state when the body is exactly `marked`.
//!
//! All transitions run on the thread that owns the panel, so responses that
//! complete out of order are applied one at a time.

pub mod badge;
pub mod click;
pub mod list;

use notibar_bridge::{
    mark::{self, MarkKind, MarkRequest},
    page::NotificationPage,
};

pub use crate::badge::UnreadBadge;
pub use crate::click::{ClickOutcome, ClickTarget};
pub use crate::list::{NotificationItem, NotificationList};

/// Index of the list whose unread items are subtracted on a bulk mark.
pub const PRIMARY_LIST: usize = 0;

/// Errors raised while building a panel from a notification page.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PanelError {
    /// A notification group has no form action to post to.
    #[error("notification list {list} has an empty form action")]
    EmptyAction { list: usize },
    /// The same identifier is rendered twice inside one list.
    #[error("notification list {list} contains item {id:?} more than once")]
    DuplicateItem { list: usize, id: String },
}

/// Result of applying a mark response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The body was not `marked` or the target no longer exists.
    Ignored,
    /// The request was confirmed. `marked` items flipped from unread to read
    /// and the badge moved by `decremented`.
    Marked { marked: usize, decremented: i64 },
}

/// State of the notification bar.
#[derive(Debug, Clone)]
pub struct NotificationPanel {
    lists: Vec<NotificationList>,
    badge: UnreadBadge,
    visible: bool,
    bulk_action_visible: bool,
    next_sequence: u64,
}

impl NotificationPanel {
    /// Builds the panel from the page rendered by the server.
    ///
    /// The panel starts hidden and the bulk affordance is hidden right away
    /// when nothing is unread.
    pub fn initialize(page: NotificationPage) -> Result<Self, PanelError> {
        let lists = page
            .groups
            .into_iter()
            .enumerate()
            .map(|(index, group)| NotificationList::from_group(index, group))
            .collect::<Result<Vec<_>, _>>()?;

        let mut panel = Self {
            lists,
            badge: UnreadBadge::new(page.unread_amount),
            visible: false,
            bulk_action_visible: true,
            next_sequence: 0,
        };
        panel.refresh_bulk_action_visibility();

        log::debug!(
            "Initialized panel with {} list(s), {} unread rendered, badge at {}",
            panel.lists.len(),
            panel.unread_count(),
            panel.badge.count()
        );
        Ok(panel)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn badge(&self) -> UnreadBadge {
        self.badge
    }

    pub fn lists(&self) -> &[NotificationList] {
        &self.lists
    }

    pub fn list(&self, index: usize) -> Option<&NotificationList> {
        self.lists.get(index)
    }

    pub fn is_bulk_action_visible(&self) -> bool {
        self.bulk_action_visible
    }

    /// Unread items across every rendered list.
    pub fn unread_count(&self) -> usize {
        self.lists.iter().map(NotificationList::unread_count).sum()
    }

    /// Flips the panel visibility and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Hides the panel for a click that reached the window root. Returns
    /// `true` if the panel was open.
    pub fn close_on_outside_click(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Routes a click the way it bubbles through the window.
    ///
    /// Clicks on panel content are ignored while the panel is hidden since
    /// nothing inside it can be hit.
    pub fn handle_click(&mut self, target: ClickTarget) -> ClickOutcome {
        if target.is_inside_panel() && !self.visible {
            return ClickOutcome::Ignored;
        }

        let outcome = match &target {
            ClickTarget::ToggleButton => ClickOutcome::Toggled {
                visible: self.toggle(),
            },
            ClickTarget::Item { list, item_id } => self
                .mark_single(*list, item_id)
                .map_or(ClickOutcome::Ignored, ClickOutcome::Request),
            ClickTarget::BulkButton { list } if self.bulk_action_visible => self
                .mark_all(*list)
                .map_or(ClickOutcome::Ignored, ClickOutcome::Request),
            ClickTarget::BulkButton { .. } | ClickTarget::PanelBody => ClickOutcome::Ignored,
            ClickTarget::Outside => ClickOutcome::Ignored,
        };

        if target.reaches_root() && self.close_on_outside_click() {
            return ClickOutcome::Closed;
        }
        outcome
    }

    /// Builds the request for clicking item `item_id` of list `list`.
    ///
    /// Returns `None`, and leaves everything untouched, when the item is read
    /// or unknown. The item itself stays unread until the server confirms.
    pub fn mark_single(&mut self, list: usize, item_id: &str) -> Option<MarkRequest> {
        let notification_list = self.lists.get(list)?;
        if !notification_list.item(item_id)?.is_unread() {
            return None;
        }

        let (action, csrf_token) = (
            notification_list.action().to_owned(),
            notification_list.csrf_token().to_owned(),
        );
        Some(MarkRequest {
            sequence: self.next_sequence(),
            action,
            csrf_token,
            kind: MarkKind::Single {
                list,
                item_id: item_id.to_owned(),
            },
        })
    }

    /// Builds the bulk request of list `list`. Nothing being unread is fine;
    /// only an unknown list yields `None`.
    pub fn mark_all(&mut self, list: usize) -> Option<MarkRequest> {
        let notification_list = self.lists.get(list)?;
        let (action, csrf_token, token) = (
            notification_list.action().to_owned(),
            notification_list.csrf_token().to_owned(),
            notification_list.bulk_token().to_owned(),
        );
        Some(MarkRequest {
            sequence: self.next_sequence(),
            action,
            csrf_token,
            kind: MarkKind::Bulk { list, token },
        })
    }

    /// Applies the server's answer to `request`.
    ///
    /// Anything but the exact `marked` literal is dropped without a trace in
    /// the UI.
    pub fn apply_response(&mut self, request: &MarkRequest, body: &str) -> MarkOutcome {
        if !mark::is_marked(body) {
            log::debug!(
                "Ignoring response to request #{}: {body:?}",
                request.sequence
            );
            return MarkOutcome::Ignored;
        }

        let outcome = match &request.kind {
            MarkKind::Single { list, item_id } => {
                let flipped = self
                    .lists
                    .get_mut(*list)
                    .and_then(|list| list.item_mut(item_id))
                    .is_some_and(NotificationItem::mark_read);

                if flipped {
                    self.badge.decrement_by(1);
                    MarkOutcome::Marked {
                        marked: 1,
                        decremented: 1,
                    }
                } else {
                    MarkOutcome::Ignored
                }
            }
            MarkKind::Bulk { .. } => {
                // only the primary list is tracked by the badge, every list
                // loses its unread markers though
                let decremented = self
                    .lists
                    .get(PRIMARY_LIST)
                    .map_or(0, NotificationList::unread_count) as i64;
                let marked = self
                    .lists
                    .iter_mut()
                    .map(NotificationList::mark_all_read)
                    .sum();

                self.badge.decrement_by(decremented);
                MarkOutcome::Marked {
                    marked,
                    decremented,
                }
            }
        };

        self.refresh_bulk_action_visibility();
        outcome
    }

    /// Hides the bulk affordance once no unread item is left. It is never
    /// shown again without a new page.
    pub fn refresh_bulk_action_visibility(&mut self) {
        if self.unread_count() == 0 {
            self.bulk_action_visible = false;
        }
    }

    fn next_sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }
}
