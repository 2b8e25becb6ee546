use std::collections::HashSet;

use notibar_bridge::page::{NotificationEntry, NotificationGroup};

use crate::PanelError;

/// Read state of a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadState {
    Unread,
    Read,
}

/// A notification rendered in one of the panel's lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    id: String,
    text: String,
    timesince: String,
    state: ReadState,
}

impl NotificationItem {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timesince(&self) -> &str {
        &self.timesince
    }

    pub fn is_unread(&self) -> bool {
        self.state == ReadState::Unread
    }

    /// Flips the item to read. Returns `false` if it already was.
    pub(crate) fn mark_read(&mut self) -> bool {
        let was_unread = self.is_unread();
        self.state = ReadState::Read;
        was_unread
    }
}

impl From<NotificationEntry> for NotificationItem {
    fn from(entry: NotificationEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
            timesince: entry.timesince,
            state: if entry.unread {
                ReadState::Unread
            } else {
                ReadState::Read
            },
        }
    }
}

/// A rendered notification form: its items and the data posted with every
/// mark request issued from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationList {
    action: String,
    csrf_token: String,
    bulk_token: String,
    items: Vec<NotificationItem>,
}

impl NotificationList {
    pub(crate) fn from_group(index: usize, group: NotificationGroup) -> Result<Self, PanelError> {
        if group.action.trim().is_empty() {
            return Err(PanelError::EmptyAction { list: index });
        }

        let mut seen = HashSet::with_capacity(group.items.len());
        for entry in &group.items {
            if !seen.insert(entry.id.as_str()) {
                return Err(PanelError::DuplicateItem {
                    list: index,
                    id: entry.id.clone(),
                });
            }
        }

        let bulk_token = group.bulk_token();
        Ok(Self {
            action: group.action,
            csrf_token: group.csrf_token,
            bulk_token,
            items: group.items.into_iter().map(NotificationItem::from).collect(),
        })
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    pub fn bulk_token(&self) -> &str {
        &self.bulk_token
    }

    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&NotificationItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn item_mut(&mut self, id: &str) -> Option<&mut NotificationItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_unread()).count()
    }

    /// Flips every item to read and returns how many were unread.
    pub(crate) fn mark_all_read(&mut self) -> usize {
        self.items
            .iter_mut()
            .map(NotificationItem::mark_read)
            .filter(|changed| *changed)
            .count()
    }
}
