//! Schema of the notification page served at load time.
//!
//! The page carries everything the panel needs to start: the server-side
//! unread total for the badge and one group per rendered notification form.

use serde::{Deserialize, Serialize};

/// A single notification as rendered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationEntry {
    /// Opaque identifier sent back as the `single_mark` value.
    pub id: String,
    /// Display text of the notification.
    #[serde(default)]
    pub text: String,
    /// Human readable age, e.g. "5 minutes ago".
    #[serde(default)]
    pub timesince: String,
    /// Whether the user has not seen this notification yet.
    pub unread: bool,
}

/// One notification form: a list of entries plus the form data needed to
/// post mark requests for them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationGroup {
    /// The form's action URL, absolute or relative to the page URL.
    pub action: String,
    /// Value of the hidden CSRF field of the form.
    pub csrf_token: String,
    /// Value of the bulk mark button. Derived from the unread entries when
    /// the server leaves it out.
    #[serde(default)]
    pub bulk_mark: Option<String>,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<NotificationEntry>,
}

impl NotificationGroup {
    /// Returns the token posted by the bulk mark button.
    ///
    /// Falls back to the server's own format: unread ids joined by `", "`
    /// with a trailing separator. Only entries kept by
    /// [`NotificationPage::truncate`] contribute, like the server template.
    pub fn bulk_token(&self) -> String {
        match &self.bulk_mark {
            Some(token) => token.clone(),
            None => self
                .items
                .iter()
                .filter(|entry| entry.unread)
                .map(|entry| format!("{}, ", entry.id))
                .collect(),
        }
    }
}

/// The notification page of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationPage {
    /// Total amount of unread notifications on the server. Can exceed the
    /// amount of rendered entries.
    pub unread_amount: i64,
    /// Rendered groups. The first one is the primary group.
    #[serde(default)]
    pub groups: Vec<NotificationGroup>,
}

impl NotificationPage {
    /// Keeps at most `amount` entries in every group.
    pub fn truncate(&mut self, amount: usize) {
        for group in &mut self.groups {
            group.items.truncate(amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, unread: bool) -> NotificationEntry {
        NotificationEntry {
            id: id.to_owned(),
            text: String::new(),
            timesince: String::new(),
            unread,
        }
    }

    #[test]
    fn bulk_token_derived_from_unread_entries() {
        let group = NotificationGroup {
            action: "/mark/".to_owned(),
            csrf_token: "token".to_owned(),
            bulk_mark: None,
            items: vec![entry("2", true), entry("3", false), entry("4", true)],
        };
        assert_eq!(group.bulk_token(), "2, 4, ");
    }

    #[test]
    fn bulk_token_prefers_server_value() {
        let group = NotificationGroup {
            action: "/mark/".to_owned(),
            csrf_token: "token".to_owned(),
            bulk_mark: Some("7, ".to_owned()),
            items: vec![entry("2", true)],
        };
        assert_eq!(group.bulk_token(), "7, ");
    }

    #[test]
    fn page_deserializes_with_optional_fields_missing() {
        let page: NotificationPage = serde_json::from_str(
            r#"{
                "unread_amount": 12,
                "groups": [
                    {
                        "action": "/notifications/mark/",
                        "csrf_token": "abc",
                        "items": [{ "id": "1", "unread": true }]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.unread_amount, 12);
        assert_eq!(page.groups[0].bulk_mark, None);
        assert_eq!(page.groups[0].items[0], entry("1", true));
    }

    #[test]
    fn derived_bulk_token_covers_only_kept_entries() {
        let mut page = NotificationPage {
            unread_amount: 3,
            groups: vec![NotificationGroup {
                action: "/mark/".to_owned(),
                csrf_token: "token".to_owned(),
                bulk_mark: None,
                items: vec![entry("1", true), entry("2", true), entry("3", true)],
            }],
        };

        page.truncate(2);
        assert_eq!(page.groups[0].bulk_token(), "1, 2, ");
    }

    #[test]
    fn truncate_limits_every_group() {
        let group = NotificationGroup {
            action: "/mark/".to_owned(),
            csrf_token: "token".to_owned(),
            bulk_mark: None,
            items: (0..10).map(|i| entry(&i.to_string(), true)).collect(),
        };
        let mut page = NotificationPage {
            unread_amount: 20,
            groups: vec![group.clone(), group],
        };

        page.truncate(8);
        assert!(page.groups.iter().all(|group| group.items.len() == 8));
        assert_eq!(page.unread_amount, 20);
    }
}
