//! Wire types of the mark endpoint.

/// Form field carrying the identifier of a single notification.
pub const SINGLE_MARK_FIELD: &str = "single_mark";

/// Form field carrying the bulk mark token.
pub const BULK_MARK_FIELD: &str = "bulk_mark";

/// Form field carrying the anti-forgery token.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// The only response body the endpoint uses to signal success.
pub const MARKED_RESPONSE: &str = "marked";

/// Returns `true` when `body` is exactly the success literal.
pub fn is_marked(body: &str) -> bool {
    body == MARKED_RESPONSE
}

/// What a mark request asks the server to mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkKind {
    /// A single notification of list `list`.
    Single { list: usize, item_id: String },
    /// Every unread notification of list `list`.
    Bulk { list: usize, token: String },
}

/// A form post to a notification form's action URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkRequest {
    /// Sequence number assigned by the panel, echoed in the response.
    pub sequence: u64,
    /// The form's action URL as rendered by the server.
    pub action: String,
    /// Value of the form's CSRF field.
    pub csrf_token: String,
    /// Target of the request.
    pub kind: MarkKind,
}

impl MarkRequest {
    /// URL-encodable form fields of the request body.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        let target = match &self.kind {
            MarkKind::Single { item_id, .. } => (SINGLE_MARK_FIELD, item_id.as_str()),
            MarkKind::Bulk { token, .. } => (BULK_MARK_FIELD, token.as_str()),
        };
        [target, (CSRF_FIELD, self.csrf_token.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_request_fields() {
        let request = MarkRequest {
            sequence: 1,
            action: "/mark/".to_owned(),
            csrf_token: "secret".to_owned(),
            kind: MarkKind::Single {
                list: 0,
                item_id: "42".to_owned(),
            },
        };
        assert_eq!(
            request.form_fields(),
            [("single_mark", "42"), ("csrfmiddlewaretoken", "secret")]
        );
    }

    #[test]
    fn bulk_request_fields() {
        let request = MarkRequest {
            sequence: 2,
            action: "/mark/".to_owned(),
            csrf_token: "secret".to_owned(),
            kind: MarkKind::Bulk {
                list: 1,
                token: "1, 2, ".to_owned(),
            },
        };
        assert_eq!(
            request.form_fields(),
            [("bulk_mark", "1, 2, "), ("csrfmiddlewaretoken", "secret")]
        );
    }

    #[test]
    fn only_exact_literal_is_success() {
        assert!(is_marked("marked"));
        assert!(!is_marked("marked\n"));
        assert!(!is_marked("Marked"));
        assert!(!is_marked("error"));
        assert!(!is_marked(""));
    }
}
