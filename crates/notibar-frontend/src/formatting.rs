/// Text of the badge. The counter is shown exactly as computed, negative
/// values included.
pub fn format_badge(count: i64) -> String {
    count.to_string()
}

/// Header line of the dropdown summarizing the rendered unread items.
pub fn format_unread_summary(unread: usize) -> String {
    match unread {
        0 => "No unread notifications".to_owned(),
        1 => "1 unread notification".to_owned(),
        n => format!("{n} unread notifications"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_is_not_clamped() {
        assert_eq!(format_badge(3), "3");
        assert_eq!(format_badge(-1), "-1");
    }

    #[test]
    fn summary_pluralizes() {
        assert_eq!(format_unread_summary(0), "No unread notifications");
        assert_eq!(format_unread_summary(1), "1 unread notification");
        assert_eq!(format_unread_summary(12), "12 unread notifications");
    }
}
