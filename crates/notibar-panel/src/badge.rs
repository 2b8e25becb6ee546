/// The unread counter shown on the toggle button.
///
/// The count starts at the server's unread total and only moves through
/// [`UnreadBadge::decrement_by`]. It is not clamped: if the server total was
/// lower than the rendered unread items the displayed value goes negative,
/// the same way the page shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnreadBadge {
    count: i64,
    emphasized: bool,
}

impl UnreadBadge {
    /// Creates a badge showing `count`, emphasized when it is positive.
    pub fn new(count: i64) -> Self {
        Self {
            count,
            emphasized: count > 0,
        }
    }

    /// The displayed value.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Whether the "has unread items" emphasis is shown.
    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }

    /// Subtracts `amount` and drops the emphasis once the result is `<= 0`.
    /// The emphasis is never restored.
    pub fn decrement_by(&mut self, amount: i64) {
        self.count -= amount;
        if self.count <= 0 {
            self.emphasized = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_follows_initial_count() {
        assert!(UnreadBadge::new(3).is_emphasized());
        assert!(!UnreadBadge::new(0).is_emphasized());
    }

    #[test]
    fn emphasis_cleared_at_zero() {
        let mut badge = UnreadBadge::new(2);
        badge.decrement_by(1);
        assert!(badge.is_emphasized());
        badge.decrement_by(1);
        assert_eq!(badge.count(), 0);
        assert!(!badge.is_emphasized());
    }

    #[test]
    fn not_clamped() {
        let mut badge = UnreadBadge::new(1);
        badge.decrement_by(3);
        assert_eq!(badge.count(), -2);
        assert!(!badge.is_emphasized());
    }

    #[test]
    fn zero_decrement_keeps_badge() {
        let mut badge = UnreadBadge::new(4);
        badge.decrement_by(0);
        assert_eq!(badge, UnreadBadge::new(4));
    }
}
