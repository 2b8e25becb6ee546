pub mod count_badge;
pub mod notification_row;
