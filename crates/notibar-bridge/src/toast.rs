/// Severity of a user-visible toast.
///
/// Toasts are only used for problems the user can act on, such as a page
/// that failed to load. Failed mark requests never produce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    /// Something the user should know about that does not block the panel.
    Warning,
    /// The panel could not be populated or a request could not be issued.
    Error,
}

/// A toast payload intended for the user interface.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// The severity of the toast, determining its visual style.
    pub toast_type: ToastType,
    /// The text content to display to the user.
    pub message: String,
}
