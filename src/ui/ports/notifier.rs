//! Blocking user notification port.

/// Shows a message the user must acknowledge.
pub trait UserNotifier {
    /// Presents `message` to the user.
    fn alert(&self, message: &str);
}
