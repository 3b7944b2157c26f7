//! Turning validation failures into user notifications.
//!
//! Reporting is the terminal sink for a [`ValidationError`]: it emits one
//! message and stops. Codes that arrive as strings (from a script, an editor
//! bridge, an older client) may not name a known kind; those produce no
//! notification at all rather than an error.

use crate::error::ValidationError;

/// Name prefixed to every notification.
pub const TOOL_NAME: &str = "Comment Divider";

/// Something that can show an informational message to the user.
pub trait Notifier {
    /// Display `message`.
    fn show_information(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn show_information(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// The notification text for `err`.
pub fn notification(err: &ValidationError) -> String {
    format!("{TOOL_NAME}: {err}")
}

/// The notification text for an error code, or `None` if the code is unknown.
pub fn notification_for_code(code: &str) -> Option<String> {
    code.parse::<ValidationError>()
        .ok()
        .map(|err| notification(&err))
}

/// Show the notification for `err`.
pub fn report<N: Notifier + ?Sized>(notifier: &mut N, err: &ValidationError) {
    tracing::debug!(code = err.code(), "reporting validation failure");
    notifier.show_information(&notification(err));
}

/// Show the notification for `code`. Unknown codes are dropped silently.
pub fn report_code<N: Notifier + ?Sized>(notifier: &mut N, code: &str) {
    match notification_for_code(code) {
        Some(message) => notifier.show_information(&message),
        None => tracing::debug!(code, "ignoring unmapped error code"),
    }
}
