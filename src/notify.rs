//! Blocking user alerts.

use std::fmt::Display;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Logs a failed action and tells the operator with a blocking alert.
pub fn failure(action: &str, err: &impl Display, message: &str) {
    log::error!("error {}: {}", action, err);
    alert(message);
}
