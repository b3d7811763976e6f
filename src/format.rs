//! Display helpers shared by the tables and the document modal.

use dms_api::{Category, CreatedOn};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_CATEGORY: &str = "No Category";

/// `dd/mm/yyyy`, or an empty string when the date is unknown.
pub fn format_date(created_on: Option<CreatedOn>) -> String {
    created_on
        .map(|c| format!("{:02}/{:02}/{:04}", c.day(), c.month(), c.year()))
        .unwrap_or_default()
}

pub fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

pub fn category_label(category: Option<&Category>) -> String {
    category
        .map(|c| c.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(NO_CATEGORY)
        .to_string()
}
