//! Browser Session
//!
//! The sign-in page leaves a bearer token and the operator's user id in
//! localStorage. They are read once at start-up and handed to the component
//! tree through [`crate::context::AppContext`].

/// localStorage key of the bearer token.
pub const TOKEN_KEY: &str = "tokenKey";
/// localStorage key of the signed-in employee's id.
pub const USER_ID_KEY: &str = "userId";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    /// Missing `window` or storage access yields an empty session.
    pub fn load() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        let Some(storage) = storage else {
            log::warn!("localStorage unavailable; continuing without a session");
            return Self::default();
        };
        let read = |key: &str| normalize(storage.get_item(key).ok().flatten());
        let session = Self {
            token: read(TOKEN_KEY),
            user_id: read(USER_ID_KEY),
        };
        if session.token.is_none() {
            log::warn!("no bearer token under '{}'", TOKEN_KEY);
        }
        session
    }

    /// Numeric employee id used in save/update payloads.
    pub fn employee_id(&self) -> Option<u64> {
        self.user_id.as_deref().and_then(|id| id.parse().ok())
    }
}

/// JS callers sometimes store the literal strings "null"/"undefined".
fn normalize(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "null" && v != "undefined")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_placeholder_values() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("".into())), None);
        assert_eq!(normalize(Some("null".into())), None);
        assert_eq!(normalize(Some("undefined".into())), None);
        assert_eq!(normalize(Some(" 17 ".into())), Some("17".to_string()));
    }

    #[test]
    fn employee_id_parses_numeric_user_id() {
        let session = Session {
            token: Some("t".into()),
            user_id: Some("17".into()),
        };
        assert_eq!(session.employee_id(), Some(17));

        let odd = Session {
            token: None,
            user_id: Some("u-17".into()),
        };
        assert_eq!(odd.employee_id(), None);
    }
}
