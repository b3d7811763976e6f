use thiserror::Error;

/// Failures of a single call against the document service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no authentication token found")]
    MissingToken,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("attached file has no {0}")]
    IncompleteFile(&'static str),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_body_text() {
        let err = ApiError::Status {
            status: 403,
            body: "Access Denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server responded with status 403: Access Denied"
        );
    }

    #[test]
    fn decode_error_wraps_serde_message() {
        let serde_err = serde_json::from_str::<Vec<String>>("[1, 2]").unwrap_err();
        let err = ApiError::from(serde_err);
        assert!(err.to_string().starts_with("unexpected response: "));
    }
}
