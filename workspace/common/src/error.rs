use thiserror::Error;

/// Failure of a call to the heat-risk API.
///
/// Transport errors, non-success HTTP statuses and undecodable bodies all
/// collapse into this single kind; callers only ever log it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl ApiError {
    pub fn request_failed(detail: impl Into<String>) -> Self {
        Self::RequestFailed(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = ApiError::request_failed("HTTP error: 503");
        assert_eq!(err.to_string(), "Request failed: HTTP error: 503");
    }
}
