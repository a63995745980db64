//! Proxy outcome and error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure outcomes of one proxied request.
///
/// The display strings are the exact plain-text bodies returned to callers.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The service name is not in the registry.
    #[error("Service or endpoint not found")]
    NotRegistered,

    /// The registered entry does not parse as an absolute URL with a host.
    #[error("Invalid target URL")]
    InvalidTargetUrl,

    /// A body-requiring method (POST/PUT/PATCH) arrived without a body.
    #[error("Request body is required for this method.")]
    MissingBody,

    /// The outbound call failed (connect error, broken transfer).
    #[error("Proxy error: {0}")]
    Forwarding(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::NotRegistered => StatusCode::NOT_FOUND,
            ProxyError::InvalidTargetUrl => StatusCode::BAD_REQUEST,
            ProxyError::MissingBody => StatusCode::BAD_REQUEST,
            ProxyError::Forwarding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_correctly() {
        assert_eq!(
            ProxyError::NotRegistered.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ProxyError::InvalidTargetUrl.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::MissingBody.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::Forwarding("connection refused".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_the_caller_visible_bodies() {
        assert_eq!(
            ProxyError::NotRegistered.to_string(),
            "Service or endpoint not found"
        );
        assert_eq!(ProxyError::InvalidTargetUrl.to_string(), "Invalid target URL");
        assert_eq!(
            ProxyError::MissingBody.to_string(),
            "Request body is required for this method."
        );
        assert_eq!(
            ProxyError::Forwarding("connection refused".into()).to_string(),
            "Proxy error: connection refused"
        );
    }
}
