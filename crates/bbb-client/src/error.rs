//! Error types for the client.
//!
//! Every failure surfaces to the immediate caller. The client performs no
//! retries and no fallback transport, so each variant maps onto exactly one
//! failing stage of a call: parameter validation, the HTTP exchange, or
//! response decoding.

use thiserror::Error;

/// Errors produced while building, sending or decoding an API request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A parameter required by the operation is absent or blank.
    ///
    /// Raised before any network action is taken.
    #[error("Missing required parameter: {name}")]
    MissingParameter {
        /// Name of the absent parameter.
        name: &'static str,
    },

    /// Client configuration is invalid or incomplete.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No usable transport: the HTTP client could not be built, the
    /// request could not be sent, or the response body never arrived.
    #[error("Transport unavailable: {0}")]
    TransportUnavailable(String),

    /// The server answered with no payload at all.
    #[error("Server returned an empty response")]
    EmptyResponse,

    /// The response payload is not a well-formed XML document.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type alias using [`ApiError`].
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_display() {
        let err = ApiError::MissingParameter { name: "meetingId" };
        assert_eq!(err.to_string(), "Missing required parameter: meetingId");
    }

    #[test]
    fn test_transport_unavailable_display() {
        let err = ApiError::TransportUnavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Transport unavailable: connection refused");
    }

    #[test]
    fn test_empty_response_display() {
        assert_eq!(
            ApiError::EmptyResponse.to_string(),
            "Server returned an empty response"
        );
    }

    #[test]
    fn test_malformed_response_display() {
        let err = ApiError::MalformedResponse("unexpected end of document".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed response: unexpected end of document"
        );
    }

    #[test]
    fn test_configuration_display() {
        let err =
            ApiError::Configuration("missing environment variable: BBB_SERVER_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: missing environment variable: BBB_SERVER_URL"
        );
    }
}
