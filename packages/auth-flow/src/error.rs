//! Error taxonomy for the auth flows.
//!
//! Every error here is recoverable: a failed step leaves its wizard in the
//! pre-call state and the error is surfaced for display. Nothing is fatal
//! to the process.

use matchbook_client::ClientError;
use thiserror::Error;

/// Result type for flow operations.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Flow errors.
///
/// `Rejected` displays the backend-supplied reason verbatim so the UI can
/// show exactly what the server said (e.g. `"Invalid OTP"`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Local precondition failure; never reaches the network
    #[error("{0}")]
    Validation(String),

    /// Transport failure, no response from the backend
    #[error("Network error: {0}")]
    Network(String),

    /// The backend explicitly rejected the request
    #[error("{0}")]
    Rejected(String),

    /// The response succeeded but violated protocol expectations
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<ClientError> for FlowError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(e) => FlowError::Network(e.to_string()),
            ClientError::Api { message, .. } => FlowError::Rejected(message),
            ClientError::Parse(msg) => FlowError::UnexpectedResponse(msg),
            ClientError::Config(msg) => FlowError::Validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_backend_text_verbatim() {
        let err = FlowError::Rejected("Invalid OTP".to_string());
        assert_eq!(err.to_string(), "Invalid OTP");
    }

    #[test]
    fn test_api_error_maps_to_rejected() {
        let err: FlowError = ClientError::Api {
            status: 401,
            message: "No user exists with this email, try register.".to_string(),
        }
        .into();
        assert_eq!(
            err,
            FlowError::Rejected("No user exists with this email, try register.".to_string())
        );
    }

    #[test]
    fn test_parse_error_maps_to_unexpected_response() {
        let err: FlowError = ClientError::Parse("bad shape".to_string()).into();
        assert!(matches!(err, FlowError::UnexpectedResponse(_)));
    }
}
