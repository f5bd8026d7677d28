//! Transport error categories

use std::collections::BTreeMap;
use thiserror::Error;

use super::responses::ErrorBody;

/// Failure of a request against the timer resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// The backend rejected the submitted fields
    #[error("validation rejected: {}", join_messages(.messages))]
    Validation { messages: BTreeMap<String, String> },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("service unavailable")]
    Unavailable,

    #[error("server error: {0}")]
    Server(String),

    #[error("unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },

    /// A success response whose body could not be read as a timer
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response by status code and error body
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = ErrorBody::parse(body);

        match status {
            400 => {
                let messages = match (body.messages, body.message) {
                    (Some(messages), _) if !messages.is_empty() => messages,
                    (_, Some(message)) => BTreeMap::from([("message".to_string(), message)]),
                    _ => BTreeMap::new(),
                };
                ApiError::Validation { messages }
            }
            404 => ApiError::NotFound(body.message.unwrap_or_else(|| "Timer not found".to_string())),
            503 => ApiError::Unavailable,
            500 => ApiError::Server(body.message.unwrap_or_else(|| "Unexpected error occurred.".to_string())),
            _ => ApiError::Unexpected {
                status,
                message: body.message.unwrap_or_else(|| "Please try again.".to_string()),
            },
        }
    }

    /// Whether the backend confirmed that no timer exists
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unreachable(_) => {
                "Cannot connect to server. Please check your network or try again later.".to_string()
            }
            ApiError::Validation { messages } => format!("Validation Error: {}", join_messages(messages)),
            ApiError::NotFound(message) => message.clone(),
            ApiError::Unavailable => "Service unavailable. Try again later.".to_string(),
            ApiError::Server(message) => format!("Server Error: {}", message),
            ApiError::Unexpected { message, .. } => format!("Unexpected error: {}", message),
            ApiError::Decode(_) => "Unexpected response from server.".to_string(),
        }
    }
}

fn join_messages(messages: &BTreeMap<String, String>) -> String {
    if messages.is_empty() {
        return "request rejected".to_string();
    }
    messages
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_messages_become_validation_error() {
        let body = r#"{"status":400,"error":"Validation Failed","path":"/api/timer",
            "messages":{"name":"Counter name must be 2–32 characters","targetDate":"Target date/time must be in the future"}}"#;

        let err = ApiError::from_response(400, body);
        let ApiError::Validation { messages } = &err else {
            panic!("expected validation error, got {:?}", err);
        };
        assert_eq!(messages.len(), 2);
        assert_eq!(
            err.user_message(),
            "Validation Error: name: Counter name must be 2–32 characters, targetDate: Target date/time must be in the future"
        );
    }

    #[test]
    fn bad_request_with_single_message() {
        let err = ApiError::from_response(400, r#"{"message":"Malformed JSON"}"#);
        assert_eq!(err.user_message(), "Validation Error: message: Malformed JSON");
    }

    #[test]
    fn not_found_keeps_backend_message() {
        let err = ApiError::from_response(404, r#"{"status":404,"message":"No timer found."}"#);
        assert_eq!(err, ApiError::NotFound("No timer found.".to_string()));
        assert!(err.is_not_found());

        let bare = ApiError::from_response(404, "");
        assert_eq!(bare.user_message(), "Timer not found");
    }

    #[test]
    fn remaining_statuses_are_classified() {
        assert_eq!(ApiError::from_response(503, "{}"), ApiError::Unavailable);
        assert_eq!(
            ApiError::from_response(500, r#"{"message":"boom"}"#).user_message(),
            "Server Error: boom"
        );
        assert_eq!(
            ApiError::from_response(418, "<html>teapot</html>"),
            ApiError::Unexpected { status: 418, message: "Please try again.".to_string() }
        );
        assert!(!ApiError::Unavailable.is_not_found());
    }
}
