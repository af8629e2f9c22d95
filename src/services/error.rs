use thiserror::Error;

use crate::utils::ERROR_PREFIX;

/// Failure of a backend or asset request.
///
/// The UI never branches on the variant; everything collapses into one
/// display string through [`ApiError::status_text`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request build error: {0}")]
    Request(String),

    #[error("{0}")]
    Network(String),

    #[error("Request failed with status code {status}")]
    Http { status: u16, message: Option<String> },

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Navigation error: {0}")]
    Navigation(String),
}

impl ApiError {
    /// Server-supplied `error` field when there is one, otherwise the
    /// transport-level description.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Text shown in place of a status: `"Error: <message>"`.
    pub fn status_text(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self.display_message())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn server_error_field_wins() {
        let err = ApiError::Http {
            status: 404,
            message: Some("Sheet not found".to_string()),
        };
        assert_eq!(err.status_text(), "Error: Sheet not found");
    }

    #[test]
    fn http_without_body_uses_transport_description() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.status_text(), "Error: Request failed with status code 500");
    }

    #[test]
    fn network_error_is_passed_through() {
        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.status_text(), "Error: TypeError: Failed to fetch");
    }
}
