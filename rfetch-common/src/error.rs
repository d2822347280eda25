use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RfetchError {
    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("API Error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

impl RfetchError {
    /// The textual message of the failure, uniform across variants. For
    /// `Api` this is exactly the `message` field extracted from the remote
    /// error envelope; for the transport and parse variants it is the
    /// underlying library's own diagnostic, unmodified.
    pub fn message(&self) -> String {
        match self {
            RfetchError::Http(e) => e.to_string(),
            RfetchError::Json(e) => e.to_string(),
            RfetchError::Api { message, .. } => message.clone(),
            RfetchError::Config(msg) | RfetchError::Validation(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for RfetchError {
    fn from(err: reqwest::Error) -> Self {
        RfetchError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for RfetchError {
    fn from(err: serde_json::Error) -> Self {
        RfetchError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, RfetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_is_the_envelope_message_verbatim() {
        let err = RfetchError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.message(), "Not Found");
        assert_eq!(err.to_string(), "API Error (404): Not Found");
    }

    #[test]
    fn json_message_is_the_decoder_diagnostic() {
        let parse_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let expected = parse_err.to_string();
        let err = RfetchError::from(parse_err);
        assert_eq!(err.message(), expected);
    }
}
