use crate::Error;
use serde::Serialize;

/// Stable error body returned for every failure.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Error> for ErrorEnvelope {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
            code: Some(err.code().to_string()),
            details: err.details(),
        }
    }
}
