use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request body is not valid JSON")]
    InvalidJson,

    #[error("Field 'specs' is required and must be a non-empty string")]
    MissingSpecs,

    #[error("Field 'specs' must not exceed {max} characters")]
    SpecsTooLong { max: usize },

    #[error("Method not allowed. Allowed methods: POST, OPTIONS")]
    MethodNotAllowed,

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("The AI service returned no usable output")]
    EmptyUpstreamResponse,

    #[error("The AI service returned a response that could not be parsed as JSON")]
    MalformedAiJson { excerpt: String },

    #[error("The AI service returned an incomplete result: {detail}")]
    IncompleteAiResult { detail: String },

    #[error("The AI service returned an invalid price value for '{field}'")]
    InvalidPriceValue { field: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable machine-readable code carried in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIGURATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::MissingSpecs => "MISSING_SPECS",
            Self::SpecsTooLong { .. } => "SPECS_TOO_LONG",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::EmptyUpstreamResponse => "EMPTY_UPSTREAM_RESPONSE",
            Self::MalformedAiJson { .. } => "MALFORMED_AI_JSON",
            Self::IncompleteAiResult { .. } => "INCOMPLETE_AI_RESULT",
            Self::InvalidPriceValue { .. } => "INVALID_PRICE_VALUE",
            _ => "INTERNAL_ERROR",
        }
    }

    /// HTTP status the error maps to. Upstream failures propagate the
    /// upstream status code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson | Self::MissingSpecs | Self::SpecsTooLong { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Diagnostic detail exposed to the caller. Only server-side parsing
    /// failures carry one; validation failures never do.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::MalformedAiJson { excerpt } => Some(excerpt.clone()),
            _ => None,
        }
    }
}
