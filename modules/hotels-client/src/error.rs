use thiserror::Error;

pub type Result<T> = std::result::Result<T, HotelsApiError>;

#[derive(Debug, Error)]
pub enum HotelsApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid header value: {0}")]
    Header(String),
}

impl From<reqwest::Error> for HotelsApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            HotelsApiError::Parse(err.to_string())
        } else {
            HotelsApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HotelsApiError {
    fn from(err: serde_json::Error) -> Self {
        HotelsApiError::Parse(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for HotelsApiError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        HotelsApiError::Header(err.to_string())
    }
}
