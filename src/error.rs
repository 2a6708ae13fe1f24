use std::fmt;

/// Custom error type for Ambassador admin operations
#[derive(Debug)]
pub enum AmbError {
    /// HTTP request failed (transport-level: connect, timeout, TLS)
    Http(reqwest::Error),
    /// Endpoint returned an error response
    Api { status: u16, message: String },
    /// Response body did not have the expected shape
    Parse(String),
    /// Interactive prompt failed (terminal gone, read error)
    Prompt(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for AmbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmbError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AmbError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AmbError::Parse(msg) => write!(f, "Unexpected response shape: {}", msg),
            AmbError::Prompt(msg) => write!(f, "Prompt error: {}", msg),
            AmbError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AmbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AmbError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AmbError {
    fn from(err: reqwest::Error) -> Self {
        AmbError::Http(err)
    }
}

impl From<serde_json::Error> for AmbError {
    fn from(err: serde_json::Error) -> Self {
        AmbError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for AmbError {
    fn from(err: std::io::Error) -> Self {
        AmbError::Prompt(err.to_string())
    }
}

impl From<dialoguer::Error> for AmbError {
    fn from(err: dialoguer::Error) -> Self {
        AmbError::Prompt(err.to_string())
    }
}

/// Result type alias for Ambassador admin operations
pub type Result<T> = std::result::Result<T, AmbError>;
