use std::fmt;

/// Custom error type for spinix operations
#[derive(Debug)]
pub enum SpinixError {
    /// A theme must hold at least one frame
    EmptyTheme,
    /// Theme name is not in the registry
    UnknownTheme(String),
    /// Progress bar style name is not a known preset
    UnknownStyle(String),
    /// Writing to the terminal failed
    Io(String),
    /// JSON serialization error
    Json(String),
}

impl fmt::Display for SpinixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinixError::EmptyTheme => write!(f, "Theme must contain at least one frame"),
            SpinixError::UnknownTheme(name) => write!(f, "Unknown spinner theme '{}'", name),
            SpinixError::UnknownStyle(name) => {
                write!(f, "Unknown progress bar style '{}'", name)
            }
            SpinixError::Io(msg) => write!(f, "I/O error: {}", msg),
            SpinixError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for SpinixError {}

impl From<std::io::Error> for SpinixError {
    fn from(err: std::io::Error) -> Self {
        SpinixError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpinixError {
    fn from(err: serde_json::Error) -> Self {
        SpinixError::Json(err.to_string())
    }
}

/// Result type alias for spinix operations
pub type Result<T> = std::result::Result<T, SpinixError>;
