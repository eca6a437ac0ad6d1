use std::fmt;

/// Conversion error types
#[derive(Debug)]
pub enum ConvertError {
    /// The input image could not be decoded
    ImageDecode(image::ImageError),

    /// Conversion options rejected up front
    InvalidOptions(String),

    /// Asset or material catalog does not hold exactly one entry
    InvalidCatalog(String),

    /// A computed position does not fit the save format's integer range
    EncodingOverflow { axis: &'static str, value: i64 },

    /// The serialization backend rejected the assembled save
    Serialization(String),

    /// A background mapping task panicked or was cancelled
    TaskFailed(tokio::task::JoinError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            ConvertError::InvalidOptions(msg) => write!(f, "Invalid options: {}", msg),
            ConvertError::InvalidCatalog(msg) => write!(f, "Invalid catalog: {}", msg),
            ConvertError::EncodingOverflow { axis, value } => {
                write!(
                    f,
                    "Position {} on the {} axis exceeds the save format's integer range",
                    value, axis
                )
            }
            ConvertError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ConvertError::TaskFailed(e) => write!(f, "Conversion task failed: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::ImageDecode(e) => Some(e),
            ConvertError::TaskFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        ConvertError::ImageDecode(err)
    }
}

impl From<tokio::task::JoinError> for ConvertError {
    fn from(err: tokio::task::JoinError) -> Self {
        ConvertError::TaskFailed(err)
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
