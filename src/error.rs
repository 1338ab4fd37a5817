use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Error type shared by every sample
// =============================================================================

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Native integer overflow: {lhs} + {rhs}")]
    Overflow { lhs: isize, rhs: isize },

    #[error("Unknown sample: '{0}'")]
    UnknownSample(String),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid JSON sample: {0}")]
    Json(#[from] serde_json::Error),
}

impl SampleError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type SampleResult<T> = Result<T, SampleError>;
