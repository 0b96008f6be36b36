//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror. The
//! binaries map each variant to an exit status; library code never exits.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied no usable input.
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// Process exit status for this error: 2 for usage mistakes, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_displays_message_verbatim() {
        let err = Error::Usage("Provide --image and/or --text".to_string());
        assert_eq!(err.to_string(), "Provide --image and/or --text");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_image_read_error_names_path() {
        let err = Error::ImageRead {
            path: PathBuf::from("missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.png"));
        assert_eq!(err.exit_code(), 1);
    }
}
