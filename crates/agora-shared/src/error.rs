use thiserror::Error;

use crate::types::PostId;

/// Errors produced while handling feed input.
///
/// Every variant is recoverable: the draft or card state that triggered it
/// is left untouched.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Post must contain text or an image")]
    EmptyPost,

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: u64, max: u64 },

    #[error("File is not a supported image")]
    NotAnImage,

    #[error("Image attachments are disabled")]
    ImageAttachmentsDisabled,

    #[error("Share menu is disabled")]
    ShareMenuDisabled,

    #[error("Unknown post: {0}")]
    UnknownPost(PostId),

    #[error("Host error: {0}")]
    Host(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let err: FeedError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FeedError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
