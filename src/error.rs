/// Error types shared across the application
///
/// Errors carry their details as strings so they stay `Clone` and can
/// travel inside iced messages between background tasks and the UI.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading, storing or showing posts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// SQLite query or connection failure
    #[error("database error: {0}")]
    Database(String),

    /// Filesystem failure (missing photo, unwritable data directory, ...)
    #[error("I/O error: {0}")]
    Io(String),

    /// The picked photo could not be decoded or the thumbnail not written
    #[error("image error: {0}")]
    Image(String),

    /// Settings could not be resolved or written
    #[error("config error: {0}")]
    Config(String),

    /// No post with this id exists in the store
    #[error("post {0} not found")]
    NotFound(i64),

    /// The store refused the submission
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// A background task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(String),

    /// The windowing layer failed to start or crashed
    #[error("ui error: {0}")]
    Ui(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Task(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Ui(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "photo.png missing");
        let err: Error = io.into();

        assert_eq!(err, Error::Io("photo.png missing".to_string()));
        assert_eq!(err.to_string(), "I/O error: photo.png missing");
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(Error::NotFound(7).to_string(), "post 7 not found");
    }
}
