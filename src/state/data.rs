/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the storage layer and the UI layer.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// A single entry in the feed
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Unique id assigned by the store
    pub id: i64,
    /// Author name as typed in the form
    pub name: String,
    pub message: String,
    /// Path to the stored photo (None for posts without one)
    pub photo: Option<PathBuf>,
    pub created_at: DateTime<Utc>,
}

/// A photo picked by the user but not yet submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    path: PathBuf,
    file_name: String,
}

impl PhotoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name only (e.g., "beach.jpg")
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// The values handed to a store when publishing
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub name: String,
    pub message: String,
    pub photo: Option<PhotoFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_file_name_from_path() {
        let photo = PhotoFile::new("/home/ana/Pictures/praia.jpg");
        assert_eq!(photo.file_name(), "praia.jpg");
        assert_eq!(photo.path(), Path::new("/home/ana/Pictures/praia.jpg"));
    }
}
