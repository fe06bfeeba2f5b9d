/// The post being composed in the form
///
/// A draft is local to the page and never persisted. It is reset after
/// every publish or discard, whatever happens to the submission.

use super::data::{NewPost, PhotoFile};

/// Derived classification of a draft, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    /// Nothing typed or picked
    Empty,
    /// Some fields set, at least one missing
    Filled,
    /// Name, message and photo all present
    ValidForSubmit,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub message: String,
    pub photo: Option<PhotoFile>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when name, message and photo are all present.
    ///
    /// Whitespace counts as content; only zero-length text is missing.
    pub fn is_ready(&self) -> bool {
        !self.name.is_empty() && !self.message.is_empty() && self.photo.is_some()
    }

    pub fn status(&self) -> DraftStatus {
        if self.is_ready() {
            DraftStatus::ValidForSubmit
        } else if self.name.is_empty() && self.message.is_empty() && self.photo.is_none() {
            DraftStatus::Empty
        } else {
            DraftStatus::Filled
        }
    }

    /// Replace the photo (picking again overrides the previous one)
    pub fn set_photo(&mut self, photo: PhotoFile) {
        self.photo = Some(photo);
    }

    pub fn remove_photo(&mut self) {
        self.photo = None;
    }

    /// Reset to `{ name: "", message: "", photo: None }`
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Move the current values out for submission, leaving the draft empty
    pub fn take(&mut self) -> NewPost {
        let draft = std::mem::take(self);
        NewPost {
            name: draft.name,
            message: draft.message,
            photo: draft.photo,
        }
    }
}
