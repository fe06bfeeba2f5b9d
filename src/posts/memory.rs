use chrono::Utc;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use super::store::PostStore;
use crate::error::{Error, Result};
use crate::state::data::{NewPost, Post};

/// Posts kept in process memory; photos keep pointing at the picked file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    reject_with: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    posts: Vec<Post>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every insert with `reason`
    #[cfg(test)]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reject_with: Some(reason.into()),
            ..Self::default()
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::Task("memory store lock poisoned".to_string()))
    }
}

impl PostStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Post>> {
        Ok(self.lock()?.posts.clone())
    }

    fn insert(&self, post: NewPost) -> Result<Post> {
        if let Some(reason) = &self.reject_with {
            return Err(Error::Rejected(reason.clone()));
        }

        let mut inner = self.lock()?;
        inner.next_id += 1;

        let post = Post {
            id: inner.next_id,
            name: post.name,
            message: post.message,
            photo: post.photo.map(|file| file.path().to_path_buf()),
            created_at: Utc::now(),
        };
        inner.posts.push(post.clone());

        info!(id = post.id, "post kept in memory");
        Ok(post)
    }

    fn remove(&self, id: i64) -> Result<()> {
        let mut inner = self.lock()?;
        let before = inner.posts.len();
        inner.posts.retain(|post| post.id != id);

        if inner.posts.len() == before {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::PhotoFile;
    use std::path::PathBuf;

    fn new_post(name: &str) -> NewPost {
        NewPost {
            name: name.to_string(),
            message: "Oi".to_string(),
            photo: Some(PhotoFile::new("/tmp/foto.png")),
        }
    }

    #[test]
    fn test_ids_increase_and_order_is_kept() {
        let store = MemoryStore::new();
        let a = store.insert(new_post("Ana")).unwrap();
        let b = store.insert(new_post("Bia")).unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.photo, Some(PathBuf::from("/tmp/foto.png")));
        assert_eq!(store.load_all().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_rejecting_store_keeps_nothing() {
        let store = MemoryStore::rejecting("offline");

        let result = store.insert(new_post("Ana"));

        assert_eq!(result, Err(Error::Rejected("offline".to_string())));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        let post = store.insert(new_post("Ana")).unwrap();

        store.remove(post.id).unwrap();

        assert!(store.load_all().unwrap().is_empty());
        assert_eq!(store.remove(post.id), Err(Error::NotFound(post.id)));
    }
}
