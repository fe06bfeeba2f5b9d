/// Post feed module
///
/// This module owns the feed shown by the page:
/// - The provider holding the current list and loading flag (this file)
/// - The store trait and its SQLite implementation (store.rs)
/// - An in-memory store (memory.rs)

pub mod memory;
pub mod store;

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use tokio::task;
use tracing::debug;

use crate::error::Result;
use crate::state::data::{NewPost, PhotoFile, Post};

pub use memory::MemoryStore;
pub use store::{PostStore, SqliteStore};

/// Holds the posts on screen and performs submissions through a store.
///
/// The provider never inserts anything on its own: a post shows up in
/// the list only after the store confirms it and `append` is called.
#[derive(Clone)]
pub struct PostsProvider {
    store: Arc<dyn PostStore>,
    posts: Vec<Post>,
    loading: bool,
}

impl PostsProvider {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            posts: Vec::new(),
            loading: false,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Read every post from the store
    pub fn fetch(&self) -> impl Future<Output = Result<Vec<Post>>> + Send + 'static {
        let store = Arc::clone(&self.store);
        async move { task::spawn_blocking(move || store.load_all()).await? }
    }

    /// Take in a fetched list. Posts already on screen that the snapshot
    /// does not know about (appended while the fetch was in flight) stay,
    /// after the fetched ones.
    pub fn merge(&mut self, snapshot: Vec<Post>) {
        let fetched: HashSet<i64> = snapshot.iter().map(|post| post.id).collect();
        let newer: Vec<Post> = std::mem::take(&mut self.posts)
            .into_iter()
            .filter(|post| !fetched.contains(&post.id))
            .collect();

        debug!(fetched = snapshot.len(), kept = newer.len(), "feed merged");
        self.posts = snapshot;
        self.posts.extend(newer);
    }

    /// Submit a new post. The returned future resolves to the stored post;
    /// the caller appends it once it arrives.
    pub fn add_new_post(
        &self,
        name: String,
        message: String,
        photo: Option<PhotoFile>,
    ) -> impl Future<Output = Result<Post>> + Send + 'static {
        let store = Arc::clone(&self.store);
        let post = NewPost { name, message, photo };
        async move { task::spawn_blocking(move || store.insert(post)).await? }
    }

    pub fn append(&mut self, post: Post) {
        debug!(id = post.id, "post appended to feed");
        self.posts.push(post);
    }

    /// Delete a post from the store, resolving to its id
    pub fn delete_post(&self, id: i64) -> impl Future<Output = Result<i64>> + Send + 'static {
        let store = Arc::clone(&self.store);
        async move {
            task::spawn_blocking(move || store.remove(id)).await??;
            Ok(id)
        }
    }

    /// Drop a post from the list; false if it was not there
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| post.id != id);
        self.posts.len() != before
    }
}

impl std::fmt::Debug for PostsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsProvider")
            .field("posts", &self.posts.len())
            .field("loading", &self.loading)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn provider(store: MemoryStore) -> PostsProvider {
        PostsProvider::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_add_new_post_resolves_to_stored_post() {
        let mut posts = provider(MemoryStore::new());

        let post = posts
            .add_new_post("Ana".into(), "Oi".into(), Some(PhotoFile::new("/tmp/a.png")))
            .await
            .unwrap();

        // Nothing is listed until the caller appends
        assert!(posts.posts().is_empty());

        posts.append(post.clone());
        assert_eq!(posts.posts(), &[post]);
    }

    #[tokio::test]
    async fn test_rejected_submission_leaves_feed_unchanged() {
        let posts = provider(MemoryStore::rejecting("server down"));

        let result = posts
            .add_new_post("Ana".into(), "Oi".into(), Some(PhotoFile::new("/tmp/a.png")))
            .await;

        assert_eq!(result, Err(Error::Rejected("server down".to_string())));
        assert!(posts.posts().is_empty());
        assert!(posts.fetch().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_returns_what_the_store_holds() {
        let store = MemoryStore::new();
        let stored = store
            .insert(NewPost {
                name: "Bia".into(),
                message: "Bom dia".into(),
                photo: None,
            })
            .unwrap();
        let mut posts = provider(store);

        let fetched = posts.fetch().await.unwrap();
        posts.merge(fetched);

        assert_eq!(posts.posts(), &[stored]);
    }

    #[tokio::test]
    async fn test_late_fetch_keeps_posts_appended_meanwhile() {
        let store = MemoryStore::new();
        let older = store
            .insert(NewPost {
                name: "Bia".into(),
                message: "Bom dia".into(),
                photo: None,
            })
            .unwrap();
        let mut posts = provider(store);

        // Snapshot taken before the new post is stored
        let snapshot = posts.fetch().await.unwrap();
        let newer = posts
            .add_new_post("Ana".into(), "Oi".into(), None)
            .await
            .unwrap();
        posts.append(newer.clone());

        posts.merge(snapshot);

        assert_eq!(posts.posts(), &[older, newer]);
    }

    #[test]
    fn test_merge_does_not_duplicate_known_posts() {
        let mut posts = provider(MemoryStore::new());
        let post = Post {
            id: 1,
            name: "Ana".into(),
            message: "Oi".into(),
            photo: None,
            created_at: chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        posts.append(post.clone());

        posts.merge(vec![post.clone()]);

        assert_eq!(posts.posts(), &[post]);
    }

    #[tokio::test]
    async fn test_delete_post_removes_from_store() {
        let mut posts = provider(MemoryStore::new());
        let post = posts
            .add_new_post("Ana".into(), "Oi".into(), None)
            .await
            .unwrap();
        posts.append(post.clone());

        assert_eq!(posts.delete_post(post.id).await, Ok(post.id));
        assert!(posts.remove(post.id));
        assert!(!posts.remove(post.id));
        assert_eq!(posts.delete_post(post.id).await, Err(Error::NotFound(post.id)));
    }

    #[test]
    fn test_loading_flag_setter() {
        let mut posts = provider(MemoryStore::new());
        assert!(!posts.is_loading());

        posts.set_loading(true);
        assert!(posts.is_loading());
    }
}
