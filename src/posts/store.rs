use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::photo::thumbnail;
use crate::state::data::{NewPost, Post};

/// Backend a `PostsProvider` delegates to.
///
/// Calls are blocking; the provider runs them on tokio's blocking pool.
pub trait PostStore: Send + Sync {
    /// Every stored post, oldest first
    fn load_all(&self) -> Result<Vec<Post>>;

    /// Store a new post and return it with its assigned id
    fn insert(&self, post: NewPost) -> Result<Post>;

    /// Delete a post and its photo
    fn remove(&self, id: i64) -> Result<()>;
}

/// SQLite catalog of posts, with photos saved as JPEG files beside it.
///
/// Layout inside the data directory:
/// - posts.db
/// - photos/<id>.jpg
pub struct SqliteStore {
    db_path: PathBuf,
    photos_dir: PathBuf,
    thumbnail_size: u32,
}

impl SqliteStore {
    /// Open (or create) the catalog in `data_dir` and initialize the schema
    pub fn open(data_dir: &Path, thumbnail_size: u32) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        let store = SqliteStore {
            db_path: data_dir.join("posts.db"),
            photos_dir: data_dir.join("photos"),
            thumbnail_size,
        };

        let conn = store.connection()?;
        init_schema(&conn)?;

        info!(path = %store.db_path.display(), "post catalog ready");
        Ok(store)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    // rusqlite::Connection is not Sync, so every operation opens its own
    fn connection(&self) -> Result<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS posts (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL,
            message         TEXT NOT NULL,
            photo_path      TEXT,
            created_at      INTEGER NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_posts_created_at
         ON posts(created_at)",
        [],
    )?;

    Ok(())
}

fn timestamp_to_utc(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

impl PostStore for SqliteStore {
    fn load_all(&self) -> Result<Vec<Post>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, message, photo_path, created_at
             FROM posts
             ORDER BY created_at ASC, id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let photo: Option<String> = row.get(3)?;
            Ok(Post {
                id: row.get(0)?,
                name: row.get(1)?,
                message: row.get(2)?,
                photo: photo.map(PathBuf::from),
                created_at: timestamp_to_utc(row.get(4)?),
            })
        })?;

        let mut posts = Vec::new();
        for post in rows {
            posts.push(post?);
        }

        debug!(count = posts.len(), "loaded posts");
        Ok(posts)
    }

    fn insert(&self, post: NewPost) -> Result<Post> {
        let mut conn = self.connection()?;
        let created_at = timestamp_to_utc(Utc::now().timestamp());

        // The row only survives if the photo was stored too
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO posts (name, message, created_at) VALUES (?1, ?2, ?3)",
            params![&post.name, &post.message, created_at.timestamp()],
        )?;
        let id = tx.last_insert_rowid();

        // The file is written last, so a failed statement never leaves one behind
        let photo = match &post.photo {
            Some(file) => {
                let target = thumbnail::photo_path(&self.photos_dir, id);
                tx.execute(
                    "UPDATE posts SET photo_path = ?1 WHERE id = ?2",
                    params![target.to_string_lossy(), id],
                )?;

                if let Err(err) =
                    thumbnail::store_photo(file.path(), &self.photos_dir, id, self.thumbnail_size)
                {
                    let _ = fs::remove_file(&target);
                    return Err(err);
                }
                Some(target)
            }
            None => None,
        };

        if let Err(err) = tx.commit() {
            if let Some(stored) = &photo {
                let _ = fs::remove_file(stored);
            }
            return Err(err.into());
        }

        info!(id, name = %post.name, "post stored");
        Ok(Post {
            id,
            name: post.name,
            message: post.message,
            photo,
            created_at,
        })
    }

    fn remove(&self, id: i64) -> Result<()> {
        let conn = self.connection()?;

        let photo: Option<Option<String>> = conn
            .query_row(
                "SELECT photo_path FROM posts WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;

        let Some(photo) = photo else {
            return Err(Error::NotFound(id));
        };

        conn.execute("DELETE FROM posts WHERE id = ?1", params![id])?;

        if let Some(path) = photo {
            if let Err(err) = fs::remove_file(&path) {
                warn!(id, path = %path, error = %err, "could not delete photo file");
            }
        }

        info!(id, "post removed");
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("db_path", &self.db_path)
            .field("photos_dir", &self.photos_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::PhotoFile;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    fn new_post(name: &str, photo: Option<PhotoFile>) -> NewPost {
        NewPost {
            name: name.to_string(),
            message: format!("mensagem de {}", name),
            photo,
        }
    }

    fn write_jpeg(path: &Path) -> PhotoFile {
        RgbImage::from_pixel(32, 32, Rgb([10, 120, 60]))
            .save(path)
            .expect("failed to write fixture jpeg");
        PhotoFile::new(path)
    }

    #[test]
    fn test_insert_then_load_keeps_order() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(dir.path(), 64).unwrap();

        let first = store.insert(new_post("Ana", None)).unwrap();
        let second = store.insert(new_post("Bia", None)).unwrap();

        let posts = store.load_all().unwrap();
        assert_eq!(posts, vec![first, second]);
    }

    #[test]
    fn test_insert_with_photo_stores_thumbnail() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("data"), 16).unwrap();
        let photo = write_jpeg(&dir.path().join("picked.jpg"));

        let post = store.insert(new_post("Ana", Some(photo))).unwrap();

        let stored = post.photo.clone().expect("photo path missing");
        assert!(stored.exists());
        assert!(stored.starts_with(dir.path().join("data").join("photos")));
        assert_eq!(store.load_all().unwrap()[0].photo, Some(stored));
    }

    #[test]
    fn test_unreadable_photo_rolls_back_row() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(dir.path(), 64).unwrap();
        let missing = PhotoFile::new(dir.path().join("gone.png"));

        let result = store.insert(new_post("Ana", Some(missing)));

        assert!(result.is_err());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_failed_photo_leaves_no_file_behind() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(dir.path(), 64).unwrap();
        let broken = dir.path().join("broken.jpg");
        fs::write(&broken, b"not a jpeg at all").unwrap();

        let result = store.insert(new_post("Ana", Some(PhotoFile::new(&broken))));

        assert!(matches!(result, Err(Error::Image(_))));
        assert!(store.load_all().unwrap().is_empty());
        assert!(!thumbnail::photo_path(&dir.path().join("photos"), 1).exists());
    }

    #[test]
    fn test_unwritable_photos_dir_rolls_back_row() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(dir.path(), 64).unwrap();
        // A plain file where the photos directory should be
        fs::write(dir.path().join("photos"), b"").unwrap();
        let photo = write_jpeg(&dir.path().join("picked.jpg"));

        let result = store.insert(new_post("Ana", Some(photo)));

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_remove_deletes_row_and_photo() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(dir.path(), 16).unwrap();
        let photo = write_jpeg(&dir.path().join("picked.jpg"));
        let post = store.insert(new_post("Ana", Some(photo))).unwrap();
        let stored = post.photo.clone().unwrap();

        store.remove(post.id).unwrap();

        assert!(store.load_all().unwrap().is_empty());
        assert!(!stored.exists());
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(dir.path(), 64).unwrap();

        assert_eq!(store.remove(42), Err(Error::NotFound(42)));
    }

    #[test]
    fn test_reopen_sees_existing_posts() {
        let dir = tempdir().unwrap();
        let post = {
            let store = SqliteStore::open(dir.path(), 64).unwrap();
            store.insert(new_post("Ana", None)).unwrap()
        };

        let reopened = SqliteStore::open(dir.path(), 64).unwrap();
        assert_eq!(reopened.path(), dir.path().join("posts.db"));
        assert_eq!(reopened.load_all().unwrap(), vec![post]);
    }
}
