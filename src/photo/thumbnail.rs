use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// Path of the stored photo for a post id (doesn't create it)
pub fn photo_path(photos_dir: &Path, post_id: i64) -> PathBuf {
    photos_dir.join(format!("{}.jpg", post_id))
}

/// Decode a picked photo, shrink it to fit `max_size` and save it as JPEG
/// under `photos_dir`. Returns the path of the saved file.
pub fn store_photo(source: &Path, photos_dir: &Path, post_id: i64, max_size: u32) -> Result<PathBuf> {
    let img = image::open(source)?;

    // Only shrink; small photos keep their size
    let resized = if img.width() > max_size || img.height() > max_size {
        img.resize(max_size, max_size, FilterType::Lanczos3)
    } else {
        img
    };

    fs::create_dir_all(photos_dir)?;
    let target = photo_path(photos_dir, post_id);

    // JPEG has no alpha channel
    resized.to_rgb8().save(&target)?;

    debug!(source = %source.display(), target = %target.display(), "stored photo");
    Ok(target)
}
