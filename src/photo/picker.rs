/// Photo selection
///
/// The page never talks to a dialog directly: it asks a `FilePicker` for at
/// most one image and gets a future back. The desktop implementation uses
/// the native dialog through rfd; tests plug in a canned picker.

use std::future::Future;
use std::pin::Pin;

use rfd::AsyncFileDialog;
use tracing::debug;

use crate::state::data::PhotoFile;

/// Extensions offered by the picker filter
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

pub type PickFuture = Pin<Box<dyn Future<Output = Option<PhotoFile>> + Send>>;

/// Source of user-picked photos
pub trait FilePicker: Send + Sync {
    /// Resolves to the picked file, or None when the user cancels
    fn pick_image(&self) -> PickFuture;
}

/// Native file dialog restricted to image types
#[derive(Debug, Default, Clone)]
pub struct RfdPicker;

impl FilePicker for RfdPicker {
    fn pick_image(&self) -> PickFuture {
        Box::pin(async {
            let handle = AsyncFileDialog::new()
                .set_title("Escolha uma foto")
                .add_filter("Imagens", IMAGE_EXTENSIONS)
                .pick_file()
                .await?;

            debug!(path = %handle.path().display(), "photo picked");
            Some(PhotoFile::new(handle.path()))
        })
    }
}

/// Picker that hands out a fixed answer every time
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticPicker {
    photo: Option<PhotoFile>,
}

#[cfg(test)]
impl StaticPicker {
    pub fn new(photo: Option<PhotoFile>) -> Self {
        Self { photo }
    }
}

#[cfg(test)]
impl FilePicker for StaticPicker {
    fn pick_image(&self) -> PickFuture {
        let photo = self.photo.clone();
        Box::pin(async move { photo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_static_picker_returns_its_photo() {
        let picker = StaticPicker::new(Some(PhotoFile::new("/tmp/cat.png")));
        assert_eq!(picker.pick_image().await, Some(PhotoFile::new("/tmp/cat.png")));
    }

    #[tokio::test]
    async fn test_cancelled_pick_yields_none() {
        let picker: Arc<dyn FilePicker> = Arc::new(StaticPicker::new(None));
        assert_eq!(picker.pick_image().await, None);
    }
}
