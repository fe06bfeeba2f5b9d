/// Photo handling module
///
/// This module handles:
/// - Picking a photo through a platform file dialog
/// - Shrinking picked photos and saving them next to the database

pub mod picker;
pub mod thumbnail;

pub use picker::{FilePicker, RfdPicker};

#[cfg(test)]
pub use picker::StaticPicker;
