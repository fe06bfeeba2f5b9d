//! Photo Feed: post a photo with a message and browse the feed.
//!
//! The window is an iced application. The page (`ui::home`) owns the draft
//! being composed and talks to the posts provider (`posts`) and the photo
//! picker (`photo`) it was constructed with.

pub mod config;
pub mod error;
pub mod photo;
pub mod posts;
pub mod state;
pub mod ui;
