/// State management module
///
/// This module handles the in-memory application state:
/// - Shared data structures (data.rs)
/// - The post being composed in the form (draft.rs)

pub mod data;
pub mod draft;
