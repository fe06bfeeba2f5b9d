/// User interface module
///
/// - `home` is the page: post form and feed
/// - `user_image`, `load` and `post_card` are leaf views used by the page
/// - `theme` holds the palette and widget styles

pub mod home;
pub mod load;
pub mod post_card;
pub mod theme;
pub mod user_image;
