//! Image loading module.
//!
//! Every supported source is normalized to a (height, width, 3) BGR array.

pub mod load;
pub mod source;

pub use load::{load_image, load_image_blocking, normalize_channels, Image, UnsupportedShape};
pub use source::ImageSource;
