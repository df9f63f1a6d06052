pub mod image_size;

pub use image_size::{ImageSize, ImageUrlBuilder};
