//! Capture domain module

mod capabilities;
mod image_data;

pub use capabilities::{TrackCapabilities, ZoomRange};
pub use image_data::{ImageData, ImageMimeType};
