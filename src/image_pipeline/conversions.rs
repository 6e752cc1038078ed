//! Pipeline conversions module
//!
//! This module contains the orchestration that turns a batch of image
//! responses into the images, calibrations and transforms of one cycle.

mod image_response;
pub mod types;

#[cfg(test)]
mod tests;

pub use image_response::ImageResponseConverter;
pub use types::{ConversionConfig, ConversionConfigBuilder, ConversionResult, ImageWithCalibration};
