//! Image decoding module
//!
//! Turns the encoded payload of one wire image into a dense pixel buffer.

mod decoder;
mod pixel_format;
mod standard_decoder;
pub mod types;

pub use decoder::ImageDecoder;
pub use pixel_format::{pixel_layout, resolve_pixel_layout};
pub use standard_decoder::StandardImageDecoder;
pub use types::{DecodedPixels, PixelEncoding, PixelLayout, RawImage};
