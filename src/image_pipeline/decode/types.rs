//! Decoded image types

use crate::image_pipeline::common::time::Timestamp;
use crate::image_pipeline::wire::PixelFormat;

/// In-memory pixel layout: channel count and bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelLayout {
    pub channels: u8,
    pub bit_depth: u8,
}

impl PixelLayout {
    pub const RGB8: PixelLayout = PixelLayout { channels: 3, bit_depth: 8 };
    pub const RGBA8: PixelLayout = PixelLayout { channels: 4, bit_depth: 8 };
    pub const MONO8: PixelLayout = PixelLayout { channels: 1, bit_depth: 8 };
    pub const MONO16: PixelLayout = PixelLayout { channels: 1, bit_depth: 16 };

    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.channels) * usize::from(self.bit_depth) / 8
    }
}

/// Encoding label attached to decoded images, using the ROS image encoding names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelEncoding {
    Bgr8,
    Mono16,
}

impl PixelEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            PixelEncoding::Bgr8 => "bgr8",
            PixelEncoding::Mono16 => "16UC1",
        }
    }
}

/// Dense pixel buffer produced by an [`ImageDecoder`](super::ImageDecoder).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPixels {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub encoding: PixelEncoding,
    /// Row length in bytes.
    pub step: u32,
    pub data: Vec<u8>,
}

/// A decoded image stamped in the local time base.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    pub frame_id: String,
    pub stamp: Timestamp,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub encoding: PixelEncoding,
    /// Pixel format the robot declared. Depth and 16-bit greyscale share a
    /// layout and are only told apart by this tag.
    pub pixel_format: PixelFormat,
    pub is_bigendian: bool,
    pub step: u32,
    pub data: Vec<u8>,
}

impl RawImage {
    pub fn new(
        frame_id: String,
        stamp: Timestamp,
        pixel_format: PixelFormat,
        pixels: DecodedPixels,
    ) -> Self {
        Self {
            frame_id,
            stamp,
            width: pixels.width,
            height: pixels.height,
            layout: pixels.layout,
            encoding: pixels.encoding,
            pixel_format,
            is_bigendian: false,
            step: pixels.step,
            data: pixels.data,
        }
    }

    pub fn is_depth(&self) -> bool {
        self.pixel_format == PixelFormat::DepthU16
    }
}
