//! Image capture messages as delivered by the robot's image service.
//!
//! Enumerations are kept as raw `i32` values on the messages, the way protobuf
//! bindings store them, so values the robot sends that this crate does not know
//! about survive until the conversion step can reject them.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::common::time::{ClockSkew, Timestamp};
use crate::image_pipeline::wire::snapshot::FrameTreeSnapshot;

/// Pixel format of an image as declared by the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PixelFormat {
    Unknown = 0,
    GreyscaleU8 = 1,
    RgbU8 = 3,
    RgbaU8 = 4,
    DepthU16 = 5,
    GreyscaleU16 = 6,
}

impl TryFrom<i32> for PixelFormat {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, i32> {
        match value {
            0 => Ok(PixelFormat::Unknown),
            1 => Ok(PixelFormat::GreyscaleU8),
            3 => Ok(PixelFormat::RgbU8),
            4 => Ok(PixelFormat::RgbaU8),
            5 => Ok(PixelFormat::DepthU16),
            6 => Ok(PixelFormat::GreyscaleU16),
            other => Err(other),
        }
    }
}

/// How the image payload bytes are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ImageFormat {
    Unknown = 0,
    Jpeg = 1,
    Raw = 2,
    Rle = 3,
}

impl TryFrom<i32> for ImageFormat {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, i32> {
        match value {
            0 => Ok(ImageFormat::Unknown),
            1 => Ok(ImageFormat::Jpeg),
            2 => Ok(ImageFormat::Raw),
            3 => Ok(ImageFormat::Rle),
            other => Err(other),
        }
    }
}

/// Robot-clock timestamp, seconds plus nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WireTimestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl From<WireTimestamp> for Timestamp {
    fn from(value: WireTimestamp) -> Self {
        Timestamp::from_secs_nanos(value.seconds, value.nanos)
    }
}

/// Signed duration, as reported by the time-sync service for clock skew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WireDuration {
    pub seconds: i64,
    pub nanos: i32,
}

impl From<WireDuration> for ClockSkew {
    fn from(value: WireDuration) -> Self {
        ClockSkew::from_secs_nanos(value.seconds, value.nanos)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub cols: i32,
    pub rows: i32,
    pub data: Vec<u8>,
    /// Raw [`ImageFormat`] value.
    pub format: i32,
    /// Raw [`PixelFormat`] value.
    pub pixel_format: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageCapture {
    pub acquisition_time: WireTimestamp,
    pub transforms_snapshot: FrameTreeSnapshot,
    pub frame_name_image_sensor: String,
    pub image: Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinholeIntrinsics {
    pub focal_length: Vec2,
    pub principal_point: Vec2,
    pub skew: Vec2,
}

/// Description of the camera an image came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageSource {
    pub name: String,
    pub rows: i32,
    pub cols: i32,
    pub depth_scale: f64,
    pub pinhole: PinholeIntrinsics,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageResponse {
    pub shot: ImageCapture,
    pub source: ImageSource,
}

impl ImageResponse {
    /// Wraps a JPEG file into a single-source response, stamped with the current
    /// time and laid out the way the robot delivers compressed images (one row of
    /// compressed bytes). The source name doubles as the sensor frame name and the
    /// intrinsics are left zeroed.
    pub fn from_jpeg_file<P: AsRef<Path>>(path: P, source_name: &str) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| ConversionError::InputReadError(format!("{}: {}", path.display(), e)))?;
        let cols = i32::try_from(data.len()).map_err(|_| {
            ConversionError::InputReadError(format!("{}: file too large", path.display()))
        })?;
        debug!(path = %path.display(), bytes = data.len(), "Loaded JPEG payload");

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        Ok(ImageResponse {
            shot: ImageCapture {
                acquisition_time: WireTimestamp {
                    seconds: now.as_secs() as i64,
                    nanos: now.subsec_nanos() as i32,
                },
                transforms_snapshot: FrameTreeSnapshot::default(),
                frame_name_image_sensor: source_name.to_string(),
                image: Image {
                    cols,
                    rows: 1,
                    data,
                    format: ImageFormat::Jpeg as i32,
                    pixel_format: PixelFormat::RgbU8 as i32,
                },
            },
            source: ImageSource {
                name: source_name.to_string(),
                ..Default::default()
            },
        })
    }
}

/// The robot's answer to one image request, one entry per requested source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetImageResponse {
    pub image_responses: Vec<ImageResponse>,
}
