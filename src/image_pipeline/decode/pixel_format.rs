use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::types::PixelLayout;
use crate::image_pipeline::wire::PixelFormat;

/// Maps a declared pixel format to its in-memory layout.
///
/// `DepthU16` shares its layout with `GreyscaleU16`; depth values are
/// millimetres, not intensities. `Unknown` has no layout and is rejected.
pub fn pixel_layout(format: PixelFormat) -> Result<PixelLayout> {
    match format {
        PixelFormat::RgbU8 => Ok(PixelLayout::RGB8),
        PixelFormat::RgbaU8 => Ok(PixelLayout::RGBA8),
        PixelFormat::GreyscaleU8 => Ok(PixelLayout::MONO8),
        PixelFormat::GreyscaleU16 => Ok(PixelLayout::MONO16),
        PixelFormat::DepthU16 => Ok(PixelLayout::MONO16),
        PixelFormat::Unknown => Err(ConversionError::UnknownPixelFormat(format as i32)),
    }
}

/// Resolves a raw wire pixel format value, rejecting values outside the
/// known enumeration as well as `Unknown`.
pub fn resolve_pixel_layout(raw: i32) -> Result<(PixelFormat, PixelLayout)> {
    let format = PixelFormat::try_from(raw).map_err(ConversionError::UnknownPixelFormat)?;
    Ok((format, pixel_layout(format)?))
}
