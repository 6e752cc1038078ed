//! Image decoder for the payload encodings the robot's image service produces.
//!
//! JPEG payloads are decoded with the `image` crate into an 8-bit colour buffer.
//! Raw payloads are copied into a dense buffer of the declared dimensions; only
//! single-channel 16-bit (depth) raw images are handled so far.

use image::ImageFormat as CodecFormat;
use tracing::{debug, trace};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::decoder::ImageDecoder;
use crate::image_pipeline::decode::types::{DecodedPixels, PixelEncoding, PixelLayout};
use crate::image_pipeline::wire::{Image, ImageFormat};

/// Decoder backed by the `image` crate for compressed payloads.
pub struct StandardImageDecoder;

impl ImageDecoder for StandardImageDecoder {
    /// Decodes one image payload according to its declared encoding.
    ///
    /// # Arguments
    ///
    /// * `image` - The wire image: payload bytes, encoding and declared rows/cols
    /// * `layout` - Pixel layout resolved from the declared pixel format
    ///
    /// # Returns
    ///
    /// * `Ok(DecodedPixels)` - Dense pixel buffer
    /// * `Err(ConversionError::DecodeFailed)` - Payload is malformed for its encoding
    /// * `Err(ConversionError::UnsupportedEncoding)` - RLE, or a raw layout other than 16-bit mono
    /// * `Err(ConversionError::UnknownEncoding)` - Encoding value is not recognised
    fn decode(&self, image: &Image, layout: PixelLayout) -> Result<DecodedPixels> {
        match ImageFormat::try_from(image.format) {
            Ok(ImageFormat::Jpeg) => decode_jpeg(image),
            Ok(ImageFormat::Raw) => decode_raw(image, layout),
            Ok(ImageFormat::Rle) => Err(ConversionError::UnsupportedEncoding("FORMAT_RLE".to_string())),
            Ok(ImageFormat::Unknown) | Err(_) => Err(ConversionError::UnknownEncoding(image.format)),
        }
    }
}

/// JPEG payloads arrive as a single row whose length is the compressed byte
/// count, so `rows * cols` bounds the compressed stream rather than giving
/// image dimensions. The output is always 3-channel, in BGR order.
fn decode_jpeg(image: &Image) -> Result<DecodedPixels> {
    let declared = i64::from(image.rows) * i64::from(image.cols);
    if declared <= 0 {
        return Err(ConversionError::DecodeFailed(format!(
            "JPEG payload declares {} compressed bytes",
            declared
        )));
    }
    let len = usize::try_from(declared)
        .unwrap_or(usize::MAX)
        .min(image.data.len());
    debug!("Decoding JPEG payload, {} bytes", len);

    let decoded = image::load_from_memory_with_format(&image.data[..len], CodecFormat::Jpeg)
        .map_err(|e| ConversionError::DecodeFailed(format!("JPEG-compressed image: {e}")))?;

    let mut buffer = decoded.into_rgb8();
    for pixel in buffer.pixels_mut() {
        pixel.0.swap(0, 2);
    }
    let (width, height) = buffer.dimensions();
    trace!(width, height, "Decoded JPEG image");

    Ok(DecodedPixels {
        width,
        height,
        layout: PixelLayout::RGB8,
        encoding: PixelEncoding::Bgr8,
        step: width * 3,
        data: buffer.into_raw(),
    })
}

fn decode_raw(image: &Image, layout: PixelLayout) -> Result<DecodedPixels> {
    if layout != PixelLayout::MONO16 {
        return Err(ConversionError::UnsupportedEncoding(format!(
            "FORMAT_RAW with {}-channel {}-bit pixels",
            layout.channels, layout.bit_depth
        )));
    }

    let (width, height) = match (u32::try_from(image.cols), u32::try_from(image.rows)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(ConversionError::DecodeFailed(format!(
                "raw image has invalid dimensions {}x{}",
                image.cols, image.rows
            )));
        }
    };

    let step = width
        .checked_mul(layout.bytes_per_pixel() as u32)
        .ok_or_else(|| ConversionError::DecodeFailed(format!("raw image row of {width} pixels overflows")))?;
    let required = (step as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| ConversionError::DecodeFailed(format!("raw image {width}x{height} overflows")))?;

    if image.data.len() < required {
        return Err(ConversionError::DecodeFailed(format!(
            "raw payload holds {} bytes, a {}x{} 16-bit image needs {}",
            image.data.len(),
            width,
            height,
            required
        )));
    }
    debug!("Copying raw {}x{} 16-bit image, {} bytes", width, height, required);

    Ok(DecodedPixels {
        width,
        height,
        layout,
        encoding: PixelEncoding::Mono16,
        step,
        data: image.data[..required].to_vec(),
    })
}
