use crate::image_pipeline::conversions::ConversionConfig;
use crate::image_pipeline::sources::{ImageSourceName, SpotImageType};
use crate::image_pipeline::wire::image::{ImageFormat, PixelFormat};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequestEntry {
    pub image_source_name: String,
    pub quality_percent: f64,
    /// Raw [`ImageFormat`] value.
    pub image_format: i32,
    /// Raw [`PixelFormat`] value; `Unknown` lets the robot pick its default.
    pub pixel_format: i32,
}

/// Description of the images to fetch in one retrieval cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageRequest {
    pub image_requests: Vec<ImageRequestEntry>,
}

impl ImageRequest {
    /// Builds a request for the given sources. RGB sources are requested as
    /// JPEG at the configured quality unless compression is turned off; depth
    /// sources are always requested raw.
    pub fn for_sources<I>(sources: I, config: &ConversionConfig) -> Self
    where
        I: IntoIterator<Item = ImageSourceName>,
    {
        let image_requests = sources
            .into_iter()
            .map(|source| {
                let (image_format, quality_percent) = match source.image_type {
                    SpotImageType::Rgb if config.compress_rgb => {
                        (ImageFormat::Jpeg, config.jpeg_quality_percent)
                    }
                    _ => (ImageFormat::Raw, 100.0),
                };
                ImageRequestEntry {
                    image_source_name: source.to_wire_name(),
                    quality_percent,
                    image_format: image_format as i32,
                    pixel_format: PixelFormat::Unknown as i32,
                }
            })
            .collect();

        Self { image_requests }
    }

    pub fn len(&self) -> usize {
        self.image_requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::sources::SpotCamera;

    #[test]
    fn test_rgb_sources_requested_as_jpeg() {
        let config = ConversionConfig::builder().jpeg_quality_percent(75.0).build();
        let request = ImageRequest::for_sources(
            [ImageSourceName::new(SpotCamera::Hand, SpotImageType::Rgb)],
            &config,
        );

        assert_eq!(request.len(), 1);
        let entry = &request.image_requests[0];
        assert_eq!(entry.image_source_name, "hand_color_image");
        assert_eq!(entry.image_format, ImageFormat::Jpeg as i32);
        assert_eq!(entry.quality_percent, 75.0);
    }

    #[test]
    fn test_depth_sources_requested_raw() {
        let config = ConversionConfig::default();
        let request = ImageRequest::for_sources(
            [ImageSourceName::new(SpotCamera::FrontLeft, SpotImageType::Depth)],
            &config,
        );

        let entry = &request.image_requests[0];
        assert_eq!(entry.image_source_name, "frontleft_depth");
        assert_eq!(entry.image_format, ImageFormat::Raw as i32);
    }

    #[test]
    fn test_uncompressed_rgb_requested_raw() {
        let config = ConversionConfig::builder().compress_rgb(false).build();
        let request = ImageRequest::for_sources(ImageSourceName::select(true, false, false, true), &config);

        assert_eq!(request.len(), 6);
        assert!(request
            .image_requests
            .iter()
            .all(|entry| entry.image_format == ImageFormat::Raw as i32));
    }
}
