use std::collections::btree_map::Entry;

use tracing::{debug, instrument};

use crate::image_pipeline::{
    camera_info::build_camera_info,
    common::{
        ClockSkew, ConversionError, ConversionStage, Result, apply_clock_skew, namespaced_frame_id,
    },
    conversions::types::{ConversionConfig, ConversionResult, ImageWithCalibration},
    decode::{ImageDecoder, RawImage, StandardImageDecoder, resolve_pixel_layout},
    sources::ImageSourceName,
    transforms::extract_transforms,
    wire::{GetImageResponse, ImageResponse},
};

/// Converts image service responses into stamped, calibrated images and the
/// static transforms captured with them.
///
/// A batch converts all-or-nothing: the first source that fails aborts the
/// whole batch and no partial result is returned.
pub struct ImageResponseConverter<D: ImageDecoder> {
    decoder: D,
    config: ConversionConfig,
}

impl ImageResponseConverter<StandardImageDecoder> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            decoder: StandardImageDecoder,
            config,
        }
    }
}

impl<D: ImageDecoder> ImageResponseConverter<D> {
    pub fn with_custom(decoder: D, config: ConversionConfig) -> Self {
        Self { decoder, config }
    }

    #[instrument(level = "debug", skip(self, batch), fields(sources = batch.image_responses.len()))]
    pub fn convert(&self, batch: &GetImageResponse, clock_skew: ClockSkew) -> Result<ConversionResult> {
        let mut out = ConversionResult::default();

        for response in &batch.image_responses {
            let _span = tracing::debug_span!("image_response", source = %response.source.name).entered();
            self.convert_response(response, clock_skew, &mut out)?;
        }

        debug!(
            images = out.images.len(),
            transforms = out.transforms.len(),
            "Batch converted"
        );
        Ok(out)
    }

    fn convert_response(
        &self,
        response: &ImageResponse,
        clock_skew: ClockSkew,
        out: &mut ConversionResult,
    ) -> Result<()> {
        let source_name = response.source.name.as_str();
        let shot = &response.shot;
        let stamp = apply_clock_skew(shot.acquisition_time.into(), clock_skew);
        let frame_id = namespaced_frame_id(&self.config.robot_name, &shot.frame_name_image_sensor);

        let (pixel_format, layout) = resolve_pixel_layout(shot.image.pixel_format)
            .map_err(|e| e.at_stage(ConversionStage::PixelFormatResolution, source_name))?;

        let pixels = {
            let _span = tracing::debug_span!("decode_image", format = shot.image.format).entered();
            self.decoder
                .decode(&shot.image, layout)
                .map_err(|e| e.at_stage(ConversionStage::ImageDecode, source_name))?
        };
        let image = RawImage::new(frame_id.clone(), stamp, pixel_format, pixels);
        let info = build_camera_info(&response.source.pinhole, image.height, image.width, frame_id, stamp);

        let name = ImageSourceName::from_wire_name(source_name)
            .map_err(|e| e.at_stage(ConversionStage::SourceResolution, source_name))?;
        match out.images.entry(name) {
            Entry::Occupied(_) => {
                return Err(ConversionError::DuplicateSource(source_name.to_string())
                    .at_stage(ConversionStage::SourceResolution, source_name));
            }
            Entry::Vacant(slot) => {
                slot.insert(ImageWithCalibration { image, info });
            }
        }

        let transforms = extract_transforms(
            &shot.transforms_snapshot,
            &self.config.frame_policy,
            &self.config.robot_name,
            stamp,
        );
        debug!(source = %name, transforms = transforms.len(), "Image response converted");
        out.transforms.extend(transforms);

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
