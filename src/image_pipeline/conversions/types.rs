//! Conversion configuration and result types

use std::collections::BTreeMap;

use crate::image_pipeline::camera_info::CalibrationInfo;
use crate::image_pipeline::decode::RawImage;
use crate::image_pipeline::sources::ImageSourceName;
use crate::image_pipeline::transforms::{FramePolicy, RigidTransform};

/// Configuration for converting image responses
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Namespace prepended to every frame id; empty for none
    pub robot_name: String,
    /// Which snapshot edges become transforms and how parents are renamed
    pub frame_policy: FramePolicy,
    /// Request RGB sources JPEG-compressed (true) or raw (false)
    pub compress_rgb: bool,
    /// JPEG quality asked of the robot for compressed RGB sources
    pub jpeg_quality_percent: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            robot_name: String::new(),
            frame_policy: FramePolicy::default(),
            compress_rgb: true,
            jpeg_quality_percent: 100.0,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    robot_name: Option<String>,
    frame_policy: Option<FramePolicy>,
    compress_rgb: Option<bool>,
    jpeg_quality_percent: Option<f64>,
}

impl ConversionConfigBuilder {
    pub fn robot_name(mut self, robot_name: impl Into<String>) -> Self {
        self.robot_name = Some(robot_name.into());
        self
    }

    pub fn frame_policy(mut self, frame_policy: FramePolicy) -> Self {
        self.frame_policy = Some(frame_policy);
        self
    }

    pub fn compress_rgb(mut self, enable: bool) -> Self {
        self.compress_rgb = Some(enable);
        self
    }

    pub fn jpeg_quality_percent(mut self, quality: f64) -> Self {
        self.jpeg_quality_percent = Some(quality);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            robot_name: self.robot_name.unwrap_or(default.robot_name),
            frame_policy: self.frame_policy.unwrap_or(default.frame_policy),
            compress_rgb: self.compress_rgb.unwrap_or(default.compress_rgb),
            jpeg_quality_percent: self
                .jpeg_quality_percent
                .unwrap_or(default.jpeg_quality_percent),
        }
    }
}

/// A decoded image together with the calibration of the camera that took it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageWithCalibration {
    pub image: RawImage,
    pub info: CalibrationInfo,
}

/// Everything produced from one image response batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionResult {
    pub images: BTreeMap<ImageSourceName, ImageWithCalibration>,
    /// Transforms from every source's snapshot, in source order.
    pub transforms: Vec<RigidTransform>,
}
