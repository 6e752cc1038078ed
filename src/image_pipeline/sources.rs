//! Canonical image source identifiers and their robot API names.
//!
//! Every camera the robot exposes is identified by a camera position and an
//! image type. The mapping to wire names is bijective: each canonical source has
//! exactly one wire name and each known wire name resolves to exactly one source.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{ConversionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpotCamera {
    Back,
    FrontLeft,
    FrontRight,
    Left,
    Right,
    Hand,
}

impl SpotCamera {
    pub const BODY_CAMERAS: [SpotCamera; 5] = [
        SpotCamera::Back,
        SpotCamera::FrontLeft,
        SpotCamera::FrontRight,
        SpotCamera::Left,
        SpotCamera::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpotCamera::Back => "back",
            SpotCamera::FrontLeft => "frontleft",
            SpotCamera::FrontRight => "frontright",
            SpotCamera::Left => "left",
            SpotCamera::Right => "right",
            SpotCamera::Hand => "hand",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpotImageType {
    Rgb,
    Depth,
    /// Depth reprojected into the matching visual camera's frame.
    DepthRegistered,
}

impl SpotImageType {
    pub const ALL: [SpotImageType; 3] = [
        SpotImageType::Rgb,
        SpotImageType::Depth,
        SpotImageType::DepthRegistered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpotImageType::Rgb => "camera",
            SpotImageType::Depth => "depth",
            SpotImageType::DepthRegistered => "depth_registered",
        }
    }
}

/// Canonical identifier of one image source on the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageSourceName {
    pub camera: SpotCamera,
    pub image_type: SpotImageType,
}

impl ImageSourceName {
    pub const fn new(camera: SpotCamera, image_type: SpotImageType) -> Self {
        Self { camera, image_type }
    }

    /// The name the robot's image service uses for this source.
    pub fn to_wire_name(&self) -> String {
        let camera = self.camera.as_str();
        match (self.camera, self.image_type) {
            (SpotCamera::Hand, SpotImageType::Rgb) => "hand_color_image".to_string(),
            (SpotCamera::Hand, SpotImageType::Depth) => "hand_depth".to_string(),
            (SpotCamera::Hand, SpotImageType::DepthRegistered) => {
                "hand_depth_in_hand_color_frame".to_string()
            }
            (_, SpotImageType::Rgb) => format!("{camera}_fisheye_image"),
            (_, SpotImageType::Depth) => format!("{camera}_depth"),
            (_, SpotImageType::DepthRegistered) => format!("{camera}_depth_in_visual_frame"),
        }
    }

    /// Resolves a wire source name. Names outside the known set are rejected.
    pub fn from_wire_name(name: &str) -> Result<Self> {
        let source = match name {
            "hand_color_image" => Self::new(SpotCamera::Hand, SpotImageType::Rgb),
            "hand_depth" => Self::new(SpotCamera::Hand, SpotImageType::Depth),
            "hand_depth_in_hand_color_frame" => {
                Self::new(SpotCamera::Hand, SpotImageType::DepthRegistered)
            }
            _ => {
                let (camera, image_type) = if let Some(camera) = name.strip_suffix("_fisheye_image") {
                    (camera, SpotImageType::Rgb)
                } else if let Some(camera) = name.strip_suffix("_depth_in_visual_frame") {
                    (camera, SpotImageType::DepthRegistered)
                } else if let Some(camera) = name.strip_suffix("_depth") {
                    (camera, SpotImageType::Depth)
                } else {
                    return Err(ConversionError::UnknownSource(name.to_string()));
                };
                let camera = SpotCamera::BODY_CAMERAS
                    .into_iter()
                    .find(|c| c.as_str() == camera)
                    .ok_or_else(|| ConversionError::UnknownSource(name.to_string()))?;
                Self::new(camera, image_type)
            }
        };
        Ok(source)
    }

    /// The set of sources to request for the given image types. Hand sources
    /// are only included when the robot has an arm-mounted camera.
    pub fn select(
        rgb: bool,
        depth: bool,
        depth_registered: bool,
        has_hand_camera: bool,
    ) -> BTreeSet<ImageSourceName> {
        let wanted = [
            (SpotImageType::Rgb, rgb),
            (SpotImageType::Depth, depth),
            (SpotImageType::DepthRegistered, depth_registered),
        ];
        let hand = has_hand_camera.then_some(SpotCamera::Hand);

        let mut out = BTreeSet::new();
        for (image_type, enabled) in wanted {
            if !enabled {
                continue;
            }
            for camera in SpotCamera::BODY_CAMERAS.into_iter().chain(hand) {
                out.insert(Self::new(camera, image_type));
            }
        }
        out
    }
}

impl fmt::Display for ImageSourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.image_type.as_str(), self.camera.as_str())
    }
}

impl FromStr for ImageSourceName {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wire_name(s)
    }
}
