//! Image processing pipeline module
//!
//! Converts image service responses from the robot into time-corrected,
//! calibrated images plus the static transforms captured with them, with
//! separate modules for wire types, decoding, calibration, transforms and
//! conversion orchestration.

pub mod camera_info;
pub mod client;
pub mod common;
pub mod conversions;
pub mod decode;
pub mod sources;
pub mod transforms;
pub mod wire;

pub use common::{
    ClockSkew,
    ConversionError,
    ConversionStage,
    Result,
    Timestamp,
    apply_clock_skew,
};

pub use decode::{
    ImageDecoder,
    PixelLayout,
    RawImage,
    StandardImageDecoder,
};

pub use camera_info::{
    CalibrationInfo,
    build_camera_info,
};

pub use transforms::{
    FramePolicy,
    RigidTransform,
    extract_transforms,
};

pub use sources::ImageSourceName;

pub use conversions::{
    ConversionConfig,
    ConversionConfigBuilder,
    ConversionResult,
    ImageResponseConverter,
    ImageWithCalibration,
};

pub use client::{
    ImageClient,
    ImageRetriever,
    TimeSyncApi,
};
