//! Calibration metadata for decoded images.

use crate::image_pipeline::common::time::Timestamp;
use crate::image_pipeline::wire::PinholeIntrinsics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistortionModel {
    PlumbBob,
}

impl DistortionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistortionModel::PlumbBob => "plumb_bob",
        }
    }
}

/// Camera calibration in the ROS `CameraInfo` layout. Matrices are row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationInfo {
    pub frame_id: String,
    pub stamp: Timestamp,
    pub width: u32,
    pub height: u32,
    pub distortion_model: DistortionModel,
    pub d: [f64; 5],
    /// 3x3 intrinsic matrix.
    pub k: [f64; 9],
    /// 3x3 rectification matrix.
    pub r: [f64; 9],
    /// 3x4 projection matrix.
    pub p: [f64; 12],
}

/// Builds the calibration for one image from its source's pinhole intrinsics.
///
/// Images from the robot are already rectified, so the distortion
/// coefficients are all zero. Every camera is treated as monocular: the
/// rectification matrix is the identity and the projection matrix has no
/// baseline terms.
pub fn build_camera_info(
    intrinsics: &PinholeIntrinsics,
    rows: u32,
    cols: u32,
    frame_id: String,
    stamp: Timestamp,
) -> CalibrationInfo {
    let fx = intrinsics.focal_length.x;
    let fy = intrinsics.focal_length.y;
    let cx = intrinsics.principal_point.x;
    let cy = intrinsics.principal_point.y;

    #[rustfmt::skip]
    let k = [
        fx,  0.0, cx,
        0.0, fy,  cy,
        0.0, 0.0, 1.0,
    ];
    #[rustfmt::skip]
    let r = [
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    ];
    #[rustfmt::skip]
    let p = [
        fx,  0.0, cx,  0.0,
        0.0, fy,  cy,  0.0,
        0.0, 0.0, 1.0, 0.0,
    ];

    CalibrationInfo {
        frame_id,
        stamp,
        width: cols,
        height: rows,
        distortion_model: DistortionModel::PlumbBob,
        d: [0.0; 5],
        k,
        r,
        p,
    }
}
