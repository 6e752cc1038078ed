use nalgebra::Isometry3;

use crate::image_pipeline::common::time::Timestamp;

/// Pose of `child_frame_id` expressed in `parent_frame_id` at `stamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidTransform {
    pub parent_frame_id: String,
    pub child_frame_id: String,
    pub stamp: Timestamp,
    pub parent_tform_child: Isometry3<f64>,
}
