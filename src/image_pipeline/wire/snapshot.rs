use std::collections::HashMap;

use nalgebra::{Isometry3, Quaternion as NaQuaternion, Translation3, UnitQuaternion};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Rigid pose of a child frame expressed in its parent frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SE3Pose {
    pub position: Vec3,
    pub rotation: Quaternion,
}

impl SE3Pose {
    /// Converts to an isometry without renormalising the rotation, so whatever
    /// the robot sent is carried through unchanged.
    pub fn to_isometry(&self) -> Isometry3<f64> {
        let p = self.position;
        let q = self.rotation;
        Isometry3::from_parts(
            Translation3::new(p.x, p.y, p.z),
            UnitQuaternion::new_unchecked(NaQuaternion::new(q.w, q.x, q.y, q.z)),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParentEdge {
    pub parent_frame_name: String,
    pub parent_tform_child: SE3Pose,
}

/// Frame tree captured alongside an image, keyed by child frame name.
/// The map carries no ordering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameTreeSnapshot {
    pub child_to_parent_edge_map: HashMap<String, ParentEdge>,
}

impl FrameTreeSnapshot {
    pub fn with_edge(mut self, child: &str, parent: &str, pose: SE3Pose) -> Self {
        self.child_to_parent_edge_map.insert(
            child.to_string(),
            ParentEdge {
                parent_frame_name: parent.to_string(),
                parent_tform_child: pose,
            },
        );
        self
    }
}
