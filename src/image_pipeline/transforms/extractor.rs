use tracing::trace;

use crate::image_pipeline::common::namespaced_frame_id;
use crate::image_pipeline::common::time::Timestamp;
use crate::image_pipeline::transforms::policy::FramePolicy;
use crate::image_pipeline::transforms::types::RigidTransform;
use crate::image_pipeline::wire::FrameTreeSnapshot;

/// Turns the edges of a frame tree snapshot into stamped transforms.
///
/// Edges are visited in child frame name order so the output is reproducible.
/// Edges whose child is excluded by `policy` are skipped, parent names are
/// renamed per `policy`, both frames get the `namespace` prefix, and every
/// transform carries `stamp`, the snapshot's corrected acquisition time.
pub fn extract_transforms(
    snapshot: &FrameTreeSnapshot,
    policy: &FramePolicy,
    namespace: &str,
    stamp: Timestamp,
) -> Vec<RigidTransform> {
    let mut edges: Vec<_> = snapshot.child_to_parent_edge_map.iter().collect();
    edges.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    edges
        .into_iter()
        .filter(|(child, _)| {
            let excluded = policy.is_excluded(child);
            if excluded {
                trace!(child = %child, "Skipping excluded frame");
            }
            !excluded
        })
        .map(|(child, edge)| RigidTransform {
            parent_frame_id: namespaced_frame_id(namespace, policy.parent_name(&edge.parent_frame_name)),
            child_frame_id: namespaced_frame_id(namespace, child),
            stamp,
            parent_tform_child: edge.parent_tform_child.to_isometry(),
        })
        .collect()
}
