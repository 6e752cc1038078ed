//! Static transform extraction from image frame tree snapshots.

mod extractor;
pub mod policy;
pub mod types;

pub use extractor::extract_transforms;
pub use policy::{FramePolicy, INTERNAL_WRIST_LINK, WRIST_LINK};
pub use types::RigidTransform;
