//! Robot API message types
//!
//! Plain Rust mirrors of the image service messages this crate consumes and
//! produces. Transport and serialisation of these messages is handled elsewhere.

pub mod image;
pub mod request;
pub mod snapshot;

pub use self::image::{
    GetImageResponse, Image, ImageCapture, ImageFormat, ImageResponse, ImageSource,
    PinholeIntrinsics, PixelFormat, Vec2, WireDuration, WireTimestamp,
};
pub use request::{ImageRequest, ImageRequestEntry};
pub use snapshot::{FrameTreeSnapshot, ParentEdge, Quaternion, SE3Pose, Vec3};
