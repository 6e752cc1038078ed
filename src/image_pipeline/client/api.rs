use crate::image_pipeline::common::time::ClockSkew;
use crate::image_pipeline::wire::{GetImageResponse, ImageRequest};

/// Issues image requests to the robot and waits for the answer.
pub trait ImageRetriever {
    fn get_images(&self, request: &ImageRequest) -> anyhow::Result<GetImageResponse>;
}

/// Reports the current estimate of robot clock minus local clock.
pub trait TimeSyncApi {
    fn clock_skew(&self) -> anyhow::Result<ClockSkew>;
}
