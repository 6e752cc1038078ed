use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::decode::types::{DecodedPixels, PixelLayout};
use crate::image_pipeline::wire::Image;

pub trait ImageDecoder {
    fn decode(&self, image: &Image, layout: PixelLayout) -> Result<DecodedPixels>;
}
