//! Image client module
//!
//! Ties the conversion pipeline to the collaborators that fetch images and
//! estimate clock skew.

mod api;
mod image_client;


pub use api::{ImageRetriever, TimeSyncApi};
pub use image_client::ImageClient;
