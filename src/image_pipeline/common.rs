//! Common utilities module
//!
//! This module contains the error taxonomy, time handling and frame naming
//! shared across the image pipeline.

pub mod error;
pub mod time;

pub use error::{ConversionError, ConversionStage, Result};
pub use time::{ClockSkew, Timestamp, apply_clock_skew};

/// Prefixes a frame name with the robot namespace, `"{namespace}/{frame}"`.
/// An empty namespace leaves the frame name untouched.
pub fn namespaced_frame_id(namespace: &str, frame: &str) -> String {
    if namespace.is_empty() {
        frame.to_string()
    } else {
        format!("{namespace}/{frame}")
    }
}
