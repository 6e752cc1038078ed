use std::collections::{BTreeMap, BTreeSet};

/// Internal name the robot uses for the arm wrist link in hand camera snapshots.
pub const INTERNAL_WRIST_LINK: &str = "arm0.link_wr1";

/// Wrist link name used by the rest of the kinematic chain.
pub const WRIST_LINK: &str = "link_wr1";

/// Which snapshot edges are published and how their parent frames are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePolicy {
    excluded_child_frames: BTreeSet<String>,
    parent_renames: BTreeMap<String, String>,
}

impl Default for FramePolicy {
    /// The robot's policy. Odometry frames and the body move, so they are not
    /// static transforms. The internal wrist link is excluded as a child since
    /// it moves with the arm, and renamed as a parent so hand camera frames
    /// attach to the wrist link published elsewhere.
    fn default() -> Self {
        Self::empty()
            .exclude_child("body")
            .exclude_child("odom")
            .exclude_child("vision")
            .exclude_child(INTERNAL_WRIST_LINK)
            .rename_parent(INTERNAL_WRIST_LINK, WRIST_LINK)
    }
}

impl FramePolicy {
    /// A policy that publishes every edge unchanged.
    pub fn empty() -> Self {
        Self {
            excluded_child_frames: BTreeSet::new(),
            parent_renames: BTreeMap::new(),
        }
    }

    pub fn exclude_child(mut self, frame: impl Into<String>) -> Self {
        self.excluded_child_frames.insert(frame.into());
        self
    }

    pub fn rename_parent(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.parent_renames.insert(from.into(), to.into());
        self
    }

    pub fn is_excluded(&self, child_frame: &str) -> bool {
        self.excluded_child_frames.contains(child_frame)
    }

    /// The name to publish for a parent frame.
    pub fn parent_name<'a>(&'a self, parent_frame: &'a str) -> &'a str {
        self.parent_renames
            .get(parent_frame)
            .map(String::as_str)
            .unwrap_or(parent_frame)
    }

    pub fn excluded_child_frames(&self) -> impl Iterator<Item = &str> {
        self.excluded_child_frames.iter().map(String::as_str)
    }
}
