//! Capability classification of scene nodes
//!
//! Tags are compared once, when a node is hit, and turned into a closed
//! [`Capability`]. Nothing downstream compares strings again.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scene::{NodeId, PopupHandle, SceneQuery};

/// Tag identifiers that mark interactive nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSet {
    /// Nodes rotated by drag instead of the camera
    pub controllable: String,
    /// Nodes the camera walks to
    pub waypoint: String,
    /// Nodes that open a popup
    pub popup: String,
}

impl Default for TagSet {
    fn default() -> Self {
        Self {
            controllable: "ControllableObject".to_string(),
            waypoint: "MovePointObject".to_string(),
            popup: "PopupEventObject".to_string(),
        }
    }
}

/// Tag classification, before popup handles are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Controllable,
    Waypoint,
    PopupTrigger,
    Plain,
}

impl TagSet {
    /// Classify a tag (first match wins, untagged is plain)
    pub fn classify(&self, tag: Option<&str>) -> TagKind {
        match tag {
            Some(t) if t == self.controllable => TagKind::Controllable,
            Some(t) if t == self.waypoint => TagKind::Waypoint,
            Some(t) if t == self.popup => TagKind::PopupTrigger,
            _ => TagKind::Plain,
        }
    }

    /// Event nodes (waypoints, popup triggers) are neither ground nor obstacles
    pub fn is_event(&self, tag: Option<&str>) -> bool {
        matches!(
            self.classify(tag),
            TagKind::Waypoint | TagKind::PopupTrigger
        )
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let tags = [&self.controllable, &self.waypoint, &self.popup];
        if tags.iter().any(|t| t.is_empty()) {
            return Err(Error::InvalidConfig("tag identifiers must not be empty".into()));
        }
        if tags[0] == tags[1] || tags[0] == tags[2] || tags[1] == tags[2] {
            return Err(Error::InvalidConfig(format!(
                "tag identifiers must be distinct, got {tags:?}"
            )));
        }
        Ok(())
    }
}

/// What a clicked node lets the user do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Controllable,
    Waypoint,
    PopupTrigger(PopupHandle),
    Plain,
}

impl Capability {
    /// Resolve a node's capability, looking up its popup when tagged as a trigger
    ///
    /// A popup-trigger without a popup degrades to [`Capability::Plain`] so
    /// the click still drives the camera.
    pub fn of<S: SceneQuery + ?Sized>(tags: &TagSet, scene: &S, node: NodeId) -> Self {
        match tags.classify(scene.tag(node)) {
            TagKind::Controllable => Capability::Controllable,
            TagKind::Waypoint => Capability::Waypoint,
            TagKind::PopupTrigger => match scene.popup(node) {
                Some(popup) => Capability::PopupTrigger(popup),
                None => {
                    tracing::warn!(?node, "popup trigger has no popup, treating as plain");
                    Capability::Plain
                }
            },
            TagKind::Plain => Capability::Plain,
        }
    }
}
