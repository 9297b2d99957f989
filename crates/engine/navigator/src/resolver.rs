//! Target resolution for input-begin
//!
//! Casts the click ray into the scene and decides which control state the
//! new interaction enters.

use crate::capability::{Capability, TagSet};
use crate::scene::{NodeId, Ray, SceneQuery};
use crate::session::ControlState;

/// Outcome of resolving a click ray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Node under the cursor, if the ray hit anything
    pub node: Option<NodeId>,
    pub capability: Capability,
}

impl Target {
    /// Nothing under the cursor
    pub const EMPTY: Target = Target {
        node: None,
        capability: Capability::Plain,
    };

    /// Control state this target starts
    pub fn next_state(&self) -> ControlState {
        match self.capability {
            Capability::Controllable => ControlState::ObjectControl,
            Capability::Waypoint => ControlState::MoveToPoint,
            Capability::PopupTrigger(_) => ControlState::PopupEvent,
            Capability::Plain => ControlState::CameraControl,
        }
    }
}

/// Resolve the node under a click ray
pub fn resolve<S: SceneQuery + ?Sized>(tags: &TagSet, scene: &S, ray: &Ray) -> Target {
    match scene.cast_ray(ray) {
        Some(hit) => Target {
            node: Some(hit.node),
            capability: Capability::of(tags, scene, hit.node),
        },
        None => Target::EMPTY,
    }
}
