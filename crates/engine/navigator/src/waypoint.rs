//! Waypoint registry and closest-waypoint search

use glam::Vec3;

use crate::scene::{NodeId, SceneQuery};

/// Waypoints farther than this from the detection origin are never chosen
pub const SEARCH_RADIUS: f32 = 100.0;

/// Parameters of one closest-waypoint search
#[derive(Debug, Clone, Copy)]
pub struct WaypointQuery {
    /// Body position
    pub body: Vec3,
    /// Body forward direction (unit)
    pub forward: Vec3,
    /// Point distances are measured from (ahead of the body along the click ray)
    pub origin: Vec3,
    /// Minimum dot product between `forward` and the direction to a waypoint
    pub forward_range: f32,
    /// Waypoint to skip (the one chosen last time)
    pub exclude: Option<NodeId>,
}

/// Ordered set of nodes that act as waypoints
///
/// Membership is fixed once the navigator starts; positions are read from
/// the scene on every search since waypoints may move.
#[derive(Debug, Clone, Default)]
pub struct WaypointRegistry {
    nodes: Vec<NodeId>,
}

impl WaypointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; registering the same node twice has no effect
    pub fn register(&mut self, node: NodeId) {
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
    }

    /// Registered nodes in registration order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nearest waypoint to `query.origin` that lies ahead of the body
    ///
    /// Ties keep the earlier registered waypoint. Nodes the scene no longer
    /// knows are skipped.
    pub fn closest<S: SceneQuery + ?Sized>(
        &self,
        scene: &S,
        query: &WaypointQuery,
    ) -> Option<(NodeId, Vec3)> {
        let mut best: Option<(NodeId, Vec3)> = None;
        let mut best_distance = SEARCH_RADIUS;

        for &node in &self.nodes {
            if query.exclude == Some(node) {
                continue;
            }
            let Some(position) = scene.position(node) else {
                continue;
            };

            let distance = query.origin.distance(position);
            let ahead = (position - query.body).normalize_or_zero().dot(query.forward);

            if distance < best_distance && ahead > query.forward_range {
                best_distance = distance;
                best = Some((node, position));
            }
        }

        best
    }
}
