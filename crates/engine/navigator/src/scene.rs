//! Scene collaborator interface
//!
//! The navigator never owns the scene. It asks questions through
//! [`SceneQuery`] and pushes outcomes through [`SceneEvents`]. Both are
//! invoked synchronously within a tick and must not call back into the
//! navigator.

use glam::{Vec2, Vec3};

/// Stable handle of a scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Handle of a popup panel owned by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopupHandle(pub u32);

/// Half-line in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray or shape query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub node: NodeId,
    /// Distance from the query origin to the hit
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
}

/// World-space shape swept by [`SceneQuery::cast_shape`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CastShape {
    Sphere { center: Vec3, radius: f32 },
    /// Capsule between two sphere centres
    Capsule { a: Vec3, b: Vec3, radius: f32 },
}

/// Read-only queries against the scene
pub trait SceneQuery {
    /// Nearest hit along the ray, if any
    fn cast_ray(&self, ray: &Ray) -> Option<RayHit>;

    /// Every hit along the ray up to `max_distance`, in any order
    fn cast_ray_all(&self, ray: &Ray, max_distance: f32) -> Vec<RayHit>;

    /// Sweep `shape` along `direction` (unit) for `max_distance`;
    /// returns the first node struck
    fn cast_shape(&self, shape: &CastShape, direction: Vec3, max_distance: f32)
        -> Option<RayHit>;

    /// Classification tag of a node
    fn tag(&self, node: NodeId) -> Option<&str>;

    /// World position of a node
    fn position(&self, node: NodeId) -> Option<Vec3>;

    /// Local orientation of a node as (pitch, yaw) in degrees
    fn local_euler(&self, node: NodeId) -> Option<Vec2>;

    /// Popup attached to a popup-trigger node
    fn popup(&self, node: NodeId) -> Option<PopupHandle>;

    /// Whether the cursor is over an overlay UI element
    fn is_pointer_over_ui(&self, _cursor: Vec2) -> bool {
        false
    }
}

/// Outward effects the navigator fires into the scene
pub trait SceneEvents {
    /// Apply a new local orientation (pitch, yaw in degrees) to a node
    fn set_local_euler(&mut self, node: NodeId, angles: Vec2);

    /// Show a popup
    fn open_popup(&mut self, popup: PopupHandle);

    /// Hide a popup
    fn close_popup(&mut self, popup: PopupHandle);

    /// Fire the event registered on a waypoint when a move to it is confirmed
    fn fire_arrival(&mut self, node: NodeId);

    /// Re-tag a node (used once at start to mark registered waypoints)
    fn assign_tag(&mut self, node: NodeId, tag: &str);
}

/// A scene the navigator can both query and drive
pub trait Scene: SceneQuery + SceneEvents {}

impl<T: SceneQuery + SceneEvents> Scene for T {}
