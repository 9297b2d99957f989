//! Interaction session state
//!
//! Everything the state machine remembers between ticks lives here, so each
//! stage receives it explicitly instead of reaching for ambient fields.

use glam::Vec2;

use crate::scene::{NodeId, PopupHandle};

/// Cursor travel below which a press/release pair counts as a click (pixels)
pub const CLICK_EPSILON: f32 = 0.1;

/// Which behaviour consumes drag input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    None,
    /// Drag rotates the camera
    CameraControl,
    /// Drag rotates the clicked node
    ObjectControl,
    /// Moving to a waypoint (drag still looks around)
    MoveToPoint,
    /// A popup is open
    PopupEvent,
}

impl ControlState {
    /// `MoveToPoint` and `PopupEvent` exclude ordinary camera and zoom control
    pub fn is_event_exclusive(self) -> bool {
        matches!(self, ControlState::MoveToPoint | ControlState::PopupEvent)
    }
}

/// Reference to the node hit by the last input-begin
///
/// Valid only within the interaction cycle that produced it; every begin or
/// end boundary advances the session epoch and invalidates older refs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRef {
    pub node: NodeId,
    epoch: u64,
}

/// Per-interaction bookkeeping owned by the state machine
#[derive(Debug, Clone, Default)]
pub struct InteractionSession {
    /// Cursor at input-begin
    pub initial_cursor: Vec2,
    /// Cursor at the last processed drag
    pub last_cursor: Vec2,
    /// Camera (pitch, yaw) in degrees
    pub camera_angle: Vec2,
    /// Controlled node (pitch, yaw) in degrees
    pub object_angle: Vec2,
    /// Popup opened by this session, if any
    pub popup: Option<PopupHandle>,
    /// Waypoint chosen by the last closest-waypoint click
    pub last_waypoint: Option<NodeId>,
    hit: Option<HitRef>,
    epoch: u64,
}

impl InteractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cross an input boundary: any outstanding [`HitRef`] becomes stale
    pub fn advance_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Remember the node hit in the current cycle
    pub fn bind_hit(&mut self, node: NodeId) -> HitRef {
        let hit = HitRef {
            node,
            epoch: self.epoch,
        };
        self.hit = Some(hit);
        hit
    }

    /// The current cycle's hit, if it is still valid
    pub fn hit(&self) -> Option<NodeId> {
        self.hit.and_then(|hit| self.resolve(hit))
    }

    /// Dereference a ref, failing once its cycle has ended
    pub fn resolve(&self, hit: HitRef) -> Option<NodeId> {
        (hit.epoch == self.epoch).then_some(hit.node)
    }

    /// Start measuring drag distance from `cursor`
    pub fn rebaseline(&mut self, cursor: Vec2) {
        self.initial_cursor = cursor;
        self.last_cursor = cursor;
    }

    /// Cursor travel between begin and the last processed drag
    pub fn drag_distance(&self) -> f32 {
        self.initial_cursor.distance(self.last_cursor)
    }

    /// Whether the gesture so far is a click rather than a drag
    pub fn is_click(&self) -> bool {
        self.drag_distance() < CLICK_EPSILON
    }

    /// Forget the hit and popup (the external reset)
    pub fn clear(&mut self) {
        self.advance_epoch();
        self.hit = None;
        self.popup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_exclusive_states() {
        assert!(ControlState::MoveToPoint.is_event_exclusive());
        assert!(ControlState::PopupEvent.is_event_exclusive());
        assert!(!ControlState::None.is_event_exclusive());
        assert!(!ControlState::CameraControl.is_event_exclusive());
        assert!(!ControlState::ObjectControl.is_event_exclusive());
    }

    #[test]
    fn test_hit_ref_expires_at_boundary() {
        let mut session = InteractionSession::new();
        let hit = session.bind_hit(NodeId(4));
        assert_eq!(session.hit(), Some(NodeId(4)));
        assert_eq!(session.resolve(hit), Some(NodeId(4)));

        session.advance_epoch();
        assert_eq!(session.hit(), None);
        assert_eq!(session.resolve(hit), None);
    }

    #[test]
    fn test_click_threshold() {
        let mut session = InteractionSession::new();
        session.rebaseline(Vec2::new(10.0, 10.0));
        assert!(session.is_click());

        session.last_cursor = Vec2::new(10.05, 10.0);
        assert!(session.is_click());

        session.last_cursor = Vec2::new(10.2, 10.0);
        assert!(!session.is_click());
    }

    #[test]
    fn test_clear_drops_popup_and_hit() {
        let mut session = InteractionSession::new();
        session.bind_hit(NodeId(1));
        session.popup = Some(PopupHandle(2));
        session.last_waypoint = Some(NodeId(3));

        session.clear();
        assert_eq!(session.hit(), None);
        assert_eq!(session.popup, None);
        // The last chosen waypoint survives a reset
        assert_eq!(session.last_waypoint, Some(NodeId(3)));
    }
}
