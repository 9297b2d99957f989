//! Motion integration
//!
//! Moves the rig toward the desired position produced by the state machine:
//! ground following and obstacle rebound adjust the destination, a forward
//! sweep cancels moves into obstacles, then the rig eases toward the
//! destination by a fixed fraction per tick.

use glam::{Quat, Vec3};

use crate::capability::TagSet;
use crate::config::{GroundConfig, NavigatorConfig};
use crate::rig::CameraRig;
use crate::scene::{Ray, SceneQuery};
use crate::session::ControlState;

/// Distance at which the rig snaps onto its destination
pub const ARRIVAL_EPSILON: f32 = 0.01;

/// Fraction of the remaining turn applied per tick while facing a waypoint
pub const LOOK_BLEND: f32 = 0.1;

/// Downward speed of free fall (units per second)
pub const FALL_SPEED: f32 = 9.8;

/// Hits farther below than this are not ground
pub const GROUND_SCAN_RANGE: f32 = 100.0;

/// Where the rig is heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTarget {
    desired: Vec3,
    orientation: Option<Quat>,
    settled: bool,
}

impl MotionTarget {
    /// A target already reached at `position`
    pub fn at(position: Vec3) -> Self {
        Self {
            desired: position,
            orientation: None,
            settled: true,
        }
    }

    /// Desired position
    pub fn desired(&self) -> Vec3 {
        self.desired
    }

    /// Desired heading while moving to a waypoint
    pub fn orientation(&self) -> Option<Quat> {
        self.orientation
    }

    /// Whether the rig has reached the latest destination
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Set a new destination (counts as a fresh move even if unchanged)
    pub fn set(&mut self, desired: Vec3) {
        self.desired = desired;
        self.settled = false;
    }

    /// Shift the destination without starting a new move
    ///
    /// Ground and obstacle corrections use this, so they never count as
    /// reaching a destination.
    pub fn nudge(&mut self, delta: Vec3) {
        self.desired += delta;
    }

    /// Face `orientation` while moving
    pub fn face(&mut self, orientation: Quat) {
        self.orientation = Some(orientation);
    }

    /// Drop the pending move: the destination becomes `current`
    pub fn collapse(&mut self, current: Vec3) {
        self.desired = current;
        self.orientation = None;
        self.settled = true;
    }
}

/// Obstacle overlap state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionState {
    /// Overlapping a non-event obstacle; new interactions are suppressed
    pub is_bounded: bool,
    /// Horizontal direction from the obstacle toward the body
    pub rebound: Vec3,
}

/// Result of the downward ground scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundProbe {
    /// Nearest qualifying ground below, at this distance
    Grounded { distance: f32 },
    /// Nothing qualifying below
    NoGround,
}

/// Owns the motion target and collision state
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    target: MotionTarget,
    collision: CollisionState,
}

impl MotionIntegrator {
    /// Start at rest at `position`
    pub fn new(position: Vec3) -> Self {
        Self {
            target: MotionTarget::at(position),
            collision: CollisionState::default(),
        }
    }

    pub fn target(&self) -> &MotionTarget {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut MotionTarget {
        &mut self.target
    }

    pub fn collision(&self) -> &CollisionState {
        &self.collision
    }

    /// Adjust the destination height toward `config.height` above ground
    ///
    /// The nearest non-event hit below the body is ground. Far above ground
    /// (more than twice the target height) or with no ground at all, the body
    /// falls linearly; closer deviations are corrected proportionally.
    pub fn follow_ground<S: SceneQuery + ?Sized>(
        &mut self,
        config: &GroundConfig,
        tags: &TagSet,
        scene: &S,
        body: Vec3,
        dt: f32,
    ) -> GroundProbe {
        let ray = Ray::new(body, Vec3::NEG_Y);
        let ground = scene
            .cast_ray_all(&ray, GROUND_SCAN_RANGE)
            .into_iter()
            .filter(|hit| hit.distance < GROUND_SCAN_RANGE)
            .filter(|hit| !tags.is_event(scene.tag(hit.node)))
            .map(|hit| hit.distance)
            .min_by(f32::total_cmp);

        let fall = Vec3::new(0.0, -FALL_SPEED * dt, 0.0);

        let Some(distance) = ground else {
            if !config.stay_height_on_no_ground {
                self.target.nudge(fall);
            }
            tracing::trace!("no ground below body");
            return GroundProbe::NoGround;
        };

        let uplift = Vec3::new(0.0, (config.height - distance) * config.uplift_scale, 0.0);
        if distance > config.height + config.tolerance {
            if distance > config.height * 2.0 {
                self.target.nudge(fall);
            } else {
                self.target.nudge(uplift);
            }
        } else if distance < config.height - config.tolerance {
            self.target.nudge(uplift);
        }

        tracing::trace!(distance, "ground below body");
        GroundProbe::Grounded { distance }
    }

    /// Overlapping an obstacle: push the destination away from it
    pub fn bound(&mut self, body: Vec3, obstacle: Vec3, distance: f32) {
        let rebound = (body - Vec3::new(obstacle.x, body.y, obstacle.z)).normalize_or_zero();
        if !self.collision.is_bounded {
            tracing::debug!(?rebound, "bounded by obstacle");
        }
        self.collision = CollisionState {
            is_bounded: true,
            rebound,
        };
        self.target.nudge(rebound * distance);
    }

    /// Overlap ended
    pub fn unbound(&mut self) {
        if self.collision.is_bounded {
            tracing::debug!("left obstacle");
        }
        self.collision.is_bounded = false;
    }

    /// Teleport: both the rig and the destination move to `position`
    pub fn warp(&mut self, rig: &mut CameraRig, position: Vec3) {
        rig.position = position;
        self.target.collapse(position);
    }

    /// Cancel the pending move if the body would strike an obstacle
    ///
    /// Waypoint transit is never guarded. Returns `true` when the move was
    /// cancelled.
    pub fn guard_motion<S: SceneQuery + ?Sized>(
        &mut self,
        config: &NavigatorConfig,
        scene: &S,
        rig: &CameraRig,
        state: ControlState,
    ) -> bool {
        if state == ControlState::MoveToPoint || !config.collision_active() {
            return false;
        }

        let delta = self.target.desired - rig.position;
        let reach = config.movement.rate * config.movement.smoothing;
        if !path_blocked(config, scene, rig, delta, reach) {
            return false;
        }

        tracing::debug!(?delta, "move blocked by obstacle");
        self.target.collapse(rig.position);
        true
    }

    /// Ease the rig toward the destination
    ///
    /// Returns `true` on the tick the rig arrives at a new destination.
    pub fn integrate<S: SceneQuery + ?Sized>(
        &mut self,
        config: &NavigatorConfig,
        scene: &S,
        rig: &mut CameraRig,
        state: ControlState,
    ) -> bool {
        if rig.position.distance(self.target.desired) > ARRIVAL_EPSILON {
            self.guard_motion(config, scene, rig, state);

            rig.position = rig.position.lerp(self.target.desired, config.movement.smoothing);

            if state == ControlState::MoveToPoint && config.movement.look_at_on_move {
                if let Some(orientation) = self.target.orientation {
                    rig.heading = rig.heading.slerp(orientation, LOOK_BLEND);
                }
            }
        }

        if rig.position.distance(self.target.desired) > ARRIVAL_EPSILON {
            return false;
        }

        rig.position = self.target.desired;
        if self.target.settled {
            return false;
        }
        self.target.settled = true;
        self.target.orientation = None;
        true
    }
}

/// Whether sweeping the body collider along `delta` for `reach` strikes a
/// non-event node
pub fn path_blocked<S: SceneQuery + ?Sized>(
    config: &NavigatorConfig,
    scene: &S,
    rig: &CameraRig,
    delta: Vec3,
    reach: f32,
) -> bool {
    let Some(collider) = &config.collider else {
        return false;
    };
    let direction = delta.normalize_or_zero();
    if direction == Vec3::ZERO {
        return false;
    }

    let shape = collider.cast_shape(rig.position, rig.heading);
    scene
        .cast_shape(&shape, direction, reach)
        .is_some_and(|hit| !config.tags.is_event(scene.tag(hit.node)))
}
