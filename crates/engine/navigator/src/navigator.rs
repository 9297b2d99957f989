//! Navigator facade
//!
//! Runs one tick in a fixed order: classify input, step the state machine,
//! follow the ground, integrate motion, then zoom. Later stages read what
//! earlier stages wrote in the same tick, never the other way round.

use devices::{MouseState, PointerClassifier, TouchState};
use glam::{Vec2, Vec3};

use crate::config::NavigatorConfig;
use crate::controller::{freewalk_step, InteractionMachine, TickContext};
use crate::fov::FovController;
use crate::motion::{path_blocked, CollisionState, MotionIntegrator};
use crate::rig::CameraRig;
use crate::scene::{NodeId, Scene, SceneQuery};
use crate::session::{ControlState, InteractionSession};
use crate::waypoint::WaypointRegistry;

/// Where a freewalk click would lead
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePreview {
    /// Destination of the step
    pub destination: Vec3,
    /// The body would strike an obstacle within one step
    pub blocked: bool,
}

/// Per-frame camera and object interaction controller
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigatorConfig,
    camera: Option<CameraRig>,
    classifier: PointerClassifier,
    machine: InteractionMachine,
    motion: MotionIntegrator,
    waypoints: WaypointRegistry,
}

impl Navigator {
    /// Create a navigator without a camera rig (ticks are no-ops until one is set)
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            config,
            camera: None,
            classifier: PointerClassifier::new(),
            machine: InteractionMachine::new(),
            motion: MotionIntegrator::new(Vec3::ZERO),
            waypoints: WaypointRegistry::new(),
        }
    }

    /// Builder: attach the controlled camera rig
    pub fn with_camera(mut self, rig: CameraRig) -> Self {
        self.set_camera(rig);
        self
    }

    /// Attach or replace the camera rig; the destination resets to its position
    pub fn set_camera(&mut self, rig: CameraRig) {
        self.motion = MotionIntegrator::new(rig.position);
        self.camera = Some(rig);
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn rig(&self) -> Option<&CameraRig> {
        self.camera.as_ref()
    }

    pub fn state(&self) -> ControlState {
        self.machine.state()
    }

    pub fn session(&self) -> &InteractionSession {
        self.machine.session()
    }

    pub fn collision(&self) -> &CollisionState {
        self.motion.collision()
    }

    pub fn waypoints(&self) -> &WaypointRegistry {
        &self.waypoints
    }

    /// Current destination of the rig
    pub fn desired_position(&self) -> Vec3 {
        self.motion.target().desired()
    }

    /// Node hit by the current interaction, while it is still valid
    pub fn current_hit(&self) -> Option<NodeId> {
        self.machine.session().hit()
    }

    /// Whether an exclusive interaction (waypoint move, popup) is running
    pub fn is_event_invoked(&self) -> bool {
        self.machine.is_event_invoked()
    }

    /// Add a waypoint; call before [`Navigator::start`]
    pub fn register_waypoint(&mut self, node: NodeId) {
        self.waypoints.register(node);
    }

    /// Tag registered waypoints in the scene and settle on the rig's position
    pub fn start<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        for &node in self.waypoints.nodes() {
            scene.assign_tag(node, &self.config.tags.waypoint);
        }
        if let Some(rig) = &self.camera {
            self.motion.target_mut().collapse(rig.position);
        }
        tracing::debug!(waypoints = self.waypoints.len(), "navigator started");
    }

    /// Run one frame
    pub fn tick<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        touches: &TouchState,
        mouse: &MouseState,
        dt: f32,
    ) {
        let Some(rig) = self.camera.as_mut() else {
            tracing::warn!("no camera rig, tick skipped");
            return;
        };

        let sample = self.classifier.classify(touches, mouse);

        if !self.motion.collision().is_bounded {
            let mut ctx = TickContext {
                config: &self.config,
                scene: &mut *scene,
                rig: &mut *rig,
                target: self.motion.target_mut(),
                waypoints: &self.waypoints,
            };
            self.machine.step(&sample, &mut ctx);
        }

        if self.config.ground.enabled {
            self.motion.follow_ground(
                &self.config.ground,
                &self.config.tags,
                &*scene,
                rig.position,
                dt,
            );
        }

        if self.motion.integrate(&self.config, &*scene, rig, self.machine.state()) {
            self.machine.arrived();
        }

        FovController::new(&self.config.fov).apply(&sample, self.machine.state(), rig);
    }

    /// Force the idle state and forget the current hit and popup
    pub fn reset_state(&mut self) {
        self.machine.reset();
    }

    /// Teleport the rig, bypassing smoothing
    pub fn warp_to(&mut self, position: Vec3) {
        match self.camera.as_mut() {
            Some(rig) => self.motion.warp(rig, position),
            None => tracing::debug!("warp ignored, no camera rig"),
        }
    }

    /// Set the destination; the rig eases there over the following ticks
    pub fn move_to(&mut self, position: Vec3) {
        self.motion.target_mut().set(position);
    }

    /// The body keeps overlapping `node` this physics step
    pub fn overlap_stay<S: SceneQuery + ?Sized>(&mut self, scene: &S, node: NodeId) {
        if !self.config.collision_active()
            || self.machine.state() == ControlState::MoveToPoint
            || self.config.tags.is_event(scene.tag(node))
        {
            return;
        }
        let (Some(rig), Some(obstacle)) = (&self.camera, scene.position(node)) else {
            return;
        };
        self.motion
            .bound(rig.position, obstacle, self.config.collision.bound_distance);
    }

    /// The body stopped overlapping `node`
    pub fn overlap_exit<S: SceneQuery + ?Sized>(&mut self, scene: &S, node: NodeId) {
        if self.config.tags.is_event(scene.tag(node)) {
            return;
        }
        self.motion.unbound();
    }

    /// Where a freewalk click at `cursor` would lead, and whether it is blocked
    pub fn preview_freewalk<S: SceneQuery + ?Sized>(
        &self,
        scene: &S,
        cursor: Vec2,
    ) -> Option<MovePreview> {
        let rig = self.camera.as_ref()?;
        let rate = self.config.movement.rate;
        let step = freewalk_step(&rig.screen_ray(cursor), rate);

        Some(MovePreview {
            destination: rig.position + step,
            blocked: path_blocked(&self.config, scene, rig, step, rate),
        })
    }
}
