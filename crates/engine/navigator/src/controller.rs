//! Interaction state machine
//!
//! Consumes one classified [`PointerSample`] per tick and turns it into
//! camera rotation, object rotation, move commands and popup transitions.
//!
//! ```text
//!            begin (resolve)
//!   None ─────────────────────┬──► CameraControl ──click──► MoveToPoint (closest waypoint)
//!    ▲                        ├──► ObjectControl
//!    │ idle / reset           ├──► MoveToPoint ──click──► confirm ──arrive──► CameraControl
//!    │                        └──► PopupEvent ──begin outside UI──► None
//! ```

use devices::PointerSample;
use glam::{Vec2, Vec3};

use crate::capability::Capability;
use crate::config::{ClickMoveMode, NavigatorConfig};
use crate::motion::MotionTarget;
use crate::resolver;
use crate::rig::CameraRig;
use crate::scene::{NodeId, Ray, Scene};
use crate::session::{ControlState, InteractionSession};
use crate::waypoint::{WaypointQuery, WaypointRegistry};

/// Everything a state machine step may read or drive
pub struct TickContext<'a, S: Scene + ?Sized> {
    pub config: &'a NavigatorConfig,
    pub scene: &'a mut S,
    pub rig: &'a mut CameraRig,
    pub target: &'a mut MotionTarget,
    pub waypoints: &'a WaypointRegistry,
}

/// Control state plus the session it drives
#[derive(Debug, Clone, Default)]
pub struct InteractionMachine {
    state: ControlState,
    session: InteractionSession,
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    /// `MoveToPoint` or `PopupEvent` is active
    pub fn is_event_invoked(&self) -> bool {
        self.state.is_event_exclusive()
    }

    /// Dispatch one tick of input
    pub fn step<S: Scene + ?Sized>(&mut self, sample: &PointerSample, ctx: &mut TickContext<'_, S>) {
        if sample.is_begin() {
            self.begin(sample.cursor, ctx);
        } else if sample.is_drag() {
            self.drag(sample.cursor, ctx);
        } else if sample.is_end() {
            self.end(sample.cursor, ctx);
        } else {
            self.idle();
        }
    }

    /// Pointer went down
    pub fn begin<S: Scene + ?Sized>(&mut self, cursor: Vec2, ctx: &mut TickContext<'_, S>) {
        let over_ui = ctx.scene.is_pointer_over_ui(cursor);

        if !self.state.is_event_exclusive() && !over_ui {
            self.session.advance_epoch();
            let ray = ctx.rig.screen_ray(cursor);
            let target = resolver::resolve(&ctx.config.tags, &*ctx.scene, &ray);
            if let Some(node) = target.node {
                self.session.bind_hit(node);
            }

            self.snapshot_camera(ctx.rig);
            match (target.capability, target.node) {
                (Capability::Controllable, Some(node)) => {
                    self.session.object_angle = ctx.scene.local_euler(node).unwrap_or_default();
                }
                (Capability::PopupTrigger(popup), _) => {
                    tracing::debug!(?popup, "open popup");
                    ctx.scene.open_popup(popup);
                    self.session.popup = Some(popup);
                }
                _ => {}
            }

            self.set_state(target.next_state(), "begin");
            self.session.rebaseline(cursor);
        } else if self.state == ControlState::MoveToPoint {
            // Look around mid-transit without giving up the destination
            self.snapshot_camera(ctx.rig);
            self.session.rebaseline(cursor);
        } else if self.state == ControlState::PopupEvent && !over_ui {
            if let Some(popup) = self.session.popup {
                tracing::debug!(?popup, "dismiss popup");
                ctx.scene.close_popup(popup);
                self.reset();
            }
        }
    }

    /// Pointer is held
    pub fn drag<S: Scene + ?Sized>(&mut self, cursor: Vec2, ctx: &mut TickContext<'_, S>) {
        let delta = self.drag_delta(cursor, ctx.config);

        match self.state {
            ControlState::CameraControl | ControlState::MoveToPoint => {
                let rotation = &ctx.config.rotation;
                let yaw_sign = if rotation.reverse_horizontal { -1.0 } else { 1.0 };
                let pitch_sign = if rotation.reverse_vertical { -1.0 } else { 1.0 };

                self.session.camera_angle.x += pitch_sign * delta.x;
                self.session.camera_angle.y += yaw_sign * delta.y;
                ctx.rig.pitch = self.session.camera_angle.x;
                ctx.rig.set_yaw_degrees(self.session.camera_angle.y);
            }
            ControlState::ObjectControl => {
                if let Some(node) = self.session.hit() {
                    self.session.object_angle += delta;
                    ctx.scene.set_local_euler(node, self.session.object_angle);
                }
            }
            ControlState::None | ControlState::PopupEvent => {}
        }

        if self.state != ControlState::PopupEvent {
            self.session.last_cursor = cursor;
        }
    }

    /// Pointer was released at `cursor`
    ///
    /// Click or drag is judged on the cursor travel up to the last held
    /// frame; a click move casts through the release position.
    pub fn end<S: Scene + ?Sized>(&mut self, cursor: Vec2, ctx: &mut TickContext<'_, S>) {
        let click = self.session.is_click();

        match self.state {
            ControlState::CameraControl if click => self.click_move(cursor, ctx),
            ControlState::MoveToPoint if click => self.confirm_move(ctx),
            ControlState::MoveToPoint => self.set_state(ControlState::None, "looked around"),
            _ => {}
        }

        self.session.advance_epoch();
    }

    /// No pointer activity this tick
    pub fn idle(&mut self) {
        if !self.state.is_event_exclusive() {
            self.set_state(ControlState::None, "idle");
        }
    }

    /// The rig reached its destination
    pub fn arrived(&mut self) {
        if self.state == ControlState::MoveToPoint {
            self.set_state(ControlState::CameraControl, "arrived");
        }
    }

    /// Force the idle state and drop hit and popup references
    pub fn reset(&mut self) {
        self.set_state(ControlState::None, "reset");
        self.session.clear();
    }

    fn set_state(&mut self, next: ControlState, cause: &'static str) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, cause, "control state");
            self.state = next;
        }
    }

    fn snapshot_camera(&mut self, rig: &CameraRig) {
        self.session.camera_angle = Vec2::new(rig.pitch, rig.yaw_degrees());
    }

    /// (pitch, yaw) change in degrees for a drag to `cursor`
    fn drag_delta(&self, cursor: Vec2, config: &NavigatorConfig) -> Vec2 {
        let last = self.session.last_cursor;
        let speed = config.rotation.speed;
        Vec2::new((last.y - cursor.y) * speed.x, (cursor.x - last.x) * speed.y)
    }

    /// Click on plain space while controlling the camera
    fn click_move<S: Scene + ?Sized>(&mut self, cursor: Vec2, ctx: &mut TickContext<'_, S>) {
        let ray = ctx.rig.screen_ray(cursor);

        match ctx.config.movement.click_move {
            ClickMoveMode::None => {}
            ClickMoveMode::Freewalk => {
                let step = freewalk_step(&ray, ctx.config.movement.rate);
                ctx.target.set(ctx.target.desired() + step);
            }
            ClickMoveMode::ToClosestWaypoint => {
                let Some((node, position)) = closest_waypoint(ctx, &ray, self.session.last_waypoint)
                else {
                    tracing::debug!("no waypoint ahead");
                    return;
                };

                tracing::debug!(?node, ?position, "walk to closest waypoint");
                ctx.target.set(Vec3::new(position.x, ctx.rig.position.y, position.z));
                if ctx.config.movement.look_at_on_move {
                    ctx.target.face(ctx.rig.look_heading(position));
                }
                self.session.last_waypoint = Some(node);
                self.set_state(ControlState::MoveToPoint, "closest waypoint");
            }
        }
    }

    /// Click on the waypoint hit at begin: walk there and fire its event
    fn confirm_move<S: Scene + ?Sized>(&mut self, ctx: &mut TickContext<'_, S>) {
        let Some(node) = self.session.hit() else {
            return;
        };
        let Some(position) = ctx.scene.position(node) else {
            return;
        };

        tracing::debug!(?node, ?position, "move to waypoint");
        ctx.target.set(Vec3::new(position.x, ctx.rig.position.y, position.z));
        if ctx.config.movement.look_at_on_move {
            ctx.target.face(ctx.rig.look_heading(position));
        }
        ctx.scene.fire_arrival(node);
    }
}

/// Freewalk displacement: the ray's horizontal projection scaled by `rate`
///
/// Not renormalised, so looking steeply down yields a shorter step.
pub fn freewalk_step(ray: &Ray, rate: f32) -> Vec3 {
    Vec3::new(ray.direction.x, 0.0, ray.direction.z) * rate
}

/// Closest registered waypoint ahead of the body, skipping `exclude`
pub fn closest_waypoint<S: Scene + ?Sized>(
    ctx: &TickContext<'_, S>,
    ray: &Ray,
    exclude: Option<NodeId>,
) -> Option<(NodeId, Vec3)> {
    if ctx.waypoints.is_empty() {
        return None;
    }

    let query = WaypointQuery {
        body: ctx.rig.position,
        forward: ctx.rig.forward(),
        origin: ray.at(ctx.config.waypoints.detect_origin_distance),
        forward_range: ctx.config.waypoints.forward_range,
        exclude,
    };
    ctx.waypoints.closest(&*ctx.scene, &query)
}
