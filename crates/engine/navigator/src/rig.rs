//! Camera rig: the controlled body and its camera
//!
//! The body carries position and a yaw-only heading. The camera sits at the
//! body origin and adds its own pitch and vertical field of view.
//!
//! # Coordinate System
//!
//! Uses OpenGL convention:
//! - +X is right
//! - +Y is up
//! - -Z is forward (into the screen)
//!
//! Screen coordinates are pixels with the origin at the bottom-left.

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::scene::Ray;

/// Default vertical field of view in degrees
pub const DEFAULT_FOV: f32 = 60.0;

/// The controlled body plus camera parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Body position in world space
    pub position: Vec3,
    /// Body orientation (yaw only)
    pub heading: Quat,
    /// Camera pitch in degrees, positive looks up
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl CameraRig {
    /// Create a level rig facing -Z
    pub fn new(position: Vec3, viewport: Vec2) -> Self {
        Self {
            position,
            heading: Quat::IDENTITY,
            pitch: 0.0,
            fov: DEFAULT_FOV,
            viewport,
        }
    }

    /// Builder: set the yaw in degrees
    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.set_yaw_degrees(yaw);
        self
    }

    /// Builder: set the field of view in degrees
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Body yaw in degrees
    pub fn yaw_degrees(&self) -> f32 {
        let (yaw, _, _) = self.heading.to_euler(EulerRot::YXZ);
        yaw.to_degrees()
    }

    /// Replace the heading with a pure yaw in degrees
    pub fn set_yaw_degrees(&mut self, yaw: f32) {
        self.heading = Quat::from_rotation_y(yaw.to_radians());
    }

    /// Camera orientation: heading, then pitch about the local X axis
    pub fn camera_rotation(&self) -> Quat {
        self.heading * Quat::from_rotation_x(self.pitch.to_radians())
    }

    /// Body forward direction (horizontal)
    pub fn forward(&self) -> Vec3 {
        self.heading * Vec3::NEG_Z
    }

    /// Camera view direction
    pub fn view_forward(&self) -> Vec3 {
        self.camera_rotation() * Vec3::NEG_Z
    }

    /// Ray from the camera through a screen point
    ///
    /// Falls back to the view direction when the viewport is degenerate.
    pub fn screen_ray(&self, cursor: Vec2) -> Ray {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Ray::new(self.position, self.view_forward());
        }

        let ndc = cursor / self.viewport * 2.0 - Vec2::ONE;
        let aspect = self.viewport.x / self.viewport.y;
        let tan_half = (self.fov.to_radians() / 2.0).tan();
        let local = Vec3::new(ndc.x * aspect * tan_half, ndc.y * tan_half, -1.0);

        Ray::new(self.position, self.camera_rotation() * local)
    }

    /// Yaw-only heading that faces `target` from the current position
    ///
    /// Returns the current heading when the target is straight above or below.
    pub fn look_heading(&self, target: Vec3) -> Quat {
        let to_target = target - self.position;
        if to_target.x.abs() < f32::EPSILON && to_target.z.abs() < f32::EPSILON {
            return self.heading;
        }
        Quat::from_rotation_y((-to_target.x).atan2(-to_target.z))
    }
}
