//! Shape of the controlled body
//!
//! Used to sweep the body along a pending move and to preview freewalk
//! steps. Only spheres and capsules can be swept; any other body shape is
//! expressed by leaving the collider unset, which disables avoidance.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scene::CastShape;

/// Capsule axis in body-local space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Collider attached to the controlled body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum BodyCollider {
    /// Sphere around `center` (body-local)
    Sphere {
        #[serde(default)]
        center: Vec3,
        radius: f32,
    },
    /// Capsule around `center` (body-local), `height` includes both caps
    Capsule {
        #[serde(default)]
        center: Vec3,
        radius: f32,
        height: f32,
        #[serde(default)]
        axis: Axis,
    },
}

impl BodyCollider {
    /// Sphere centred on the body origin
    pub fn sphere(radius: f32) -> Self {
        BodyCollider::Sphere {
            center: Vec3::ZERO,
            radius,
        }
    }

    /// Upright capsule centred on the body origin
    pub fn capsule(radius: f32, height: f32) -> Self {
        BodyCollider::Capsule {
            center: Vec3::ZERO,
            radius,
            height,
            axis: Axis::Y,
        }
    }

    /// World-space shape for a body at `position` with `rotation`
    pub fn cast_shape(&self, position: Vec3, rotation: Quat) -> CastShape {
        match *self {
            BodyCollider::Sphere { center, radius } => CastShape::Sphere {
                center: position + rotation * center,
                radius,
            },
            BodyCollider::Capsule {
                center,
                radius,
                height,
                axis,
            } => {
                // Offset from the capsule centre to each cap's sphere centre
                let half_segment = axis.unit() * (height / 2.0 - radius);
                let origin = position + rotation * center;
                CastShape::Capsule {
                    a: origin + rotation * half_segment,
                    b: origin - rotation * half_segment,
                    radius,
                }
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            BodyCollider::Sphere { radius, .. } if radius <= 0.0 => Err(Error::InvalidConfig(
                format!("collider radius {radius} must be positive"),
            )),
            BodyCollider::Capsule { radius, .. } if radius <= 0.0 => Err(Error::InvalidConfig(
                format!("collider radius {radius} must be positive"),
            )),
            BodyCollider::Capsule { radius, height, .. } if height < 2.0 * radius => {
                Err(Error::InvalidConfig(format!(
                    "capsule height {height} must be at least twice its radius {radius}"
                )))
            }
            _ => Ok(()),
        }
    }
}
