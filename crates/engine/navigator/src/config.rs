//! Navigator configuration
//!
//! Loaded from TOML. Every section is optional and falls back to the
//! shipped defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! [movement]
//! click_move = "to_closest_waypoint"
//! look_at_on_move = true
//!
//! [fov]
//! min = 30.0
//! max = 80.0
//!
//! [collider]
//! shape = "capsule"
//! radius = 0.3
//! height = 1.8
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::capability::TagSet;
use crate::collider::BodyCollider;
use crate::error::{Error, Result};

/// What a plain click (not a drag) on empty space does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickMoveMode {
    /// Clicks do not move the camera
    #[default]
    None,
    /// Step forward along the clicked direction
    Freewalk,
    /// Walk to the nearest registered waypoint ahead
    ToClosestWaypoint,
}

/// Drag-to-rotate settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Degrees per pixel: `x` drives pitch (vertical drag), `y` drives yaw
    pub speed: Vec2,
    /// Invert the horizontal drag direction for the camera
    pub reverse_horizontal: bool,
    /// Invert the vertical drag direction for the camera
    pub reverse_vertical: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            speed: Vec2::new(0.05, 0.05),
            reverse_horizontal: false,
            reverse_vertical: false,
        }
    }
}

/// Click-to-move settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub click_move: ClickMoveMode,
    /// Freewalk step length (also the preview cast length)
    pub rate: f32,
    /// Fraction of the remaining distance covered each tick, in [0, 1]
    pub smoothing: f32,
    /// Turn to face the destination while moving to a waypoint
    pub look_at_on_move: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            click_move: ClickMoveMode::None,
            rate: 1.0,
            smoothing: 0.1,
            look_at_on_move: false,
        }
    }
}

/// Closest-waypoint search settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaypointConfig {
    /// How far along the click ray the search origin sits
    pub detect_origin_distance: f32,
    /// Minimum dot product between the body's forward and the direction to
    /// a waypoint for it to count as "ahead"
    pub forward_range: f32,
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            detect_origin_distance: 3.0,
            forward_range: 0.5,
        }
    }
}

/// Field-of-view zoom settings (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FovConfig {
    /// Degrees per scroll unit
    pub rate: f32,
    /// Degrees per pixel of pinch spread change
    pub pinch_rate: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            rate: 10.0,
            pinch_rate: 0.05,
            min: 30.0,
            max: 80.0,
        }
    }
}

/// Obstacle avoidance settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Only effective when a [`BodyCollider`] is configured as well
    pub enabled: bool,
    /// How far the destination is pushed away per tick of overlap
    pub bound_distance: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bound_distance: 0.5,
        }
    }
}

/// Ground-following settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub enabled: bool,
    /// Hold the current height when nothing is below instead of falling
    pub stay_height_on_no_ground: bool,
    /// Target eye height above ground
    pub height: f32,
    /// Dead band around the target height
    pub tolerance: f32,
    /// Fraction of the height error corrected per tick
    pub uplift_scale: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stay_height_on_no_ground: true,
            height: 1.7,
            tolerance: 0.05,
            uplift_scale: 0.1,
        }
    }
}

/// Complete navigator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub rotation: RotationConfig,
    pub movement: MovementConfig,
    pub waypoints: WaypointConfig,
    pub fov: FovConfig,
    pub collision: CollisionConfig,
    pub ground: GroundConfig,
    pub tags: TagSet,
    /// Shape of the controlled body; `None` disables collision avoidance
    pub collider: Option<BodyCollider>,
}

impl NavigatorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded navigator config");
        Ok(config)
    }

    /// Serialize to a pretty TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Whether obstacle avoidance can run (enabled and a collider exists)
    pub fn collision_active(&self) -> bool {
        self.collision.enabled && self.collider.is_some()
    }

    /// Check ranges and consistency
    pub fn validate(&self) -> Result<()> {
        let fov = &self.fov;
        if !(fov.min > 0.0 && fov.max < 180.0 && fov.min <= fov.max) {
            return Err(invalid(format!(
                "fov range [{}, {}] must satisfy 0 < min <= max < 180",
                fov.min, fov.max
            )));
        }

        if !(0.0..=1.0).contains(&self.movement.smoothing) {
            return Err(invalid(format!(
                "movement.smoothing {} must be in [0, 1]",
                self.movement.smoothing
            )));
        }

        if !(-1.0..=1.0).contains(&self.waypoints.forward_range) {
            return Err(invalid(format!(
                "waypoints.forward_range {} must be in [-1, 1]",
                self.waypoints.forward_range
            )));
        }

        let non_negative = [
            ("ground.height", self.ground.height),
            ("ground.tolerance", self.ground.tolerance),
            ("ground.uplift_scale", self.ground.uplift_scale),
            ("collision.bound_distance", self.collision.bound_distance),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(invalid(format!("{name} {value} must not be negative")));
            }
        }

        self.tags.validate()?;

        if let Some(collider) = &self.collider {
            collider.validate()?;
        }

        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::Axis;

    #[test]
    fn test_default_config() {
        let config = NavigatorConfig::default();
        assert_eq!(config.rotation.speed, Vec2::new(0.05, 0.05));
        assert_eq!(config.movement.click_move, ClickMoveMode::None);
        assert_eq!(config.fov.min, 30.0);
        assert_eq!(config.fov.max, 80.0);
        assert!(config.ground.stay_height_on_no_ground);
        assert!(config.collider.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = NavigatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, NavigatorConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = NavigatorConfig::from_toml_str(
            r#"
            [rotation]
            speed = [0.1, 0.2]
            reverse_vertical = true

            [movement]
            click_move = "to_closest_waypoint"

            [collider]
            shape = "capsule"
            radius = 0.25
            height = 2.0
            axis = "y"
            "#,
        )
        .unwrap();

        assert_eq!(config.rotation.speed, Vec2::new(0.1, 0.2));
        assert!(config.rotation.reverse_vertical);
        assert!(!config.rotation.reverse_horizontal);
        assert_eq!(config.movement.click_move, ClickMoveMode::ToClosestWaypoint);
        assert_eq!(config.movement.rate, 1.0);
        match config.collider {
            Some(BodyCollider::Capsule { radius, height, axis, .. }) => {
                assert_eq!(radius, 0.25);
                assert_eq!(height, 2.0);
                assert_eq!(axis, Axis::Y);
            }
            other => panic!("expected capsule, got {other:?}"),
        }
    }

    #[test]
    fn test_collision_needs_collider() {
        let mut config = NavigatorConfig::default();
        config.collision.enabled = true;
        assert!(!config.collision_active());

        config.collider = Some(BodyCollider::sphere(0.5));
        assert!(config.collision_active());
    }

    #[test]
    fn test_rejects_inverted_fov_range() {
        let err = NavigatorConfig::from_toml_str("[fov]\nmin = 90.0\nmax = 40.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_smoothing_out_of_range() {
        let mut config = NavigatorConfig::default();
        config.movement.smoothing = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_distances() {
        let mut config = NavigatorConfig::default();
        config.ground.tolerance = f32::NAN;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = NavigatorConfig::default();
        config.collision.bound_distance = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_click_mode() {
        let err = NavigatorConfig::from_toml_str("[movement]\nclick_move = \"teleport\"\n")
            .unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_toml_document_reloads() {
        let mut config = NavigatorConfig::default();
        config.movement.click_move = ClickMoveMode::Freewalk;
        config.ground.enabled = true;
        config.collider = Some(BodyCollider::sphere(0.4));

        let text = config.to_toml_string().unwrap();
        assert_eq!(NavigatorConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[movement]\nclick_move = \"freewalk\"\nrate = 2.5\n\n[ground]\nenabled = true\n"
        )
        .unwrap();

        let config = NavigatorConfig::load(file.path()).unwrap();
        assert_eq!(config.movement.click_move, ClickMoveMode::Freewalk);
        assert_eq!(config.movement.rate, 2.5);
        assert!(config.ground.enabled);
        assert_eq!(config.ground.height, GroundConfig::default().height);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = NavigatorConfig::load("/nonexistent/navigator.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
