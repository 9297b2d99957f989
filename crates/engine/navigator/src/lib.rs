//! Navigator crate - per-frame camera and object interaction for walkthrough scenes
//!
//! Turns classified pointer input into camera rotation, click-to-move,
//! rotation of controllable objects, popup triggers and zoom, with ground
//! following and obstacle avoidance for the controlled body.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Navigator::tick                       │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Input classification (devices::PointerClassifier)    │
//! │  2. Interaction state machine                            │
//! │     ├── Target resolution on begin (capability)          │
//! │     ├── Drag: rotate camera or object                    │
//! │     └── End: click-to-move, waypoint confirm             │
//! │  3. Ground following                                     │
//! │  4. Motion integration                                   │
//! │     ├── Forward shape-cast guard                         │
//! │     ├── Smoothed move, look-at blend                     │
//! │     └── Arrival snap                                     │
//! │  5. Field-of-view zoom                                   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The scene is never owned: queries go through [`SceneQuery`] and effects
//! through [`SceneEvents`]. Obstacle overlaps are pushed in by the host via
//! [`Navigator::overlap_stay`] and [`Navigator::overlap_exit`].
//!
//! # Example
//!
//! ```rust,ignore
//! use navigator::{CameraRig, Navigator, NavigatorConfig};
//! use navigator::devices::{MouseState, TouchState};
//! use glam::{Vec2, Vec3};
//!
//! let config = NavigatorConfig::load("navigator.toml")?;
//! let rig = CameraRig::new(Vec3::new(0.0, 1.7, 0.0), Vec2::new(1280.0, 720.0));
//! let mut navigator = Navigator::new(config).with_camera(rig);
//! navigator.start(&mut scene);
//!
//! loop {
//!     navigator.tick(&mut scene, &touches, &mouse, dt);
//!     touches.end_frame();
//!     mouse.end_frame();
//! }
//! ```

pub mod capability;
pub mod collider;
pub mod config;
pub mod controller;
pub mod error;
pub mod fov;
pub mod motion;
pub mod navigator;
pub mod resolver;
pub mod rig;
pub mod scene;
pub mod session;
pub mod waypoint;

pub use capability::{Capability, TagKind, TagSet};
pub use collider::{Axis, BodyCollider};
pub use config::{
    ClickMoveMode, CollisionConfig, FovConfig, GroundConfig, MovementConfig, NavigatorConfig,
    RotationConfig, WaypointConfig,
};
pub use controller::{InteractionMachine, TickContext};
pub use error::{Error, Result};
pub use fov::FovController;
pub use motion::{CollisionState, GroundProbe, MotionIntegrator, MotionTarget};
pub use navigator::{MovePreview, Navigator};
pub use resolver::Target;
pub use rig::CameraRig;
pub use scene::{CastShape, NodeId, PopupHandle, Ray, RayHit, Scene, SceneEvents, SceneQuery};
pub use session::{ControlState, HitRef, InteractionSession};
pub use waypoint::{WaypointQuery, WaypointRegistry};

// Re-export for convenience
pub use devices;
pub use glam;
