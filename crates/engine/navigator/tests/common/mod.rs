//! In-memory scene and input driver for navigator integration tests

#![allow(dead_code)]

use glam::{Vec2, Vec3};
use navigator::devices::{MouseButtonType, MouseState, TouchPoint, TouchState};
use navigator::{
    CameraRig, CastShape, Navigator, NavigatorConfig, NodeId, PopupHandle, Ray, RayHit,
    SceneEvents, SceneQuery,
};

pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);
pub const CENTER: Vec2 = Vec2::new(400.0, 300.0);
pub const EYE: Vec3 = Vec3::new(0.0, 1.7, 0.0);

/// Install a test subscriber once (filter with `RUST_LOG`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Node geometry
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Solid sphere
    Sphere { radius: f32 },
    /// Infinite horizontal floor at the node's height, hit from above only
    Floor,
    /// Position only, never hit
    Marker,
}

#[derive(Debug, Clone)]
pub struct MockNode {
    pub position: Vec3,
    pub shape: Shape,
    pub tag: Option<String>,
    pub popup: Option<PopupHandle>,
    pub euler: Vec2,
}

/// Effects the navigator fired into the scene
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    Euler(NodeId, Vec2),
    Open(PopupHandle),
    Close(PopupHandle),
    Arrival(NodeId),
    Tag(NodeId, String),
}

#[derive(Debug, Default)]
pub struct MockScene {
    pub nodes: Vec<MockNode>,
    /// Screen rectangles (min, max) covered by overlay UI
    pub ui: Vec<(Vec2, Vec2)>,
    pub events: Vec<SceneEvent>,
}

impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, position: Vec3, shape: Shape, tag: Option<&str>) -> NodeId {
        self.nodes.push(MockNode {
            position,
            shape,
            tag: tag.map(str::to_string),
            popup: None,
            euler: Vec2::ZERO,
        });
        NodeId(self.nodes.len() as u32 - 1)
    }

    pub fn sphere(&mut self, position: Vec3, radius: f32, tag: Option<&str>) -> NodeId {
        self.add(position, Shape::Sphere { radius }, tag)
    }

    pub fn floor(&mut self, height: f32) -> NodeId {
        self.add(Vec3::new(0.0, height, 0.0), Shape::Floor, None)
    }

    pub fn marker(&mut self, position: Vec3) -> NodeId {
        self.add(position, Shape::Marker, None)
    }

    pub fn node_mut(&mut self, node: NodeId) -> &mut MockNode {
        &mut self.nodes[node.0 as usize]
    }

    fn node(&self, node: NodeId) -> Option<&MockNode> {
        self.nodes.get(node.0 as usize)
    }

    fn hits(&self, ray: &Ray) -> impl Iterator<Item = RayHit> + '_ {
        let ray = *ray;
        self.nodes.iter().enumerate().filter_map(move |(i, node)| {
            let distance = match node.shape {
                Shape::Sphere { radius } => ray_sphere(&ray, node.position, radius)?,
                Shape::Floor => ray_floor(&ray, node.position.y)?,
                Shape::Marker => return None,
            };
            Some(RayHit {
                node: NodeId(i as u32),
                distance,
                point: ray.at(distance),
            })
        })
    }
}

/// Entry distance of a ray into a sphere; rays starting inside never hit
fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return None;
    }
    let b = oc.dot(ray.direction);
    let discriminant = b * b - c;
    if b > 0.0 || discriminant < 0.0 {
        return None;
    }
    Some(-b - discriminant.sqrt())
}

fn ray_floor(ray: &Ray, height: f32) -> Option<f32> {
    if ray.direction.y >= 0.0 || ray.origin.y < height {
        return None;
    }
    Some((ray.origin.y - height) / -ray.direction.y)
}

impl SceneQuery for MockScene {
    fn cast_ray(&self, ray: &Ray) -> Option<RayHit> {
        self.hits(ray).min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn cast_ray_all(&self, ray: &Ray, max_distance: f32) -> Vec<RayHit> {
        self.hits(ray)
            .filter(|hit| hit.distance <= max_distance)
            .collect()
    }

    /// Spheres only: floors never block sideways sweeps
    fn cast_shape(&self, shape: &CastShape, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let (centers, radius) = match *shape {
            CastShape::Sphere { center, radius } => (vec![center], radius),
            CastShape::Capsule { a, b, radius } => (vec![a, (a + b) * 0.5, b], radius),
        };

        let mut best: Option<RayHit> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let Shape::Sphere { radius: node_radius } = node.shape else {
                continue;
            };
            for &origin in &centers {
                let ray = Ray::new(origin, direction);
                let Some(distance) = ray_sphere(&ray, node.position, node_radius + radius) else {
                    continue;
                };
                if distance <= max_distance && best.map_or(true, |hit| distance < hit.distance) {
                    best = Some(RayHit {
                        node: NodeId(i as u32),
                        distance,
                        point: ray.at(distance),
                    });
                }
            }
        }
        best
    }

    fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node)?.tag.as_deref()
    }

    fn position(&self, node: NodeId) -> Option<Vec3> {
        self.node(node).map(|n| n.position)
    }

    fn local_euler(&self, node: NodeId) -> Option<Vec2> {
        self.node(node).map(|n| n.euler)
    }

    fn popup(&self, node: NodeId) -> Option<PopupHandle> {
        self.node(node)?.popup
    }

    fn is_pointer_over_ui(&self, cursor: Vec2) -> bool {
        self.ui
            .iter()
            .any(|(min, max)| cursor.cmpge(*min).all() && cursor.cmple(*max).all())
    }
}

impl SceneEvents for MockScene {
    fn set_local_euler(&mut self, node: NodeId, angles: Vec2) {
        self.node_mut(node).euler = angles;
        self.events.push(SceneEvent::Euler(node, angles));
    }

    fn open_popup(&mut self, popup: PopupHandle) {
        self.events.push(SceneEvent::Open(popup));
    }

    fn close_popup(&mut self, popup: PopupHandle) {
        self.events.push(SceneEvent::Close(popup));
    }

    fn fire_arrival(&mut self, node: NodeId) {
        self.events.push(SceneEvent::Arrival(node));
    }

    fn assign_tag(&mut self, node: NodeId, tag: &str) {
        self.node_mut(node).tag = Some(tag.to_string());
        self.events.push(SceneEvent::Tag(node, tag.to_string()));
    }
}

/// Navigator plus scene plus raw input, advanced one frame at a time
pub struct Harness {
    pub navigator: Navigator,
    pub scene: MockScene,
    pub touches: TouchState,
    pub mouse: MouseState,
    pub dt: f32,
}

impl Harness {
    pub fn new(config: NavigatorConfig, scene: MockScene) -> Self {
        init_tracing();
        let rig = CameraRig::new(EYE, VIEWPORT);
        Self {
            navigator: Navigator::new(config).with_camera(rig),
            scene,
            touches: TouchState::new(),
            mouse: MouseState::new(),
            dt: 1.0 / 60.0,
        }
    }

    pub fn rig(&self) -> &CameraRig {
        self.navigator.rig().expect("harness always has a rig")
    }

    /// Run one frame with the current raw input, then close the frame
    pub fn tick(&mut self) {
        self.navigator
            .tick(&mut self.scene, &self.touches, &self.mouse, self.dt);
        self.touches.end_frame();
        self.mouse.end_frame();
    }

    pub fn idle(&mut self, frames: usize) {
        for _ in 0..frames {
            self.tick();
        }
    }

    pub fn press(&mut self, cursor: Vec2) {
        self.mouse.move_to(cursor);
        self.mouse.button_mut(MouseButtonType::Left).press();
        self.tick();
    }

    pub fn drag_to(&mut self, cursor: Vec2) {
        self.mouse.move_to(cursor);
        self.tick();
    }

    pub fn release(&mut self) {
        self.mouse.button_mut(MouseButtonType::Left).release();
        self.tick();
    }

    pub fn click(&mut self, cursor: Vec2) {
        self.press(cursor);
        self.release();
    }

    pub fn scroll(&mut self, delta: f32) {
        self.mouse.scroll_by(delta);
        self.tick();
    }

    pub fn touch(&mut self, id: u64, position: Vec2, phase: navigator::devices::TouchPhase) {
        self.touches.update_touch(TouchPoint::new(id, position, phase));
    }

    /// Tick until the rig stops moving to a waypoint (bounded)
    pub fn run_until_arrived(&mut self, max_frames: usize) -> bool {
        for _ in 0..max_frames {
            self.tick();
            if self.navigator.state() != navigator::ControlState::MoveToPoint {
                return true;
            }
        }
        false
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

pub fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}
