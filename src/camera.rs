//! Camera system for the solar system viewer.
//!
//! A perspective camera driven by an orbit controller: left drag rotates
//! around the target, right drag pans, the scroll wheel dollies in and out.
//! Motion is damped so the view eases to a stop after input ends.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;
use std::f32::consts::FRAC_PI_2;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 35.0;

/// Near clip plane.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane.
pub const FAR_PLANE: f32 = 400.0;

/// Initial camera position.
pub const START_POSITION: Vec3 = Vec3::new(0.0, 5.0, 100.0);

/// Closest the camera may get to its target.
pub const MIN_DISTANCE: f32 = 20.0;

/// Furthest the camera may get from its target.
pub const MAX_DISTANCE: f32 = 200.0;

/// Fraction of pending motion applied per frame.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Radians of rotation per pixel of mouse drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Pan distance per pixel, as a fraction of the current distance.
pub const PAN_SPEED: f32 = 0.001;

/// Log-distance change per scroll unit.
pub const ZOOM_SPEED: f32 = 0.1;

/// Keeps the camera off the poles where `looking_at` degenerates.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Pending motion below this magnitude is dropped.
const REST_EPSILON: f32 = 1e-5;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Orbit-style camera controller.
///
/// The camera sits on a sphere around `target`, parameterized by yaw
/// (around +Y, zero looking down -Z), pitch (above the XZ plane) and distance.
#[derive(Component, Clone, Debug)]
pub struct OrbitController {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// `None` applies input immediately.
    pub damping: Option<f32>,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
    pending_pan: Vec3,
}

impl OrbitController {
    /// Build a controller whose camera starts at `eye` looking at `target`.
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        let horizontal = Vec2::new(offset.x, offset.z).length();

        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(horizontal).clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            damping: Some(DAMPING_FACTOR),
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
            pending_pan: Vec3::ZERO,
        }
    }

    pub fn with_damping(mut self, damping: Option<f32>) -> Self {
        self.damping = damping;
        self
    }

    /// Queue a rotation from a mouse drag in pixels.
    pub fn rotate(&mut self, drag: Vec2) {
        self.pending_yaw -= drag.x * ROTATE_SPEED;
        self.pending_pitch += drag.y * ROTATE_SPEED;
    }

    /// Queue a pan from a mouse drag in pixels.
    pub fn pan(&mut self, drag: Vec2) {
        let (right, up) = self.screen_axes();
        let scale = self.distance * PAN_SPEED;
        self.pending_pan += (-drag.x * right + drag.y * up) * scale;
    }

    /// Queue a dolly from scroll wheel units. Positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.pending_zoom -= scroll * ZOOM_SPEED;
    }

    /// Apply pending motion for one frame.
    pub fn step(&mut self) {
        let factor = self.damping.unwrap_or(1.0).clamp(0.0, 1.0);

        self.yaw += self.pending_yaw * factor;
        self.pitch = (self.pitch + self.pending_pitch * factor).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance = (self.distance * (self.pending_zoom * factor).exp())
            .clamp(self.min_distance, self.max_distance);
        self.target += self.pending_pan * factor;

        let keep = 1.0 - factor;
        self.pending_yaw *= keep;
        self.pending_pitch *= keep;
        self.pending_zoom *= keep;
        self.pending_pan *= keep;

        if self.is_settled() {
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
            self.pending_zoom = 0.0;
            self.pending_pan = Vec3::ZERO;
        }
    }

    /// Whether there is no pending motion left.
    pub fn is_settled(&self) -> bool {
        self.pending_yaw.abs() < REST_EPSILON
            && self.pending_pitch.abs() < REST_EPSILON
            && self.pending_zoom.abs() < REST_EPSILON
            && self.pending_pan.length() < REST_EPSILON
    }

    /// Camera position for the current yaw, pitch and distance.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    fn screen_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, orbit_camera);
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands) {
    let controller = OrbitController::looking_at(START_POSITION, Vec3::ZERO);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        controller.transform(),
        // Soft fill so the night sides of planets are not pitch black
        AmbientLight {
            color: Color::WHITE,
            brightness: 300.0,
            ..default()
        },
        controller,
        MainCamera,
    ));
}

/// Feed mouse input into the orbit controller and update the camera transform.
fn orbit_camera(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<(&mut Transform, &mut OrbitController), With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    let Ok((mut transform, mut controller)) = camera_query.single_mut() else {
        return;
    };

    // The speed panel gets the pointer when it is hovered or dragged
    let egui_has_pointer = contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area());

    if !egui_has_pointer {
        if mouse_buttons.pressed(MouseButton::Left) {
            controller.rotate(mouse_motion.delta);
        }
        if mouse_buttons.pressed(MouseButton::Right) || mouse_buttons.pressed(MouseButton::Middle)
        {
            controller.pan(mouse_motion.delta);
        }
        if mouse_scroll.delta.y != 0.0 {
            controller.zoom(mouse_scroll.delta.y);
        }
    }

    controller.step();
    *transform = controller.transform();
}
