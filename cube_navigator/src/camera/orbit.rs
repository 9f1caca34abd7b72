//! Orbit camera: drag to circle the cube. Zoom and pan stay disabled.

use std::f32::consts::PI;

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Polar clamp band, radians from +Y. Keeps the camera from flipping over
/// the poles or diving under the cube.
pub const MIN_POLAR: f32 = PI / 3.0;
pub const MAX_POLAR: f32 = PI / 1.5;

const ORBIT_SENSITIVITY: f32 = 0.005;

/// Spherical orbit state about the origin. The radius is fixed for the
/// session; only yaw and polar angle respond to input.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub radius: f32,
    pub yaw: f32,
    pub polar: f32,
}

impl OrbitCamera {
    /// Orbit state matching an initial position that looks at the origin.
    pub fn from_position(position: Vec3) -> Self {
        let radius = position.length();
        Self {
            radius,
            yaw: position.x.atan2(position.z),
            polar: (position.y / radius).acos().clamp(MIN_POLAR, MAX_POLAR),
        }
    }

    pub fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        Vec3::new(
            self.radius * sin_polar * self.yaw.sin(),
            self.radius * cos_polar,
            self.radius * sin_polar * self.yaw.cos(),
        )
    }

    fn apply_drag(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.polar = (self.polar - delta.y * ORBIT_SENSITIVITY).clamp(MIN_POLAR, MAX_POLAR);
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.add_systems(Update, orbit_camera_system);
}

fn orbit_camera_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut contexts: EguiContexts,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    if !mouse.pressed(MouseButton::Left) || contexts.ctx_mut().is_pointer_over_area() {
        motion.clear();
        return;
    }
    let delta: Vec2 = motion.read().map(|event| event.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }
    for (mut orbit, mut transform) in &mut cameras {
        orbit.apply_drag(delta);
        *transform =
            Transform::from_translation(orbit.position()).looking_at(Vec3::ZERO, Vec3::Y);
    }
}
