//! Cosmetic assembly spin. Runs every frame and touches nothing but the
//! assembly's rotation; picking works in the assembly's local frame, so
//! navigation never sees the angle.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::config;
use crate::scene::CubeAssembly;

/// Spin rate about +Y, radians per second.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SpinSpeed(pub f32);

impl Default for SpinSpeed {
    fn default() -> Self {
        Self(config::SPIN_SPEED)
    }
}

/// Absolute spin angle after `elapsed` seconds, wrapped to one turn.
pub fn spin_angle(elapsed: f32, speed: f32) -> f32 {
    (elapsed * speed) % TAU
}

pub fn spin_plugin(app: &mut App) {
    app.init_resource::<SpinSpeed>()
        .add_systems(Update, spin_assembly_system);
}

/// Sets the rotation from elapsed time instead of accumulating deltas, so
/// the angle never drifts.
fn spin_assembly_system(
    time: Res<Time>,
    speed: Res<SpinSpeed>,
    mut assemblies: Query<&mut Transform, With<CubeAssembly>>,
) {
    let angle = spin_angle(time.elapsed_secs(), speed.0);
    for mut transform in &mut assemblies {
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_is_elapsed_times_speed() {
        assert_eq!(spin_angle(0.0, 0.1), 0.0);
        assert!((spin_angle(10.0, 0.1) - 1.0).abs() < 1e-6);
        assert!((spin_angle(30.0, 0.1) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn angle_wraps_after_a_full_turn() {
        let one_turn_secs = TAU / 0.1;
        assert!((spin_angle(one_turn_secs + 2.0, 0.1) - 0.2).abs() < 1e-4);
        for i in 0..1000 {
            let angle = spin_angle(i as f32 * 0.37, 0.1);
            assert!((0.0..TAU).contains(&angle));
        }
    }

    #[test]
    fn angle_grows_monotonically_before_the_wrap() {
        let mut last = 0.0;
        for i in 1..60 {
            let angle = spin_angle(i as f32, 0.1);
            assert!(angle > last);
            last = angle;
        }
    }
}
