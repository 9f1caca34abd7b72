//! Fixed scene constants and env-driven content loading.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::data::{content, Portfolio};

/// Edge length of one cell cuboid.
pub const CELL_SIZE: f32 = 0.95;
/// Spacing between adjacent cells.
pub const CELL_GAP: f32 = 0.045;
/// Uniform scale applied to the whole assembly.
pub const ASSEMBLY_SCALE: f32 = 0.7;
/// Assembly-local distance from the center to a face label.
pub const LABEL_DISTANCE: f32 = 1.5;

/// Cosmetic spin about +Y, radians per second.
pub const SPIN_SPEED: f32 = 0.1;

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 3.0, 8.0);
/// Vertical field of view, degrees.
pub const CAMERA_FOV_DEGREES: f32 = 40.0;

pub const AMBIENT_BRIGHTNESS: f32 = 350.0;
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const POINT_LIGHT_INTENSITY: f32 = 1_500_000.0;

const CONTENT_ENV_VAR: &str = "CUBEFOLIO_CONTENT";

/// Returns the portfolio content: the JSON file named by `CUBEFOLIO_CONTENT`
/// when set and readable, the built-in content otherwise.
pub fn portfolio() -> Portfolio {
    let Ok(raw) = std::env::var(CONTENT_ENV_VAR) else {
        return content::default_portfolio();
    };
    match content::load_portfolio(&PathBuf::from(&raw)) {
        Ok(portfolio) => portfolio,
        Err(err) => {
            eprintln!("cubefolio: {err}; using built-in content");
            content::default_portfolio()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    struct EnvGuard {
        snapshot: Option<String>,
    }

    impl EnvGuard {
        fn capture() -> Self {
            Self {
                snapshot: std::env::var(CONTENT_ENV_VAR).ok(),
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.snapshot {
                Some(val) => std::env::set_var(CONTENT_ENV_VAR, val),
                None => std::env::remove_var(CONTENT_ENV_VAR),
            }
        }
    }

    #[test]
    fn unset_env_uses_built_in_content() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture();
        std::env::remove_var(CONTENT_ENV_VAR);

        assert_eq!(portfolio(), content::default_portfolio());
    }

    #[test]
    fn unreadable_path_falls_back_to_built_in_content() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture();
        std::env::set_var(CONTENT_ENV_VAR, "/nonexistent/portfolio.json");

        assert_eq!(portfolio(), content::default_portfolio());
    }

    #[test]
    fn content_file_overrides_the_built_in() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture();

        let mut custom = content::default_portfolio();
        custom.name = "Override Person".to_string();
        let path = std::env::temp_dir().join("cube_navigator_config_override.json");
        std::fs::write(&path, serde_json::to_string(&custom).unwrap()).unwrap();
        std::env::set_var(CONTENT_ENV_VAR, &path);

        assert_eq!(portfolio().name, "Override Person");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn orbit_limits_bracket_the_initial_camera() {
        // The startup position must sit inside the clamped polar band or
        // the first drag would snap the view.
        let polar = (CAMERA_POSITION.y / CAMERA_POSITION.length()).acos();
        assert!(polar >= crate::camera::MIN_POLAR);
        assert!(polar <= crate::camera::MAX_POLAR);
    }
}
