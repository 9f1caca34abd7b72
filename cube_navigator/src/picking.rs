//! Cube click picking: viewport ray → cell hit → logical face.
//!
//! Uses manual ray-AABB intersection instead of Bevy's mesh picking to avoid
//! input absorption conflicts with bevy_egui. The ray is inverse-transformed
//! into each cell's local frame, so the face a normal resolves to does not
//! depend on the assembly's current spin angle.

use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy_egui::EguiContexts;

use crate::data::{NavUpdate, NavigationSink};
use crate::faces::FaceId;
use crate::scene::CellCube;

/// A pointer click resolved to one logical face. At most one per click.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceClicked(pub FaceId);

/// Pointer travel while the left button is held; a release only counts as
/// a click when the pointer stayed within this slop of the press point.
const CLICK_SLOP_PX: f32 = 5.0;

#[derive(Resource, Default)]
struct DragDistance(f32);

pub fn cube_picking_plugin(app: &mut App) {
    app.init_resource::<DragDistance>()
        .add_systems(
            Update,
            click_raycast_system.before(crate::navigation::route_face_clicks),
        );
}

/// Resolves a surface normal to the logical face it belongs to.
///
/// Thresholds of ±0.5 assume axis-aligned box geometry, where a genuine face
/// hit has exactly one dominant component near ±1. The check order is the
/// tie-break for malformed input and must stay fixed; a vector that crosses
/// no threshold falls back to `Front` instead of failing.
pub fn resolve_face(normal: Vec3) -> FaceId {
    if normal.z < -0.5 {
        FaceId::Back
    } else if normal.z > 0.5 {
        FaceId::Front
    } else if normal.x < -0.5 {
        FaceId::Left
    } else if normal.x > 0.5 {
        FaceId::Right
    } else if normal.y > 0.5 {
        FaceId::Top
    } else if normal.y < -0.5 {
        FaceId::Bottom
    } else {
        FaceId::Front
    }
}

#[allow(clippy::too_many_arguments)]
fn click_raycast_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<bevy::input::mouse::MouseMotion>,
    mut drag: ResMut<DragDistance>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    cells: Query<(&GlobalTransform, &Aabb), With<CellCube>>,
    mut clicks: EventWriter<FaceClicked>,
    sink: Option<Res<NavigationSink>>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        drag.0 = 0.0;
    }
    if mouse.pressed(MouseButton::Left) {
        for event in motion.read() {
            drag.0 += event.delta.length();
        }
    } else {
        motion.clear();
    }

    if !mouse.just_released(MouseButton::Left) || drag.0 > CLICK_SLOP_PX {
        return;
    }
    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }

    let window = windows.single();
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let (camera, cam_transform) = cameras.single();
    let Ok(ray) = camera.viewport_to_world(cam_transform, cursor_pos) else {
        return;
    };

    // No hit, or a hit without a usable normal, silently drops the click;
    // the nav bar and menu still navigate.
    let Some(normal) = nearest_cell_normal(ray.origin, *ray.direction, &cells) else {
        return;
    };

    let face = resolve_face(normal);
    clicks.send(FaceClicked(face));
    if let Some(sink) = &sink {
        sink.send(NavUpdate::FaceClicked(face));
    }
}

/// Nearest cell struck by the ray, as the hit face's outward normal in the
/// cell's local frame. All cells share the assembly transform, so entry
/// distances are comparable across them.
fn nearest_cell_normal(
    ray_origin: Vec3,
    ray_dir: Vec3,
    cells: &Query<(&GlobalTransform, &Aabb), With<CellCube>>,
) -> Option<Vec3> {
    let mut best: Option<(f32, Vec3)> = None;
    for (transform, aabb) in cells.iter() {
        let inverse = transform.affine().inverse();
        let local_origin = inverse.transform_point3(ray_origin);
        let local_dir = inverse.transform_vector3(ray_dir);
        if local_dir.length_squared() <= f32::EPSILON {
            continue;
        }
        let center: Vec3 = aabb.center.into();
        let half: Vec3 = aabb.half_extents.into();
        let Some((dist, normal)) =
            ray_aabb_intersect(local_origin, local_dir, center - half, center + half)
        else {
            continue;
        };
        if best.is_none_or(|(best_dist, _)| dist < best_dist) {
            best = Some((dist, normal));
        }
    }
    best.map(|(_, normal)| normal)
}

/// Slab-method ray/AABB test returning the entry distance and the outward
/// normal of the entered face.
fn ray_aabb_intersect(
    origin: Vec3,
    dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<(f32, Vec3)> {
    let inv_dir = 1.0 / dir;
    let t1 = (aabb_min - origin) * inv_dir;
    let t2 = (aabb_max - origin) * inv_dir;
    let t_min = t1.min(t2);
    let t_max = t1.max(t2);
    let t_enter = t_min.x.max(t_min.y).max(t_min.z);
    let t_exit = t_max.x.min(t_max.y).min(t_max.z);
    if t_enter > t_exit || t_exit <= 0.0 {
        return None;
    }
    // The slab that bounds entry is the struck face; its outward normal
    // opposes the ray on that axis.
    let normal = if t_enter == t_min.x {
        Vec3::new(-dir.x.signum(), 0.0, 0.0)
    } else if t_enter == t_min.y {
        Vec3::new(0.0, -dir.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, -dir.z.signum())
    };
    Some((t_enter.max(0.0), normal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_normals_resolve_to_their_faces() {
        assert_eq!(resolve_face(Vec3::new(0.0, 0.0, -1.0)), FaceId::Back);
        assert_eq!(resolve_face(Vec3::new(0.0, 0.0, 1.0)), FaceId::Front);
        assert_eq!(resolve_face(Vec3::new(-1.0, 0.0, 0.0)), FaceId::Left);
        assert_eq!(resolve_face(Vec3::new(1.0, 0.0, 0.0)), FaceId::Right);
        assert_eq!(resolve_face(Vec3::new(0.0, 1.0, 0.0)), FaceId::Top);
        assert_eq!(resolve_face(Vec3::new(0.0, -1.0, 0.0)), FaceId::Bottom);
    }

    #[test]
    fn degenerate_normal_falls_back_to_front() {
        assert_eq!(resolve_face(Vec3::ZERO), FaceId::Front);
        assert_eq!(resolve_face(Vec3::splat(0.4)), FaceId::Front);
    }

    #[test]
    fn z_axis_wins_the_tie_break() {
        // Malformed input with several dominant components resolves in
        // declaration order: z before x before y.
        assert_eq!(resolve_face(Vec3::new(0.8, 0.8, -0.8)), FaceId::Back);
        assert_eq!(resolve_face(Vec3::new(-0.8, 0.8, 0.0)), FaceId::Left);
    }

    #[test]
    fn slightly_tilted_face_hit_still_resolves() {
        assert_eq!(resolve_face(Vec3::new(0.9, 0.1, 0.0)), FaceId::Right);
    }

    #[test]
    fn ray_hits_the_facing_slab() {
        let (dist, normal) = ray_aabb_intersect(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        )
        .unwrap();
        assert!((dist - 4.5).abs() < 1e-5);
        assert_eq!(normal, Vec3::Z);

        let (_, normal) = ray_aabb_intersect(
            Vec3::new(-3.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        )
        .unwrap();
        assert_eq!(normal, Vec3::NEG_X);
    }

    #[test]
    fn ray_misses_and_backward_rays_are_rejected() {
        assert!(ray_aabb_intersect(
            Vec3::new(0.0, 5.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        )
        .is_none());
        // Box entirely behind the ray origin.
        assert!(ray_aabb_intersect(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        )
        .is_none());
    }
}
