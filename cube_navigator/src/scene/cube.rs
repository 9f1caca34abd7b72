//! Cube assembly: camera, lights, and the 26 cell cuboids with sticker faces.

use bevy::prelude::*;

use crate::camera::OrbitCamera;
use crate::config;
use crate::faces::{face_color, FaceId};
use crate::grid::{build_grid, CellCoordinate};
use crate::scene::materials;

/// Marker for the spinning 3×3×3 assembly root.
#[derive(Component)]
pub struct CubeAssembly;

/// Marker + coordinate for one visible cell cuboid.
#[derive(Component)]
pub struct CellCube {
    pub coord: CellCoordinate,
}

/// Keeps sticker quads clear of the cell surface so they never z-fight.
const STICKER_LIFT: f32 = 0.002;
/// Stickers are inset slightly from the cell edge.
const STICKER_SIZE: f32 = 0.86;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: config::CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(config::CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::from_position(config::CAMERA_POSITION),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: config::AMBIENT_BRIGHTNESS,
    });
    commands.spawn((
        PointLight {
            intensity: config::POINT_LIGHT_INTENSITY,
            ..default()
        },
        Transform::from_translation(config::POINT_LIGHT_POSITION),
    ));

    let cell_mesh = meshes.add(Cuboid::new(
        config::CELL_SIZE,
        config::CELL_SIZE,
        config::CELL_SIZE,
    ));
    let sticker_mesh = meshes.add(Rectangle::new(STICKER_SIZE, STICKER_SIZE));
    let body_material = materials::cell_body_material(&mut materials_res);

    let assembly = commands
        .spawn((
            CubeAssembly,
            Transform::from_scale(Vec3::splat(config::ASSEMBLY_SCALE)),
            Visibility::default(),
        ))
        .id();

    for cell in build_grid(config::CELL_SIZE, config::CELL_GAP) {
        let cube = commands
            .spawn((
                Mesh3d(cell_mesh.clone()),
                MeshMaterial3d(body_material.clone()),
                Transform::from_translation(cell.position),
                CellCube { coord: cell.coord },
            ))
            .id();
        commands.entity(assembly).add_child(cube);

        // One sticker per exterior face the cell touches; interior faces
        // keep the dark body color.
        for face in FaceId::ALL {
            if !face.touches(cell.coord) {
                continue;
            }
            let normal = face.normal();
            let offset = normal * (config::CELL_SIZE / 2.0 + STICKER_LIFT);
            // Rectangle faces +Z; aim that side outward along the normal.
            let up = if normal.y.abs() > 0.5 { Vec3::Z } else { Vec3::Y };
            let sticker = commands
                .spawn((
                    Mesh3d(sticker_mesh.clone()),
                    MeshMaterial3d(materials::sticker_material(
                        &mut materials_res,
                        face_color(cell.coord, face),
                    )),
                    Transform::from_translation(offset).looking_at(offset - normal, up),
                ))
                .id();
            commands.entity(cube).add_child(sticker);
        }
    }
}
