//! Face labels floating just outside the assembly.

use bevy::prelude::*;

use crate::config;
use crate::faces::FaceId;
use crate::scene::CubeAssembly;

/// Marker for one face label.
#[derive(Component)]
pub struct FaceLabel(pub FaceId);

const LABEL_FONT_SIZE: f32 = 50.0;
/// Brings Text2d pixel sizing down to scene units.
const LABEL_SCALE: f32 = 0.005;

/// The white top and yellow bottom stickers need dark text.
fn label_color(face: FaceId) -> Color {
    match face {
        FaceId::Top | FaceId::Bottom => Color::BLACK,
        _ => Color::WHITE,
    }
}

/// Spawns the six labels as children of the assembly so they ride the spin,
/// each pushed out past its face and rotated to read from outside.
pub fn spawn_face_labels(mut commands: Commands, assemblies: Query<Entity, With<CubeAssembly>>) {
    let Ok(assembly) = assemblies.get_single() else {
        return;
    };
    for face in FaceId::ALL {
        let normal = face.normal();
        let position = normal * config::LABEL_DISTANCE;
        // Text2d faces +Z; aim that side outward along the face normal.
        let up = if normal.y.abs() > 0.5 { Vec3::Z } else { Vec3::Y };
        let label = commands
            .spawn((
                FaceLabel(face),
                Text2d::new(face.label()),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(label_color(face)),
                TextLayout::new_with_justify(JustifyText::Center),
                Transform::from_translation(position)
                    .looking_at(position - normal, up)
                    .with_scale(Vec3::splat(LABEL_SCALE)),
            ))
            .id();
        commands.entity(assembly).add_child(label);
    }
}
