//! Material helpers for cell bodies and face stickers.

use bevy::prelude::*;

use crate::faces::NEUTRAL_FACE_COLOR;

/// Dark matte body shared by every cell; interior faces show this color.
pub fn cell_body_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: NEUTRAL_FACE_COLOR,
        perceptual_roughness: 0.9,
        ..default()
    })
}

/// Sticker material in the given canonical face color.
pub fn sticker_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
    color: Color,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.6,
        ..default()
    })
}
