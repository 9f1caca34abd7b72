//! Logical cube faces: identity, boundary predicates, colors, labels.

use bevy::prelude::*;

use crate::grid::CellCoordinate;

/// One of the six logical faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceId {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

/// Fixed color of interior (non-boundary) cell faces.
pub const NEUTRAL_FACE_COLOR: Color = Color::srgb(0.133, 0.133, 0.133);

impl FaceId {
    pub const ALL: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Back,
        FaceId::Left,
        FaceId::Right,
        FaceId::Top,
        FaceId::Bottom,
    ];

    /// Whether the cell sits on this face's exterior boundary.
    /// Each face is checked independently: a corner cell touches three
    /// faces, an edge cell two, a face-center cell one.
    pub fn touches(&self, coord: CellCoordinate) -> bool {
        match self {
            FaceId::Right => coord.x == 2,
            FaceId::Left => coord.x == 0,
            FaceId::Top => coord.y == 2,
            FaceId::Bottom => coord.y == 0,
            FaceId::Front => coord.z == 2,
            FaceId::Back => coord.z == 0,
        }
    }

    /// Outward unit normal in the assembly's local frame.
    pub fn normal(&self) -> Vec3 {
        match self {
            FaceId::Front => Vec3::Z,
            FaceId::Back => Vec3::NEG_Z,
            FaceId::Left => Vec3::NEG_X,
            FaceId::Right => Vec3::X,
            FaceId::Top => Vec3::Y,
            FaceId::Bottom => Vec3::NEG_Y,
        }
    }

    /// Canonical sticker color identifying this face.
    pub fn color(&self) -> Color {
        match self {
            FaceId::Front => Color::srgb(1.0, 0.345, 0.0),
            FaceId::Back => Color::srgb(1.0, 0.0, 0.0),
            FaceId::Left => Color::srgb(0.0, 1.0, 0.0),
            FaceId::Right => Color::srgb(0.0, 0.0, 1.0),
            FaceId::Top => Color::WHITE,
            FaceId::Bottom => Color::srgb(1.0, 1.0, 0.0),
        }
    }

    /// Display label shown beside the face.
    /// `Left` and `Bottom` both read "Home"; both navigate there.
    pub fn label(&self) -> &'static str {
        match self {
            FaceId::Front => "About",
            FaceId::Back => "Contact",
            FaceId::Left => "Home",
            FaceId::Right => "Projects",
            FaceId::Top => "Skills",
            FaceId::Bottom => "Home",
        }
    }
}

/// Color of one local face of a cell: the face's canonical color when the
/// cell touches that exterior boundary, the neutral color otherwise.
pub fn face_color(coord: CellCoordinate, face: FaceId) -> Color {
    if face.touches(coord) {
        face.color()
    } else {
        NEUTRAL_FACE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_face_count(coord: CellCoordinate) -> usize {
        FaceId::ALL
            .iter()
            .filter(|face| face_color(coord, **face) != NEUTRAL_FACE_COLOR)
            .count()
    }

    #[test]
    fn canonical_iff_boundary() {
        for x in 0..3u8 {
            for y in 0..3u8 {
                for z in 0..3u8 {
                    let coord = CellCoordinate::new(x, y, z);
                    for face in FaceId::ALL {
                        let expected = if face.touches(coord) {
                            face.color()
                        } else {
                            NEUTRAL_FACE_COLOR
                        };
                        assert_eq!(face_color(coord, face), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn corner_edge_and_face_center_counts() {
        // Corner: three extremal axes.
        assert_eq!(canonical_face_count(CellCoordinate::new(0, 0, 0)), 3);
        assert_eq!(canonical_face_count(CellCoordinate::new(2, 2, 2)), 3);
        // Edge: two extremal axes.
        assert_eq!(canonical_face_count(CellCoordinate::new(0, 2, 1)), 2);
        // Face center: one extremal axis.
        assert_eq!(canonical_face_count(CellCoordinate::new(1, 1, 2)), 1);
    }

    #[test]
    fn labels_cover_every_face() {
        for face in FaceId::ALL {
            assert!(!face.label().is_empty());
        }
        assert_eq!(FaceId::Left.label(), FaceId::Bottom.label());
    }

    #[test]
    fn normals_are_unit_and_distinct() {
        for face in FaceId::ALL {
            assert!((face.normal().length() - 1.0).abs() < 1e-6);
        }
        for a in FaceId::ALL {
            for b in FaceId::ALL {
                if a != b {
                    assert_ne!(a.normal(), b.normal());
                }
            }
        }
    }
}
