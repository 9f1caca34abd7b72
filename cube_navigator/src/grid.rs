//! 3×3×3 cell grid: coordinates, assembly-local positions, visibility.

use bevy::prelude::*;

/// Integer grid coordinate, each axis in {0, 1, 2}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoordinate {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl CellCoordinate {
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// A cell is visible iff it touches at least one exterior face.
    /// Only the single center cell (1,1,1) fails this.
    pub fn is_visible(&self) -> bool {
        self.x == 0 || self.x == 2 || self.y == 0 || self.y == 2 || self.z == 0 || self.z == 2
    }

    /// Assembly-local position: each axis maps {0,1,2} to
    /// {-(size+gap), 0, size+gap}, centering the grid at the origin.
    pub fn position(&self, cell_size: f32, gap: f32) -> Vec3 {
        let step = cell_size + gap;
        Vec3::new(
            (self.x as f32 - 1.0) * step,
            (self.y as f32 - 1.0) * step,
            (self.z as f32 - 1.0) * step,
        )
    }
}

/// One visible cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub coord: CellCoordinate,
    pub position: Vec3,
}

/// Enumerates the 26 visible cells in stable x → y → z order.
/// The order only fixes draw order; it carries no other meaning.
pub fn build_grid(cell_size: f32, gap: f32) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(26);
    for x in 0..3u8 {
        for y in 0..3u8 {
            for z in 0..3u8 {
                let coord = CellCoordinate::new(x, y, z);
                if !coord.is_visible() {
                    continue;
                }
                cells.push(Cell {
                    coord,
                    position: coord.position(cell_size, gap),
                });
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_26_visible_cells() {
        let cells = build_grid(0.95, 0.045);
        assert_eq!(cells.len(), 26);
        assert!(cells
            .iter()
            .all(|cell| cell.coord != CellCoordinate::new(1, 1, 1)));
    }

    #[test]
    fn only_the_center_cell_is_hidden() {
        for x in 0..3u8 {
            for y in 0..3u8 {
                for z in 0..3u8 {
                    let coord = CellCoordinate::new(x, y, z);
                    let expect_hidden = (x, y, z) == (1, 1, 1);
                    assert_eq!(coord.is_visible(), !expect_hidden, "coord {coord:?}");
                }
            }
        }
    }

    #[test]
    fn positions_are_centered_on_the_origin() {
        let cells = build_grid(1.0, 0.1);
        let sum: Vec3 = cells.iter().map(|cell| cell.position).sum();
        assert!(sum.length() < 1e-5);

        let corner = CellCoordinate::new(0, 0, 0).position(1.0, 0.1);
        assert_eq!(corner, Vec3::splat(-1.1));
        let center_column = CellCoordinate::new(1, 1, 2).position(1.0, 0.1);
        assert_eq!(center_column, Vec3::new(0.0, 0.0, 1.1));
    }

    #[test]
    fn enumeration_order_is_stable() {
        let first = build_grid(0.95, 0.045);
        let second = build_grid(0.95, 0.045);
        assert_eq!(first, second);
        assert_eq!(first[0].coord, CellCoordinate::new(0, 0, 0));
        assert_eq!(first[25].coord, CellCoordinate::new(2, 2, 2));
    }
}
