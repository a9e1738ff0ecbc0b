use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Enum representing the type of a falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// T-piece.
    T = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::S,
            3 => PieceKind::Z,
            4 => PieceKind::J,
            5 => PieceKind::L,
            _ => PieceKind::T,
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// Returns the shape of this piece in its spawn orientation.
    #[must_use]
    pub fn spawn_shape(self) -> PieceShape {
        SPAWN_SHAPES[self as usize]
    }
}

/// A piece shape: a small binary matrix of occupied cells.
///
/// The matrix is stored in a fixed 4×4 array with explicit `width` and
/// `height`, since shape dimensions vary by piece and orientation (the
/// I-piece spawns as 4×1 and rotates to 1×4). Shapes are immutable;
/// [`Self::rotated_clockwise`] returns a new shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    cells: [[bool; 4]; 4],
    width: usize,
    height: usize,
}

impl PieceShape {
    /// Width of the shape's bounding matrix in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the shape's bounding matrix in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Checks whether the shape occupies the cell at `(x, y)` of its matrix.
    #[inline]
    #[must_use]
    pub const fn is_filled(&self, x: usize, y: usize) -> bool {
        self.cells[y][x]
    }

    /// Returns the 90° clockwise rotation of this shape.
    ///
    /// Rows become columns (`new[x][height - 1 - y] = old[y][x]`), so the
    /// width and height swap. Rotation forms a group of order 4: four
    /// consecutive rotations restore the original shape.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        let mut cells = [[false; 4]; 4];
        for y in 0..self.height {
            for x in 0..self.width {
                cells[x][self.height - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }

    /// Returns an iterator of `(dx, dy)` offsets of the occupied cells.
    ///
    /// Every tetromino shape yields exactly 4 offsets.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells[..self.height]
            .iter()
            .enumerate()
            .flat_map(move |(dy, row)| {
                row[..self.width]
                    .iter()
                    .enumerate()
                    .filter_map(move |(dx, &filled)| filled.then_some((dx, dy)))
            })
    }
}

/// Position of a piece's top-left matrix cell within the grid.
///
/// Both coordinates are signed: a shape partially outside the left edge or
/// above the top row is representable (and rejected or exempted by the
/// collision rule, respectively).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePosition {
    pub col: i32,
    pub row: i32,
}

impl PiecePosition {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.col - 1, self.row)
    }

    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.col + 1, self.row)
    }

    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.col, self.row + 1)
    }
}

const fn shape(width: usize, height: usize, rows: [[bool; 4]; 4]) -> PieceShape {
    PieceShape {
        cells: rows,
        width,
        height,
    }
}

const SPAWN_SHAPES: [PieceShape; PieceKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];

    [
        // I-piece
        shape(4, 1, [[C, C, C, C], EEEE, EEEE, EEEE]),
        // O-piece
        shape(2, 2, [[C, C, E, E], [C, C, E, E], EEEE, EEEE]),
        // S-piece
        shape(3, 2, [[E, C, C, E], [C, C, E, E], EEEE, EEEE]),
        // Z-piece
        shape(3, 2, [[C, C, E, E], [E, C, C, E], EEEE, EEEE]),
        // J-piece
        shape(3, 2, [[C, E, E, E], [C, C, C, E], EEEE, EEEE]),
        // L-piece
        shape(3, 2, [[E, E, C, E], [C, C, C, E], EEEE, EEEE]),
        // T-piece
        shape(3, 2, [[E, C, E, E], [C, C, C, E], EEEE, EEEE]),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [PieceKind; PieceKind::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in ALL_KINDS {
            let shape = kind.spawn_shape();
            assert_eq!(
                shape.occupied_offsets().count(),
                4,
                "{kind:?} must occupy exactly 4 cells"
            );
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let shape = PieceKind::I.spawn_shape();
        assert_eq!((shape.width(), shape.height()), (4, 1));

        let rotated = shape.rotated_clockwise();
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
    }

    #[test]
    fn test_rotation_is_group_of_order_four() {
        for kind in ALL_KINDS {
            let original = kind.spawn_shape();
            let mut shape = original;
            for _ in 0..4 {
                shape = shape.rotated_clockwise();
            }
            assert_eq!(shape, original, "{kind:?} must return after 4 rotations");
        }
    }

    #[test]
    fn test_rotation_preserves_cell_count() {
        for kind in ALL_KINDS {
            let rotated = kind.spawn_shape().rotated_clockwise();
            assert_eq!(rotated.occupied_offsets().count(), 4);
        }
    }

    #[test]
    fn test_clockwise_transform_mapping() {
        // J spawns as:
        //   #..
        //   ###
        // and rotates clockwise to:
        //   ##
        //   #.
        //   #.
        let rotated = PieceKind::J.spawn_shape().rotated_clockwise();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
        let offsets: Vec<_> = rotated.occupied_offsets().collect();
        assert_eq!(offsets, vec![(0, 0), (1, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn test_uniform_kind_sampling_covers_all_kinds() {
        use rand::SeedableRng as _;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
        let mut seen = [false; PieceKind::LEN];
        for _ in 0..1000 {
            let kind: PieceKind = rng.random();
            seen[kind as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all 7 kinds should be sampled");
    }
}
