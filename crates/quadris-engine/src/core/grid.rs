/// Width of the playing grid in columns.
pub const GRID_WIDTH: usize = 10;
/// Height of the playing grid in rows.
pub const GRID_HEIGHT: usize = 20;

/// A single grid cell: either empty or occupied by a locked piece cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Cell::Filled)
    }
}

/// The fixed-size playing field.
///
/// Coordinates are `(x, y)` with `(0, 0)` at the top-left; `x` grows
/// rightward (columns) and `y` grows downward (rows). The dimensions are
/// constant for the lifetime of a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_WIDTH]; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        cells: [[Cell::Empty; GRID_WIDTH]; GRID_HEIGHT],
    };

    /// Checks whether the cell at `(x, y)` is occupied.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[y][x].is_occupied()
    }

    /// Marks the cell at `(x, y)` as occupied.
    pub(crate) fn occupy(&mut self, x: usize, y: usize) {
        self.cells[y][x] = Cell::Filled;
    }

    /// Counts the occupied cells in the whole grid.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_occupied())
            .count()
    }

    /// Checks whether every cell in row `y` is occupied.
    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.cells[y].iter().all(|cell| cell.is_occupied())
    }

    /// Removes all full rows and returns how many were cleared.
    ///
    /// Rows are scanned bottom-to-top. When a full row is found, every row
    /// above it shifts down by one and row 0 becomes empty. The same index is
    /// then re-examined before the scan continues upward, so several
    /// simultaneously-full rows are each counted exactly once.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = GRID_HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                for dst in (1..=row).rev() {
                    self.cells[dst] = self.cells[dst - 1];
                }
                self.cells[0] = [Cell::Empty; GRID_WIDTH];
                cleared += 1;
                // re-check the same index: a full row may have shifted into it
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Creates a `Grid` from ASCII art for testing.
    /// '#' represents an occupied cell, '.' an empty cell.
    /// Rows are specified top to bottom; trailing empty rows may be omitted.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut grid = Self::EMPTY;
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert!(
            lines.len() <= GRID_HEIGHT,
            "at most {GRID_HEIGHT} rows allowed, got {}",
            lines.len()
        );

        // align partial art to the bottom of the grid
        let y0 = GRID_HEIGHT - lines.len();
        for (dy, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                chars.len(),
                GRID_WIDTH,
                "each row must have exactly {GRID_WIDTH} cells, got {} at row {dy}",
                chars.len(),
            );
            for (x, &ch) in chars.iter().enumerate() {
                if ch == '#' {
                    grid.occupy(x, y0 + dy);
                }
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::EMPTY;
        assert_eq!(grid.occupied_cells(), 0);
        for y in 0..GRID_HEIGHT {
            assert!(!grid.is_row_full(y));
        }
    }

    #[test]
    fn test_occupy_and_check_cell() {
        let mut grid = Grid::EMPTY;
        assert!(!grid.is_occupied(3, 7));
        grid.occupy(3, 7);
        assert!(grid.is_occupied(3, 7));
        assert_eq!(grid.occupied_cells(), 1);
    }

    #[test]
    fn test_clear_single_full_row() {
        let mut grid = Grid::EMPTY;
        for x in 0..GRID_WIDTH {
            grid.occupy(x, GRID_HEIGHT - 1);
        }
        assert!(grid.is_row_full(GRID_HEIGHT - 1));

        let before = grid.occupied_cells();
        let cleared = grid.clear_full_rows();
        assert_eq!(cleared, 1);
        assert_eq!(grid.occupied_cells(), before - GRID_WIDTH);
        assert!(!grid.is_row_full(GRID_HEIGHT - 1));
    }

    #[test]
    fn test_clear_no_partial_row() {
        let mut grid = Grid::EMPTY;
        for x in 0..GRID_WIDTH - 1 {
            grid.occupy(x, GRID_HEIGHT - 1);
        }
        assert_eq!(grid.clear_full_rows(), 0);
        assert_eq!(grid.occupied_cells(), GRID_WIDTH - 1);
    }

    #[test]
    fn test_clear_multiple_consecutive_rows() {
        let grid = Grid::from_ascii(
            r"
            .#........
            ##########
            ##########
            ##########
            ",
        );
        let mut grid = grid;
        let cleared = grid.clear_full_rows();
        assert_eq!(cleared, 3);
        // only the lone marker cell survives, shifted down by three rows
        assert_eq!(grid.occupied_cells(), 1);
        assert!(grid.is_occupied(1, GRID_HEIGHT - 1));
    }

    #[test]
    fn test_clear_separated_full_rows() {
        let mut grid = Grid::from_ascii(
            r"
            ##########
            #.........
            ##########
            ",
        );
        let cleared = grid.clear_full_rows();
        assert_eq!(cleared, 2);
        assert_eq!(grid.occupied_cells(), 1);
        assert!(grid.is_occupied(0, GRID_HEIGHT - 1));
    }

    #[test]
    fn test_rows_above_shift_down_and_top_row_empties() {
        let mut grid = Grid::from_ascii(
            r"
            ..#.......
            ##########
            ",
        );
        grid.clear_full_rows();
        assert!(grid.is_occupied(2, GRID_HEIGHT - 1));
        assert!(!grid.is_occupied(2, GRID_HEIGHT - 2));
        for x in 0..GRID_WIDTH {
            assert!(!grid.is_occupied(x, 0));
        }
    }

    #[test]
    fn test_clear_all_rows_filled() {
        let mut grid = Grid::EMPTY;
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                grid.occupy(x, y);
            }
        }
        assert_eq!(grid.clear_full_rows(), GRID_HEIGHT);
        assert_eq!(grid.occupied_cells(), 0);
    }

    #[test]
    fn test_from_ascii_bottom_aligned() {
        let grid = Grid::from_ascii(
            r"
            #.........
            .#........
            ",
        );
        assert!(grid.is_occupied(0, GRID_HEIGHT - 2));
        assert!(grid.is_occupied(1, GRID_HEIGHT - 1));
        assert_eq!(grid.occupied_cells(), 2);
    }
}
