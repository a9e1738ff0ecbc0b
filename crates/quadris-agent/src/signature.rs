use std::fmt::Write as _;

use quadris_engine::{GRID_HEIGHT, GRID_WIDTH, Grid};

/// Compact discrete features of a grid: per-column heights, holes, and
/// bumpiness.
///
/// This is a lossy abstraction: many grids share one signature, which keeps
/// the learned state space tractable. Two grids with identical features are
/// indistinguishable to the agent even when their cell layouts differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSignature {
    column_heights: [u8; GRID_WIDTH],
    holes: u32,
    bumpiness: u32,
}

impl BoardSignature {
    /// Extracts the signature from a grid.
    ///
    /// A column's height is its number of occupied cells. A hole is an empty
    /// cell strictly below the topmost occupied cell of its column. Bumpiness
    /// is the sum of absolute height differences between adjacent columns.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut column_heights = [0; GRID_WIDTH];
        let mut holes = 0;
        for (x, height) in column_heights.iter_mut().enumerate() {
            let mut occupied = 0_u32;
            let mut topmost = None;
            for y in 0..GRID_HEIGHT {
                if grid.is_occupied(x, y) {
                    occupied += 1;
                    if topmost.is_none() {
                        topmost = Some(y);
                    }
                }
            }
            *height = occupied as u8;
            if let Some(top) = topmost {
                // empty cells between the topmost occupied cell and the floor
                holes += (GRID_HEIGHT - top) as u32 - occupied;
            }
        }
        let bumpiness = column_heights
            .windows(2)
            .map(|pair| u32::from(pair[0].abs_diff(pair[1])))
            .sum();
        Self {
            column_heights,
            holes,
            bumpiness,
        }
    }

    /// Returns the per-column heights, left to right.
    #[must_use]
    pub const fn column_heights(&self) -> &[u8; GRID_WIDTH] {
        &self.column_heights
    }

    /// Returns the total number of holes.
    #[must_use]
    pub const fn holes(&self) -> u32 {
        self.holes
    }

    /// Returns the bumpiness of the surface profile.
    #[must_use]
    pub const fn bumpiness(&self) -> u32 {
        self.bumpiness
    }

    /// Returns the sum of all column heights.
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.column_heights.iter().map(|&h| u32::from(h)).sum()
    }

    /// Serializes the signature into a hashable table key.
    ///
    /// The format is `"h0,h1,...,h9|holes|bumpiness"`.
    #[must_use]
    pub fn key(&self) -> StateKey {
        let mut key = String::with_capacity(4 * GRID_WIDTH);
        for (x, height) in self.column_heights.iter().enumerate() {
            if x > 0 {
                key.push(',');
            }
            write!(&mut key, "{height}").unwrap();
        }
        write!(&mut key, "|{}|{}", self.holes, self.bumpiness).unwrap();
        StateKey(key)
    }
}

/// An encoded board state, used as the lookup key of a [`QTable`].
///
/// [`QTable`]: crate::QTable
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct StateKey(String);
