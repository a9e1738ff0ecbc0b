use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::core::{GRID_HEIGHT, GRID_WIDTH, Grid, PieceKind, PiecePosition, PieceShape};

use super::{Action, Seed, SessionStats};

/// The currently falling piece: its shape matrix and grid position.
#[derive(Debug, Clone, Copy)]
struct FallingPiece {
    shape: PieceShape,
    position: PiecePosition,
}

impl FallingPiece {
    /// Places `kind` horizontally centered on the top row.
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn spawn(kind: PieceKind) -> Self {
        let shape = kind.spawn_shape();
        let col = (GRID_WIDTH / 2 - shape.width() / 2) as i32;
        Self {
            shape,
            position: PiecePosition::new(col, 0),
        }
    }
}

/// Checks whether `shape` fits at `position` on `grid`.
///
/// Fails when any occupied cell of the shape falls outside the horizontal
/// bounds, at or below the floor, or on an occupied grid cell. Cells with a
/// negative row (shape not yet fully inside the grid) are exempt from the
/// occupancy check but not the column-bound check.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
fn is_position_free(grid: &Grid, shape: &PieceShape, position: PiecePosition) -> bool {
    for (dx, dy) in shape.occupied_offsets() {
        let x = position.col + dx as i32;
        let y = position.row + dy as i32;
        if x < 0 || x >= GRID_WIDTH as i32 || y >= GRID_HEIGHT as i32 {
            return false;
        }
        if y >= 0 && grid.is_occupied(x as usize, y as usize) {
            return false;
        }
    }
    true
}

/// One falling-piece episode: grid, falling piece, score, and terminal flag.
///
/// A session is created at episode start and driven by [`Self::step`] until
/// [`Self::is_game_over`] reports true. Piece selection uses an owned
/// [`Pcg32`] so that a fixed [`Seed`] reproduces the same episode given the
/// same action sequence. Nothing persists across episodes.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    falling: FallingPiece,
    stats: SessionStats,
    game_over: bool,
    rng: Pcg32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic piece
    /// selection.
    #[must_use]
    pub fn with_seed(seed: Seed) -> Self {
        let mut rng = Pcg32::from_seed(seed.into_bytes());
        let falling = FallingPiece::spawn(rng.random());
        let mut session = Self {
            grid: Grid::EMPTY,
            falling,
            stats: SessionStats::new(),
            game_over: false,
            rng,
        };
        if !is_position_free(&session.grid, &session.falling.shape, session.falling.position) {
            session.game_over = true;
        }
        session
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reports whether the session has terminated (spawn collision).
    ///
    /// The flag is persistent: once set it never clears, and callers must
    /// stop issuing steps.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the shape of the currently falling piece.
    #[must_use]
    pub fn falling_shape(&self) -> &PieceShape {
        &self.falling.shape
    }

    /// Returns the position of the currently falling piece.
    #[must_use]
    pub const fn falling_position(&self) -> PiecePosition {
        self.falling.position
    }

    /// Advances the session by one step.
    ///
    /// Moves and rotations apply only when collision-free and are silently
    /// ignored otherwise. After any non-drop action the piece additionally
    /// falls one row, locking in place if it cannot; hard-drop locks
    /// immediately without the extra shift. Stepping a terminated session is
    /// a no-op.
    pub fn step(&mut self, action: Action) {
        if self.game_over {
            return;
        }
        match action {
            Action::MoveLeft => self.try_move(self.falling.position.left()),
            Action::MoveRight => self.try_move(self.falling.position.right()),
            Action::RotateClockwise => self.try_rotate(),
            Action::HardDrop => {
                self.hard_drop();
                return;
            }
        }

        // gravity is coupled to input: every non-drop step falls one row
        let down = self.falling.position.down();
        if is_position_free(&self.grid, &self.falling.shape, down) {
            self.falling.position = down;
        } else {
            self.lock_piece();
        }
    }

    fn try_move(&mut self, target: PiecePosition) {
        if is_position_free(&self.grid, &self.falling.shape, target) {
            self.falling.position = target;
        }
    }

    fn try_rotate(&mut self) {
        let rotated = self.falling.shape.rotated_clockwise();
        // no wall kicks: the rotation must fit at the current position
        if is_position_free(&self.grid, &rotated, self.falling.position) {
            self.falling.shape = rotated;
        }
    }

    fn hard_drop(&mut self) {
        loop {
            let down = self.falling.position.down();
            if is_position_free(&self.grid, &self.falling.shape, down) {
                self.falling.position = down;
            } else {
                break;
            }
        }
        self.lock_piece();
    }

    /// Copies the falling piece into the grid, clears full rows, and spawns
    /// the next piece (which may terminate the session).
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn lock_piece(&mut self) {
        for (dx, dy) in self.falling.shape.occupied_offsets() {
            let x = self.falling.position.col + dx as i32;
            let y = self.falling.position.row + dy as i32;
            if y >= 0 {
                self.grid.occupy(x as usize, y as usize);
            }
        }
        let cleared = self.grid.clear_full_rows();
        self.stats.record_lock(cleared);
        self.spawn_next();
    }

    fn spawn_next(&mut self) {
        let falling = FallingPiece::spawn(self.rng.random());
        if !is_position_free(&self.grid, &falling.shape, falling.position) {
            self.game_over = true;
        }
        self.falling = falling;
    }
}
