/// Points credited per cleared row.
///
/// Scoring is linear: clearing k simultaneous rows credits `100 * k`.
const SCORE_PER_ROW: usize = 100;

/// Score and line-clear statistics for one game session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    score: usize,
    completed_pieces: usize,
    total_cleared_rows: usize,
}

impl SessionStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_rows: 0,
        }
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the total number of pieces locked into the grid.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    /// Returns the total number of rows cleared.
    #[must_use]
    pub const fn total_cleared_rows(&self) -> usize {
        self.total_cleared_rows
    }

    /// Records a locked piece and the rows it cleared.
    pub(crate) const fn record_lock(&mut self, cleared_rows: usize) {
        self.completed_pieces += 1;
        self.total_cleared_rows += cleared_rows;
        self.score += SCORE_PER_ROW * cleared_rows;
    }
}
