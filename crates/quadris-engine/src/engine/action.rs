use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Error returned when converting an out-of-range index into an [`Action`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("action index out of range (expected 0..4)")]
pub struct InvalidActionError;

/// One of the four discrete inputs accepted by [`GameSession::step`].
///
/// The discriminants are stable and match the action indices used by
/// learning agents (0-3).
///
/// [`GameSession::step`]: super::GameSession::step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Shift the falling piece one column to the left.
    MoveLeft = 0,
    /// Shift the falling piece one column to the right.
    MoveRight = 1,
    /// Rotate the falling piece 90° clockwise.
    RotateClockwise = 2,
    /// Drop the falling piece straight down and lock it.
    HardDrop = 3,
}

impl Action {
    /// Number of actions (4).
    pub const LEN: usize = 4;

    /// All actions in enumeration order.
    ///
    /// This order defines the deterministic tie-break used by greedy action
    /// selection.
    pub const ALL: [Action; Action::LEN] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::RotateClockwise,
        Action::HardDrop,
    ];

    /// Returns the stable index of this action (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Action {
    type Error = InvalidActionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Action::MoveLeft),
            1 => Ok(Action::MoveRight),
            2 => Ok(Action::RotateClockwise),
            3 => Ok(Action::HardDrop),
            _ => Err(InvalidActionError),
        }
    }
}

impl Distribution<Action> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        match rng.random_range(0..=3) {
            0 => Action::MoveLeft,
            1 => Action::MoveRight,
            2 => Action::RotateClockwise,
            _ => Action::HardDrop,
        }
    }
}
