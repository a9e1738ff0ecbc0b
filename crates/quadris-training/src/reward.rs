/// Weight of the stack-height penalty in the step reward.
pub const HEIGHT_PENALTY_WEIGHT: f64 = 0.1;

/// Penalty applied when a step terminates the session.
pub const GAME_OVER_PENALTY: f64 = 500.0;

/// Computes the reward signal for one step.
///
/// `Δscore − 0.1 × Δtotal_height`, minus a further 500 when the step caused
/// termination. Line clears both raise the score and lower the stack, so
/// they are rewarded twice over; burying the stack higher without clearing
/// is penalized.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn step_reward(
    score_delta: usize,
    height_before: u32,
    height_after: u32,
    game_over: bool,
) -> f64 {
    let height_delta = f64::from(height_after) - f64::from(height_before);
    let mut reward = score_delta as f64 - HEIGHT_PENALTY_WEIGHT * height_delta;
    if game_over {
        reward -= GAME_OVER_PENALTY;
    }
    reward
}
