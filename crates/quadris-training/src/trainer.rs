use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use quadris_agent::{BoardSignature, QLearningAgent};
use quadris_engine::{GameSession, Seed};

use crate::step_reward;

/// Observer of periodic training progress.
///
/// Reporting is a side effect with no influence on learning.
pub trait ProgressSink {
    fn report(&mut self, report: &EpisodeReport);
}

/// A sink that discards all reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn report(&mut self, _report: &EpisodeReport) {}
}

/// Progress snapshot for one finished episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeReport {
    /// Zero-based episode index.
    pub episode: usize,
    /// Final score of the episode.
    pub score: usize,
    /// Sum of all step rewards over the episode.
    pub total_reward: f64,
}

/// Training run parameters.
#[derive(Debug, Clone, Copy)]
pub struct TrainerConfig {
    /// Number of episodes to run.
    pub episodes: usize,
    /// Report every this many episodes (episode 0 included).
    pub report_interval: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            report_interval: 100,
        }
    }
}

/// Aggregate result of a finished training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingSummary {
    /// Number of episodes run.
    pub episodes: usize,
    /// Score of the last episode.
    pub final_score: usize,
    /// Best score over all episodes.
    pub best_score: usize,
    /// Number of distinct states in the agent's Q-table afterwards.
    pub visited_states: usize,
}

/// Runs complete training episodes against a [`QLearningAgent`].
///
/// The trainer owns its own random source, used only to derive a fresh
/// session seed per episode; fixing the trainer seed and the agent seed
/// makes a whole run reproducible.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainerConfig,
    rng: Pcg32,
}

impl Trainer {
    /// Creates a trainer with a random seed.
    #[must_use]
    pub fn new(config: TrainerConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic
    /// episode seeding.
    #[must_use]
    pub fn with_seed(config: TrainerConfig, seed: Seed) -> Self {
        Self {
            config,
            rng: Pcg32::from_seed(seed.into_bytes()),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Runs all configured episodes, updating `agent` in place.
    pub fn train(
        &mut self,
        agent: &mut QLearningAgent,
        sink: &mut dyn ProgressSink,
    ) -> TrainingSummary {
        let mut final_score = 0;
        let mut best_score = 0;
        for episode in 0..self.config.episodes {
            let (score, total_reward) = self.run_episode(agent);
            final_score = score;
            best_score = best_score.max(score);
            if self.config.report_interval > 0 && episode % self.config.report_interval == 0 {
                sink.report(&EpisodeReport {
                    episode,
                    score,
                    total_reward,
                });
            }
        }
        TrainingSummary {
            episodes: self.config.episodes,
            final_score,
            best_score,
            visited_states: agent.q_table().len(),
        }
    }

    /// Plays one session to termination, feeding every transition into the
    /// agent. Returns the episode's final score and cumulative reward.
    fn run_episode(&mut self, agent: &mut QLearningAgent) -> (usize, f64) {
        let mut session = GameSession::with_seed(self.rng.random());
        let mut signature = BoardSignature::from_grid(session.grid());
        let mut total_reward = 0.0;

        // the loop must observe the terminal flag: stepping a terminated
        // session is a guarded no-op in the engine
        while !session.is_game_over() {
            let state = signature.key();
            let action = agent.select_action(&state);
            let score_before = session.stats().score();
            session.step(action);

            let next_signature = BoardSignature::from_grid(session.grid());
            let reward = step_reward(
                session.stats().score() - score_before,
                signature.total_height(),
                next_signature.total_height(),
                session.is_game_over(),
            );
            total_reward += reward;
            agent.learn(&state, action, reward, &next_signature.key());
            signature = next_signature;
        }
        (session.stats().score(), total_reward)
    }
}
