use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use quadris_engine::{Action, Seed};

use crate::{QTable, StateKey};

/// Hyper-parameters of the Q-learning rule and ε-greedy policy.
#[derive(Debug, Clone, Copy)]
pub struct AgentConfig {
    /// Exploration probability. Must be within `[0, 1]`.
    pub epsilon: f64,
    /// Learning rate α.
    pub alpha: f64,
    /// Discount factor γ.
    pub gamma: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            alpha: 0.1,
            gamma: 0.99,
        }
    }
}

/// A tabular Q-learning agent with an ε-greedy policy.
///
/// Owns the [`QTable`] and a seeded random source for exploration, so a
/// fixed [`Seed`] makes action selection deterministic for a given table.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    config: AgentConfig,
    q_table: QTable,
    rng: Pcg32,
}

impl QLearningAgent {
    /// Creates an agent with a random exploration seed.
    #[must_use]
    pub fn new(config: AgentConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic
    /// exploration.
    #[must_use]
    pub fn with_seed(config: AgentConfig, seed: Seed) -> Self {
        Self {
            config,
            q_table: QTable::new(),
            rng: Pcg32::from_seed(seed.into_bytes()),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[must_use]
    pub const fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Chooses an action for `state` with the ε-greedy policy.
    ///
    /// With probability ε the action is uniformly random; otherwise it is
    /// the greedy action from the table. Either way the state's entry is
    /// initialized if unseen.
    pub fn select_action(&mut self, state: &StateKey) -> Action {
        self.q_table.values_mut(state);
        if self.rng.random_bool(self.config.epsilon) {
            self.rng.random()
        } else {
            self.q_table.greedy_action(state)
        }
    }

    /// Applies the one-step Q-learning update:
    /// `Q[s][a] += α * (r + γ * max_a' Q[s'][a'] - Q[s][a])`.
    pub fn learn(&mut self, state: &StateKey, action: Action, reward: f64, next_state: &StateKey) {
        let max_next = self.q_table.max_value(next_state);
        let values = self.q_table.values_mut(state);
        let current = values[action.index()];
        values[action.index()] =
            current + self.config.alpha * (reward + self.config.gamma * max_next - current);
    }
}

#[cfg(test)]
mod tests {
    use quadris_engine::Grid;

    use super::*;
    use crate::BoardSignature;

    fn key_for(art: &str) -> StateKey {
        BoardSignature::from_grid(&Grid::from_ascii(art)).key()
    }

    fn seeded_agent(epsilon: f64) -> QLearningAgent {
        let config = AgentConfig {
            epsilon,
            ..AgentConfig::default()
        };
        QLearningAgent::with_seed(config, Seed::from_bytes([42; 16]))
    }

    #[test]
    fn test_zero_epsilon_is_deterministically_greedy() {
        let mut agent = seeded_agent(0.0);
        let state = key_for("#.........");
        agent.q_table.values_mut(&state)[Action::HardDrop.index()] = 5.0;
        for _ in 0..100 {
            assert_eq!(agent.select_action(&state), Action::HardDrop);
        }
    }

    #[test]
    fn test_full_epsilon_is_uniformly_random() {
        let mut agent = seeded_agent(1.0);
        let state = key_for("#.........");
        // a dominant value must not matter when always exploring
        agent.q_table.values_mut(&state)[Action::MoveLeft.index()] = 100.0;

        let trials = 10_000;
        let mut counts = [0_u32; Action::LEN];
        for _ in 0..trials {
            counts[agent.select_action(&state).index()] += 1;
        }
        for &count in &counts {
            // expected 2500 per action; allow a generous margin
            assert!((2200..=2800).contains(&count), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn test_update_moves_value_toward_target() {
        let mut agent = seeded_agent(0.0);
        let state = key_for("#.........");
        let next = key_for("##........");
        agent.learn(&state, Action::HardDrop, 10.0, &next);
        // Q = 0 + 0.1 * (10 + 0.99 * 0 - 0) = 1.0
        let value = agent.q_table().value(&state, Action::HardDrop);
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_update_discounts_next_state_value() {
        let mut agent = seeded_agent(0.0);
        let state = key_for("#.........");
        let next = key_for("##........");
        agent.q_table.values_mut(&next)[Action::MoveLeft.index()] = 2.0;
        agent.learn(&state, Action::MoveRight, 1.0, &next);
        // Q = 0 + 0.1 * (1 + 0.99 * 2 - 0) = 0.298
        let value = agent.q_table().value(&state, Action::MoveRight);
        assert!((value - 0.298).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_updates_converge_to_immediate_reward() {
        let mut agent = seeded_agent(0.0);
        let state = key_for("#.........");
        let next = key_for("##........");
        // next state stays at zero value, so the fixed point is the reward
        for _ in 0..1_000 {
            agent.learn(&state, Action::HardDrop, 7.5, &next);
        }
        let value = agent.q_table().value(&state, Action::HardDrop);
        assert!((value - 7.5).abs() < 1e-6);
    }
}
