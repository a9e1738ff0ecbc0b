use std::collections::HashMap;

use quadris_engine::Action;

use crate::StateKey;

/// Sparse table of action values, keyed by encoded state.
///
/// Entries are created lazily: the first lookup of an unseen [`StateKey`]
/// inserts a zero vector over all four actions. Entries are never removed,
/// so the table grows monotonically over a training run.
#[derive(Debug, Default, Clone)]
pub struct QTable {
    entries: HashMap<StateKey, [f64; Action::LEN]>,
}

impl QTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mutable action values for `state`, inserting zeros first
    /// if the state has not been seen.
    pub fn values_mut(&mut self, state: &StateKey) -> &mut [f64; Action::LEN] {
        self.entries.entry(state.clone()).or_default()
    }

    /// Returns the value of `action` in `state` without inserting an entry.
    #[must_use]
    pub fn value(&self, state: &StateKey, action: Action) -> f64 {
        self.entries
            .get(state)
            .map_or(0.0, |values| values[action.index()])
    }

    /// Returns the highest action value in `state`, inserting zeros first if
    /// the state has not been seen.
    pub fn max_value(&mut self, state: &StateKey) -> f64 {
        self.values_mut(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the action with the strictly highest value in `state`.
    ///
    /// Ties break toward the first action in enumeration order, so a fresh
    /// (all-zero) state always yields [`Action::MoveLeft`].
    pub fn greedy_action(&mut self, state: &StateKey) -> Action {
        let values = self.values_mut(state);
        let mut best = Action::ALL[0];
        for &action in &Action::ALL[1..] {
            if values[action.index()] > values[best.index()] {
                best = action;
            }
        }
        best
    }

    /// Number of distinct states visited so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
