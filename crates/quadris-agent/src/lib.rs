//! Tabular Q-learning over encoded board states.
//!
//! The agent never sees the raw grid: [`BoardSignature`] compresses it to
//! per-column heights, hole count, and bumpiness, and the resulting
//! [`StateKey`] indexes a sparse [`QTable`] of action values.
//! [`QLearningAgent`] combines the table with ε-greedy action selection and
//! the one-step Q-learning update.

pub use self::{agent::*, q_table::*, signature::*};

mod agent;
mod q_table;
mod signature;
