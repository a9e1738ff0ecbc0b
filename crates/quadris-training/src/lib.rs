//! Episode orchestration for Q-learning training runs.
//!
//! The trainer drives the loop that connects the game engine to the agent:
//!
//! 1. **Episode** - Create a fresh [`GameSession`] and play it to termination
//! 2. **Step** - Encode the grid, let the agent pick an action, apply it
//! 3. **Reward** - Score delta minus a stack-height penalty, with a large
//!    penalty on termination (see [`step_reward`])
//! 4. **Learn** - Feed the transition back into the agent's Q-update
//! 5. **Report** - Emit an [`EpisodeReport`] to a [`ProgressSink`] every
//!    `report_interval` episodes
//!
//! Training is single-threaded and synchronous; the only state that survives
//! an episode is the agent's Q-table.
//!
//! # Example
//!
//! ```
//! use quadris_agent::{AgentConfig, QLearningAgent};
//! use quadris_training::{NoopSink, Trainer, TrainerConfig};
//!
//! let mut agent = QLearningAgent::new(AgentConfig::default());
//! let mut trainer = Trainer::new(TrainerConfig {
//!     episodes: 10,
//!     ..TrainerConfig::default()
//! });
//! let summary = trainer.train(&mut agent, &mut NoopSink);
//! assert_eq!(summary.episodes, 10);
//! ```
//!
//! [`GameSession`]: quadris_engine::GameSession

pub use self::{reward::*, trainer::*};

mod reward;
mod trainer;
