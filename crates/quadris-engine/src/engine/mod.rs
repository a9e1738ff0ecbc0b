//! Game engine logic and state management.
//!
//! This module provides the high-level game logic that drives one episode of
//! play on top of the core data structures:
//!
//! - [`GameSession`] - One falling-piece episode (grid, falling piece, stats,
//!   terminal flag)
//! - [`Action`] - The four discrete inputs a player or agent can issue
//! - [`SessionStats`] - Score and line-clear statistics
//! - [`Seed`] - Seed for deterministic piece generation
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] (spawns the first piece)
//! 2. Issue [`Action`]s via [`GameSession::step`]; every non-drop step also
//!    applies one tick of gravity
//! 3. Locked pieces clear full rows and spawn the next piece
//! 4. The session ends when a newly spawned piece collides
//!    ([`GameSession::is_game_over`])
//!
//! # Example
//!
//! ```
//! use quadris_engine::{Action, GameSession};
//!
//! let mut session = GameSession::new();
//! while !session.is_game_over() {
//!     session.step(Action::HardDrop);
//! }
//! println!("final score: {}", session.stats().score());
//! ```

pub use self::{action::*, seed::*, session::*, stats::*};

mod action;
mod seed;
mod session;
mod stats;
