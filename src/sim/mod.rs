//! Deterministic simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies;
//! the state record is passed in explicitly and mutated in place.

pub mod state;
pub mod tick;

pub use state::{Ball, GameState, Paddle, Side};
pub use tick::{TickInput, tick};
