//! Breeze Pong - a minimal two-paddle pong game
//!
//! Core modules:
//! - `sim`: deterministic simulation (state, per-frame update, collisions)
//! - `input`: keyboard state tracking and per-frame input derivation
//! - `renderer`: wgpu pipeline, texture loading, and the data-driven draw list
//! - `tuning`: data-driven game balance with documented units

pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::{GameState, TickInput};
pub use tuning::Tuning;
