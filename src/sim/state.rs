//! Game state and core simulation types
//!
//! One process-wide state record, created at startup and mutated in place
//! every frame. Nothing here touches rendering or the platform.

use glam::Vec2;

use crate::tuning::Tuning;

/// Which side of the arena a paddle (or the winner) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A paddle. The x coordinate is fixed per side; only y moves.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub pos: Vec2,
    /// Vertical direction signal for this frame: -1, 0, or +1
    pub dir_y: f32,
}

impl Paddle {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            dir_y: 0.0,
        }
    }
}

/// The ball. Speed is a separate scalar so collisions can reshape the
/// direction without touching it; `dir` stays unit-length.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
    /// Current speed (world units per second), ramps up while in play
    pub speed: f32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,

    /// Right paddle is AI-driven when set (toggled with T)
    pub ai_enabled: bool,
    /// AI phase: current leg of the bounce-between-bounds sweep
    pub ai_moving_up: bool,

    /// Set at most once; never cleared
    pub winner: Option<Side>,
    /// Seconds left on the win banner before the loop ends
    pub win_countdown: f32,
    /// Cleared by quit input or by the countdown reaching zero
    pub running: bool,
}

impl GameState {
    /// Starting state: paddles centered on their sides, ball at the origin
    /// heading left, AI off.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            left: Paddle::new(-tuning.paddle_x),
            right: Paddle::new(tuning.paddle_x),
            ball: Ball {
                pos: Vec2::ZERO,
                dir: Vec2::new(-1.0, 0.0),
                speed: tuning.ball_start_speed,
            },
            ai_enabled: false,
            ai_moving_up: true,
            winner: None,
            win_countdown: tuning.win_countdown,
            running: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning);

        assert_eq!(state.left.pos.x, -tuning.paddle_x);
        assert_eq!(state.right.pos.x, tuning.paddle_x);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert!(state.ball.dir.is_normalized());
        assert!(state.winner.is_none());
        assert!(state.running);
        assert!(!state.ai_enabled);
    }
}
