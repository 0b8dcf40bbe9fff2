//! Per-frame simulation step
//!
//! Advances the game state by one variable-length timestep. Every branch is
//! a total function of the current state; there are no error paths here.

use glam::Vec2;

use super::state::{Ball, GameState, Paddle, Side};
use crate::tuning::Tuning;

/// Input signals for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left paddle direction: -1, 0, or +1
    pub left_axis: f32,
    /// Right paddle direction: -1, 0, or +1 (ignored while AI drives it)
    pub right_axis: f32,
    /// Toggle the AI opponent (edge-triggered, once per key press)
    pub toggle_ai: bool,
    /// Quit requested
    pub quit: bool,
}

/// Advance the game state by `dt` seconds.
///
/// `dt` is used as given: a stall between frames produces one large step,
/// which can tunnel the ball through a hit band.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, tuning: &Tuning) {
    if input.quit {
        state.running = false;
        return;
    }
    if input.toggle_ai {
        state.ai_enabled = !state.ai_enabled;
    }

    // Direction signals are overwritten every frame, never latched
    state.left.dir_y = input.left_axis;
    state.right.dir_y = if state.ai_enabled {
        ai_direction(&mut state.ai_moving_up, state.right.pos.y, tuning)
    } else {
        input.right_axis
    };

    integrate_paddle(&mut state.left, dt, tuning);
    integrate_paddle(&mut state.right, dt, tuning);

    if state.winner.is_none() {
        integrate_ball(&mut state.ball, dt, tuning);

        // Left paddle checked first; in the degenerate fast-ball case where
        // both bands could match in one frame, the first match wins.
        if !paddle_collision(&mut state.ball, &state.left, Side::Left, tuning) {
            paddle_collision(&mut state.ball, &state.right, Side::Right, tuning);
        }
        wall_collision(&mut state.ball, dt, tuning);

        if state.ball.pos.x > tuning.win_x {
            state.winner = Some(Side::Left);
        } else if state.ball.pos.x < -tuning.win_x {
            state.winner = Some(Side::Right);
        }
    } else {
        // Ball is frozen; run out the banner timer and stop the loop
        state.win_countdown -= dt;
        if state.win_countdown <= 0.0 {
            state.running = false;
        }
    }
}

/// Bounce-between-bounds sweep for the AI paddle. Deterministic in the phase
/// flag and the paddle's current height; human input plays no part.
fn ai_direction(moving_up: &mut bool, paddle_y: f32, tuning: &Tuning) -> f32 {
    if *moving_up {
        if paddle_y >= tuning.paddle_y_clamp {
            *moving_up = false;
            -1.0
        } else {
            1.0
        }
    } else if paddle_y <= -tuning.paddle_y_clamp {
        *moving_up = true;
        1.0
    } else {
        -1.0
    }
}

/// Move a paddle by its direction signal, skipping the update entirely when
/// the result would leave the clamped range.
fn integrate_paddle(paddle: &mut Paddle, dt: f32, tuning: &Tuning) {
    let next = paddle.pos.y + paddle.dir_y * tuning.paddle_speed * dt;
    if next.abs() <= tuning.paddle_y_clamp {
        paddle.pos.y = next;
    }
}

/// Move the ball and ramp its speed while the round is in play
fn integrate_ball(ball: &mut Ball, dt: f32, tuning: &Tuning) {
    ball.pos += ball.dir * ball.speed * dt;
    ball.speed += tuning.ball_speed_ramp * dt;
}

/// Hit test and response against one paddle.
///
/// The ball must sit in the thin band in front of the paddle, be moving
/// toward it, and be within the vertical threshold of the paddle center.
/// On a hit the horizontal direction is set to point away, a vertical
/// deflection proportional to the center offset is added, and the direction
/// is renormalized so speed stays decoupled from direction.
fn paddle_collision(ball: &mut Ball, paddle: &Paddle, side: Side, tuning: &Tuning) -> bool {
    let in_band = match side {
        Side::Left => {
            ball.dir.x < 0.0
                && ball.pos.x <= -tuning.hit_band_near
                && ball.pos.x >= -tuning.hit_band_far
        }
        Side::Right => {
            ball.dir.x > 0.0
                && ball.pos.x >= tuning.hit_band_near
                && ball.pos.x <= tuning.hit_band_far
        }
    };
    let offset = ball.pos.y - paddle.pos.y;
    if !in_band || offset.abs() >= tuning.hit_y_threshold {
        return false;
    }

    ball.dir.x = match side {
        Side::Left => ball.dir.x.abs(),
        Side::Right => -ball.dir.x.abs(),
    };
    ball.dir.y += offset * tuning.hit_deflection;
    ball.dir = ball.dir.normalize_or(Vec2::new(ball.dir.x.signum(), 0.0));
    true
}

/// Bounce off the top/bottom bound: invert the vertical direction and nudge
/// along the new direction so the ball does not stick in the wall.
fn wall_collision(ball: &mut Ball, dt: f32, tuning: &Tuning) {
    if ball.pos.y.abs() > tuning.wall_y {
        ball.dir.y = -ball.dir.y;
        ball.pos += ball.dir * tuning.wall_nudge * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_dir(angle: f32) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }

    #[test]
    fn test_null_time_is_idempotent() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let before = state.clone();

        tick(&mut state, &TickInput::default(), 0.0, &tuning);

        assert_eq!(state.left.pos, before.left.pos);
        assert_eq!(state.right.pos, before.right.pos);
        assert_eq!(state.ball.pos, before.ball.pos);
        assert_eq!(state.ball.speed, before.ball.speed);
        assert!(state.winner.is_none());
        assert!(state.running);
    }

    #[test]
    fn test_right_paddle_hit_flips_direction() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.ball.pos = Vec2::new(4.0, 0.0);
        state.ball.dir = Vec2::new(1.0, 0.0);
        state.ball.speed = 2.0;
        state.right.pos = Vec2::new(4.5, 0.0);

        // 0.15s at speed 2.0 puts the ball at x = 4.3, inside the hit band
        tick(&mut state, &TickInput::default(), 0.15, &tuning);

        assert!(state.ball.dir.x < 0.0, "ball should bounce off the right paddle");
        assert!(state.ball.dir.is_normalized());
    }

    #[test]
    fn test_left_paddle_hit_deflects_by_offset() {
        let tuning = Tuning::default();
        let mut ball = Ball {
            pos: Vec2::new(-4.3, 0.8),
            dir: Vec2::new(-1.0, 0.0),
            speed: 2.0,
        };
        let paddle = Paddle::new(-tuning.paddle_x);

        assert!(paddle_collision(&mut ball, &paddle, Side::Left, &tuning));
        assert!(ball.dir.x > 0.0);
        // Ball hit above the paddle center, so it deflects upward
        assert!(ball.dir.y > 0.0);
        assert!(ball.dir.is_normalized());
    }

    #[test]
    fn test_paddle_miss_outside_threshold() {
        let tuning = Tuning::default();
        let mut ball = Ball {
            pos: Vec2::new(4.3, 2.5),
            dir: Vec2::new(1.0, 0.0),
            speed: 2.0,
        };
        let paddle = Paddle::new(tuning.paddle_x);

        assert!(!paddle_collision(&mut ball, &paddle, Side::Right, &tuning));
        assert_eq!(ball.dir, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_wall_bounce_inverts_vertical() {
        let tuning = Tuning::default();
        let mut ball = Ball {
            pos: Vec2::new(0.0, 3.5),
            dir: Vec2::new(0.6, 0.8),
            speed: 2.0,
        };

        wall_collision(&mut ball, 1.0 / 60.0, &tuning);

        assert!(ball.dir.y < 0.0);
        assert!(ball.dir.is_normalized());
        // Nudge moved the ball away from the wall
        assert!(ball.pos.y < 3.5);
    }

    #[test]
    fn test_winner_set_once_and_kept() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.ball.pos = Vec2::new(5.5, 0.0);
        state.ball.dir = Vec2::new(1.0, 0.0);

        tick(&mut state, &TickInput::default(), 1.0 / 60.0, &tuning);
        assert_eq!(state.winner, Some(Side::Left));
        let frozen = state.ball.pos;

        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 1.0 / 60.0, &tuning);
        }
        assert_eq!(state.winner, Some(Side::Left));
        assert_eq!(state.ball.pos, frozen, "ball stops advancing after a win");
    }

    #[test]
    fn test_right_wins_past_left_bound() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.ball.pos = Vec2::new(-5.5, 0.0);

        tick(&mut state, &TickInput::default(), 1.0 / 60.0, &tuning);
        assert_eq!(state.winner, Some(Side::Right));
    }

    #[test]
    fn test_countdown_ends_the_loop() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.winner = Some(Side::Left);

        let mut elapsed = 0.0;
        while state.running && elapsed < tuning.win_countdown * 2.0 {
            tick(&mut state, &TickInput::default(), 0.1, &tuning);
            elapsed += 0.1;
        }
        assert!(!state.running);
        assert!(elapsed >= tuning.win_countdown);
    }

    #[test]
    fn test_quit_clears_running() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let input = TickInput {
            quit: true,
            ..Default::default()
        };

        tick(&mut state, &input, 1.0 / 60.0, &tuning);
        assert!(!state.running);
    }

    #[test]
    fn test_ai_toggle_is_applied() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let input = TickInput {
            toggle_ai: true,
            ..Default::default()
        };

        tick(&mut state, &input, 1.0 / 60.0, &tuning);
        assert!(state.ai_enabled);
        tick(&mut state, &input, 1.0 / 60.0, &tuning);
        assert!(!state.ai_enabled);
    }

    #[test]
    fn test_ai_reverses_at_bounds() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.ai_enabled = true;
        state.right.pos.y = tuning.paddle_y_clamp;
        state.ai_moving_up = true;

        tick(&mut state, &TickInput::default(), 1.0 / 60.0, &tuning);
        assert!(!state.ai_moving_up);
        assert!(state.right.dir_y < 0.0);
        assert!(state.right.pos.y < tuning.paddle_y_clamp);
    }

    #[test]
    fn test_ai_ignores_human_right_input() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.ai_enabled = true;
        state.ai_moving_up = true;
        let input = TickInput {
            right_axis: -1.0,
            ..Default::default()
        };

        tick(&mut state, &input, 1.0 / 60.0, &tuning);
        // AI sweep (upward) wins over the held-down human input
        assert!(state.right.pos.y > 0.0);
    }

    #[test]
    fn test_ball_speed_ramps_while_in_play() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let start = state.ball.speed;

        tick(&mut state, &TickInput::default(), 1.0, &tuning);
        assert!(state.ball.speed > start);
    }

    proptest! {
        #[test]
        fn prop_stationary_paddle_never_moves(dt in 0.0f32..1000.0, y in -2.5f32..2.5) {
            let tuning = Tuning::default();
            let mut paddle = Paddle::new(tuning.paddle_x);
            paddle.pos.y = y;
            paddle.dir_y = 0.0;

            integrate_paddle(&mut paddle, dt, &tuning);
            prop_assert_eq!(paddle.pos.y, y);
        }

        #[test]
        fn prop_paddle_clamp_is_never_exceeded(
            dt in 0.0f32..10.0,
            steps in 1usize..200,
            up in proptest::bool::ANY,
        ) {
            let tuning = Tuning::default();
            let mut paddle = Paddle::new(tuning.paddle_x);
            paddle.pos.y = if up { tuning.paddle_y_clamp } else { -tuning.paddle_y_clamp };
            paddle.dir_y = if up { 1.0 } else { -1.0 };

            for _ in 0..steps {
                integrate_paddle(&mut paddle, dt, &tuning);
                prop_assert!(paddle.pos.y.abs() <= tuning.paddle_y_clamp);
            }
        }

        #[test]
        fn prop_direction_is_unit_after_paddle_hit(
            angle in -0.9f32..0.9,
            offset in -1.5f32..1.5,
        ) {
            let tuning = Tuning::default();
            let paddle = Paddle::new(tuning.paddle_x);
            let mut ball = Ball {
                pos: Vec2::new(4.3, offset),
                dir: unit_dir(angle),
                speed: 2.0,
            };

            if paddle_collision(&mut ball, &paddle, Side::Right, &tuning) {
                prop_assert!((ball.dir.length() - 1.0).abs() < 1e-5);
                prop_assert!(ball.dir.x < 0.0);
            }
        }

        #[test]
        fn prop_direction_is_unit_after_wall_bounce(angle in 0.1f32..3.0) {
            let tuning = Tuning::default();
            let mut ball = Ball {
                pos: Vec2::new(0.0, tuning.wall_y + 0.1),
                dir: unit_dir(angle),
                speed: 2.0,
            };

            wall_collision(&mut ball, 1.0 / 60.0, &tuning);
            prop_assert!((ball.dir.length() - 1.0).abs() < 1e-5);
        }
    }
}
