//! The draw list
//!
//! Draw order and visibility are data: a fixed table of scene entries, each
//! pairing a sprite with a visibility predicate and a model-matrix function.
//! The renderer walks the table once per frame; suppressing the ball after a
//! win or picking the right banner is a table entry, not an inline branch.

use glam::{Mat4, Vec3};

use crate::sim::{GameState, Side};
use crate::tuning::Tuning;

/// Sprite identifiers, doubling as texture slot indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    LeftPaddle,
    RightPaddle,
    Ball,
    WinLeft,
    WinRight,
}

/// Number of texture slots
pub const SPRITE_COUNT: usize = 6;

/// Paddle quad scale; the left paddle mirrors the art with a negative x
const PADDLE_SCALE: Vec3 = Vec3::new(1.1, 2.75, 1.0);
const BALL_SCALE: Vec3 = Vec3::new(0.8, 0.8, 1.0);
const BANNER_SCALE: Vec3 = Vec3::new(5.0, 1.5, 1.0);

/// One drawable: texture slot, visibility rule, and per-frame transform
pub struct SceneEntry {
    pub sprite: Sprite,
    pub visible: fn(&GameState) -> bool,
    pub model: fn(&GameState, &Tuning) -> Mat4,
}

/// A resolved draw for this frame
#[derive(Debug, Clone, Copy)]
pub struct SpriteDraw {
    pub sprite: Sprite,
    pub model: Mat4,
}

fn always(_: &GameState) -> bool {
    true
}

fn no_winner(state: &GameState) -> bool {
    state.winner.is_none()
}

fn left_won(state: &GameState) -> bool {
    state.winner == Some(Side::Left)
}

fn right_won(state: &GameState) -> bool {
    state.winner == Some(Side::Right)
}

fn background_model(_: &GameState, tuning: &Tuning) -> Mat4 {
    Mat4::from_scale(Vec3::new(
        tuning.arena_half_width * 2.0,
        tuning.arena_half_height * 2.0,
        1.0,
    ))
}

fn left_paddle_model(state: &GameState, _: &Tuning) -> Mat4 {
    Mat4::from_translation(state.left.pos.extend(0.0))
        * Mat4::from_scale(Vec3::new(-PADDLE_SCALE.x, PADDLE_SCALE.y, PADDLE_SCALE.z))
}

fn right_paddle_model(state: &GameState, _: &Tuning) -> Mat4 {
    Mat4::from_translation(state.right.pos.extend(0.0)) * Mat4::from_scale(PADDLE_SCALE)
}

fn ball_model(state: &GameState, _: &Tuning) -> Mat4 {
    Mat4::from_translation(state.ball.pos.extend(0.0)) * Mat4::from_scale(BALL_SCALE)
}

fn banner_model(_: &GameState, _: &Tuning) -> Mat4 {
    Mat4::from_scale(BANNER_SCALE)
}

/// Back-to-front draw order: background, paddles, then ball or banner
pub const SCENE: [SceneEntry; SPRITE_COUNT] = [
    SceneEntry {
        sprite: Sprite::Background,
        visible: always,
        model: background_model,
    },
    SceneEntry {
        sprite: Sprite::LeftPaddle,
        visible: always,
        model: left_paddle_model,
    },
    SceneEntry {
        sprite: Sprite::RightPaddle,
        visible: always,
        model: right_paddle_model,
    },
    SceneEntry {
        sprite: Sprite::Ball,
        visible: no_winner,
        model: ball_model,
    },
    SceneEntry {
        sprite: Sprite::WinLeft,
        visible: left_won,
        model: banner_model,
    },
    SceneEntry {
        sprite: Sprite::WinRight,
        visible: right_won,
        model: banner_model,
    },
];

/// Resolve the scene table against the current state
pub fn build_draw_list(state: &GameState, tuning: &Tuning) -> Vec<SpriteDraw> {
    SCENE
        .iter()
        .filter(|entry| (entry.visible)(state))
        .map(|entry| SpriteDraw {
            sprite: entry.sprite,
            model: (entry.model)(state, tuning),
        })
        .collect()
}
