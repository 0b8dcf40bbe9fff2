//! Data-driven game balance
//!
//! Every numeric constant the update step consults lives here with its units
//! spelled out, instead of being sprinkled through the gameplay code. An
//! optional JSON file can override the defaults at startup.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gameplay constants with documented units.
///
/// The play field is an orthographic box spanning `±arena_half_width` by
/// `±arena_half_height` world units, matching the render projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal half-extent of the play field (world units)
    pub arena_half_width: f32,
    /// Vertical half-extent of the play field (world units)
    pub arena_half_height: f32,

    /// Horizontal distance of each paddle from center (world units)
    pub paddle_x: f32,
    /// Paddle travel speed (world units per second)
    pub paddle_speed: f32,
    /// Paddle center may not leave ±this bound (world units)
    pub paddle_y_clamp: f32,

    /// Ball speed at the start of a match (world units per second)
    pub ball_start_speed: f32,
    /// Ball acceleration while the round is in play (world units per second²)
    pub ball_speed_ramp: f32,

    /// Inner edge of the hit band in front of a paddle (world units from center)
    pub hit_band_near: f32,
    /// Outer edge of the hit band (world units from center)
    pub hit_band_far: f32,
    /// Maximum |ball.y - paddle.y| that still counts as a hit (world units)
    pub hit_y_threshold: f32,
    /// Vertical deflection added per unit of center offset on a paddle hit
    /// (dimensionless, applied before renormalizing)
    pub hit_deflection: f32,

    /// Ball center bounces when |y| exceeds this bound (world units)
    pub wall_y: f32,
    /// Post-bounce nudge speed away from the wall (world units per second)
    pub wall_nudge: f32,

    /// A side wins once the ball's |x| exceeds this bound (world units)
    pub win_x: f32,
    /// Seconds the win banner stays up before the game exits
    pub win_countdown: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_half_width: 5.0,
            arena_half_height: 3.75,

            paddle_x: 4.5,
            paddle_speed: 3.0,
            paddle_y_clamp: 2.55,

            ball_start_speed: 2.0,
            ball_speed_ramp: 0.15,

            hit_band_near: 4.2,
            hit_band_far: 4.6,
            hit_y_threshold: 1.6,
            hit_deflection: 0.5,

            wall_y: 3.35,
            wall_nudge: 1.0,

            win_x: 5.0,
            win_countdown: 3.0,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file, falling back to defaults.
    ///
    /// A missing file is not an error; a file that exists but fails to parse
    /// is, since silently ignoring a typo'd override is worse than stopping.
    pub fn load_or_default(path: &str) -> Result<Self, String> {
        if !Path::new(path).exists() {
            log::info!("No tuning file at '{path}', using defaults");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read tuning file '{path}': {e}"))?;
        let tuning: Self = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse tuning file '{path}': {e}"))?;
        log::info!("Loaded tuning from '{path}'");
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_consistent() {
        let t = Tuning::default();
        // Paddle sits inside the hit band, band sits inside the win bound
        assert!(t.hit_band_near < t.paddle_x && t.paddle_x < t.hit_band_far);
        assert!(t.hit_band_far < t.win_x + t.arena_half_width);
        // Clamped paddle stays on screen
        assert!(t.paddle_y_clamp < t.arena_half_height);
        assert!(t.wall_y < t.arena_half_height);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let t = Tuning::load_or_default("does/not/exist.json").unwrap();
        assert_eq!(t.paddle_speed, Tuning::default().paddle_speed);
    }

    #[test]
    fn test_partial_override_parses() {
        let t: Tuning = serde_json::from_str(r#"{ "paddle_speed": 4.0 }"#).unwrap();
        assert_eq!(t.paddle_speed, 4.0);
        assert_eq!(t.win_x, Tuning::default().win_x);
    }
}
