//! Configuration errors.

use thiserror::Error;

/// Reasons a [`Config`](crate::Config) cannot start a match.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length, speed or time step is zero, negative, NaN or infinite.
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    /// The paddle cannot fit vertically inside the arena.
    #[error("paddle height {paddle_height} exceeds arena height {arena_height}")]
    PaddleTooTall {
        paddle_height: f32,
        arena_height: f32,
    },

    /// The ball would touch both side walls (or both floors) at once.
    #[error("ball diameter {diameter} must be smaller than the arena ({width}x{height})")]
    BallTooLarge {
        diameter: f32,
        width: f32,
        height: f32,
    },

    /// Left and right paddles would overlap or swap sides.
    #[error("paddles overlap: offset {offset} and width {paddle_width} leave no room in width {arena_width}")]
    PaddlesOverlap {
        offset: f32,
        paddle_width: f32,
        arena_width: f32,
    },
}
