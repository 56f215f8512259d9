use glam::Vec2;

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// How the opening serve sets the ball's diagonal velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServeMode {
    /// `(S/√2, S/√2)`: resultant speed is exactly the ball speed.
    #[default]
    Normalized,
    /// `(S, S)`: each axis gets the full ball speed, resultant is `S·√2`.
    Raw,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub max_bounce_angle: f32,
    pub fixed_dt: f32,
    pub max_dt: f32,
    pub serve: ServeMode,
    /// Reflect off the left/right edges instead of scoring.
    pub side_walls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::SCREEN_WIDTH,
            arena_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_offset: Params::PADDLE_OFFSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
            serve: ServeMode::default(),
            side_walls: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that a match started with this config can keep its invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("max_bounce_angle", self.max_bounce_angle),
            ("fixed_dt", self.fixed_dt),
            ("max_dt", self.max_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.arena_width || diameter >= self.arena_height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        let occupied = 2.0 * (self.paddle_offset + self.paddle_width);
        if !self.paddle_offset.is_finite() || self.paddle_offset < 0.0 || occupied >= self.arena_width
        {
            return Err(ConfigError::PaddlesOverlap {
                offset: self.paddle_offset,
                paddle_width: self.paddle_width,
                arena_width: self.arena_width,
            });
        }

        Ok(())
    }

    /// Left edge X of a paddle's rectangle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_offset,
            Side::Right => self.arena_width - self.paddle_offset - self.paddle_width,
        }
    }

    /// Top edge Y that centers a paddle vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Velocity of the opening serve
    pub fn serve_velocity(&self) -> Vec2 {
        let axis = match self.serve {
            ServeMode::Normalized => self.ball_speed / std::f32::consts::SQRT_2,
            ServeMode::Raw => self.ball_speed,
        };
        Vec2::new(axis, axis)
    }
}
