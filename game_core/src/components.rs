use glam::Vec2;

use crate::geometry::Rect;
use crate::input::Action;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Horizontal direction a ball travels after bouncing off this paddle
    pub fn away_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn up_action(self) -> Action {
        match self {
            Side::Left => Action::LeftUp,
            Side::Right => Action::RightUp,
        }
    }

    pub fn down_action(self) -> Action {
        match self {
            Side::Left => Action::LeftDown,
            Side::Right => Action::RightDown,
        }
    }
}

/// Display color, linear RGBA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect, // top-left y is clamped to the arena
    pub score: u32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self {
            side,
            rect,
            score: 0,
            color: Color::WHITE,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.rect.y + self.rect.height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            color: Color::WHITE,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Put the ball back at `center`, moving horizontally at `speed`
    pub fn reset(&mut self, center: Vec2, speed: f32, direction: f32) {
        self.pos = center;
        self.vel = Vec2::new(speed * direction.signum(), 0.0);
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
