use hecs::World;

use crate::components::{Paddle, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Read-only view of both paddles' scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the current scores from the paddles in `world`
    pub fn from_world(world: &World) -> Self {
        let mut score = Self::new();
        for (_entity, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => score.left = paddle.score,
                Side::Right => score.right = paddle.score,
            }
        }
        score
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn record_score(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}
