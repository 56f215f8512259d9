pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// Entities spawned for a match
#[derive(Debug, Clone, Copy)]
pub struct MatchEntities {
    pub left_paddle: Entity,
    pub right_paddle: Entity,
    pub ball: Entity,
}

/// Run the Pong game simulation for one rendered frame
///
/// `time.dt` is clamped to `config.max_dt` and split into sub-steps of at most
/// `config.fixed_dt`, or run whole when `fixed_dt` is not positive. Each sub-step runs the whole pipeline. `events` reports
/// everything that happened during the frame.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    actions: &ActionState,
    events: &mut Events,
) {
    // Non-finite or negative deltas stall the frame instead of rewinding it
    let clamped_dt = if time.dt.is_finite() && time.dt > 0.0 {
        time.dt.min(config.max_dt).max(0.0)
    } else {
        0.0
    };

    // An unusable sub-step length runs the frame as a single step
    let substep_dt = if config.fixed_dt.is_finite() && config.fixed_dt > 0.0 {
        config.fixed_dt
    } else {
        clamped_dt
    };

    events.clear();
    ingest_inputs(world, actions);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(substep_dt);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Move ball
        move_ball(world, &step_time);

        // 2. Move paddles based on intents, then keep them in the arena
        move_paddles(world, &step_time, config);
        clamp_paddles(world, config);

        // 3. Check collisions (walls, then paddles)
        bounce_off_floor_and_ceiling(world, config, events);
        if config.side_walls {
            bounce_off_side_walls(world, config, events);
        }
        check_paddle_collisions(world, config, events);

        // 4. Check scoring (ball exited arena)
        if !config.side_walls {
            check_scoring(world, config, events);
        }
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> Entity {
    let rect = Rect::new(
        config.paddle_x(side),
        config.paddle_start_y(),
        config.paddle_width,
        config.paddle_height,
    );
    world.spawn((Paddle::new(side, rect), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}

/// Spawn both paddles and the ball for a fresh match
pub fn init_match(world: &mut World, config: &Config) -> Result<MatchEntities, ConfigError> {
    config.validate()?;

    let left_paddle = create_paddle(world, config, Side::Left);
    let right_paddle = create_paddle(world, config, Side::Right);
    let ball = create_ball(
        world,
        config.center(),
        config.serve_velocity(),
        config.ball_radius,
    );

    tracing::debug!(serve = ?config.serve, side_walls = config.side_walls, "match initialised");

    Ok(MatchEntities {
        left_paddle,
        right_paddle,
        ball,
    })
}
