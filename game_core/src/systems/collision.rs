use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Flip the ball's vertical velocity when it touches the top or bottom edge.
///
/// The ball is not pushed back inside; it may overlap the edge for a frame.
pub fn bounce_off_floor_and_ceiling(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.top() <= 0.0 || ball.bottom() >= config.arena_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Same rule as [`bounce_off_floor_and_ceiling`] on the left/right edges.
/// Only runs when scoring is replaced by side walls.
pub fn bounce_off_side_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.left() <= 0.0 || ball.right() >= config.arena_width {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        }
    }
}

/// Velocity after the ball strikes a paddle.
///
/// The contact offset from the paddle center, normalized by half the paddle
/// height and clamped to [-1, 1], maps linearly onto a bounce angle of up to
/// `config.max_bounce_angle`. Speed is always `config.ball_speed`.
pub fn bounce_velocity(config: &Config, side: Side, paddle_center_y: f32, ball_y: f32) -> Vec2 {
    let half_height = config.paddle_height / 2.0;
    let offset = ((ball_y - paddle_center_y) / half_height).clamp(-1.0, 1.0);
    let angle = offset * config.max_bounce_angle;

    Vec2::new(
        side.away_sign() * config.ball_speed * angle.cos(),
        -config.ball_speed * angle.sin(),
    )
}

/// Check ball collisions with both paddles (left first)
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side != Side::Left);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !paddle.rect.intersects_circle(ball.pos, ball.radius) {
                continue;
            }

            ball.vel = bounce_velocity(config, paddle.side, paddle.center_y(), ball.pos.y);

            // Push ball flush against the paddle face so it cannot re-trigger
            ball.pos.x = match paddle.side {
                Side::Left => paddle.rect.x + paddle.rect.width + ball.radius,
                Side::Right => paddle.rect.x - ball.radius,
            };

            events.ball_hit_paddle = true;
            tracing::trace!(side = ?paddle.side, vel = ?ball.vel, "ball hit paddle");
        }
    }
}
