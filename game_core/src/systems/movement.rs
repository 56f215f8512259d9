use crate::{Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.rect.y += intent.dir as f32 * config.paddle_speed * time.dt;
    }
}

/// Keep every paddle inside the arena, regardless of how it got there
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.rect.y = config.clamp_paddle_y(paddle.rect.y);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    fn paddle_y(world: &World) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .next()
            .map(|(_e, p)| p.rect.y)
            .unwrap()
    }

    #[test]
    fn test_paddle_moves_by_speed_times_dt() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, &config, Side::Left);
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = 1;

        move_paddles(&mut world, &Time::new(0.1, 0.0), &config);

        assert!((paddle_y(&world) - 290.0).abs() < 1e-3);
    }

    #[test]
    fn test_idle_paddle_does_not_move() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Right);

        move_paddles(&mut world, &Time::new(0.1, 0.0), &config);

        assert_eq!(paddle_y(&world), config.paddle_start_y());
    }

    #[test]
    fn test_clamp_paddles_to_arena() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, &config, Side::Left);

        world.get::<&mut Paddle>(entity).unwrap().rect.y = -35.0;
        clamp_paddles(&mut world, &config);
        assert_eq!(paddle_y(&world), 0.0);

        world.get::<&mut Paddle>(entity).unwrap().rect.y = 580.0;
        clamp_paddles(&mut world, &config);
        assert_eq!(paddle_y(&world), config.arena_height - config.paddle_height);
    }

    #[test]
    fn test_ball_moves_by_velocity_times_dt() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(200.0, -100.0), 10.0);

        move_ball(&mut world, &Time::new(0.5, 0.0));

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(500.0, 250.0));
        }
    }
}
