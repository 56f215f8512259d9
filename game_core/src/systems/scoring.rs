use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Which paddle, if any, the ball's position awards a point to
pub fn scoring_side(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.left() <= 0.0 {
        Some(Side::Right)
    } else if ball.right() >= config.arena_width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Check if ball left the arena (scoring)
///
/// The scorer's paddle gains one point and the ball restarts from the center,
/// travelling horizontally: a left-edge exit serves right, a right-edge exit
/// serves left.
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events) {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = scoring_side(ball, config) {
            let direction = match side {
                Side::Right => 1.0,
                Side::Left => -1.0,
            };
            ball.reset(config.center(), config.ball_speed, direction);
            scorer = Some(side);
        }
    }

    let Some(scorer) = scorer else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score = paddle.score.saturating_add(1);
            tracing::debug!(side = ?scorer, score = paddle.score, "point scored");
        }
    }
    events.record_score(scorer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Events, Score};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        (world, config, Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 300.0), Vec2::new(-400.0, 0.0), 10.0);

        check_scoring(&mut world, &config, &mut events);

        assert_eq!(Score::from_world(&world), Score { left: 0, right: 1 });
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);

        let ball = ball(&world);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(config.ball_speed, 0.0));
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(config.arena_width - 5.0, 120.0),
            Vec2::new(300.0, 250.0),
            10.0,
        );

        check_scoring(&mut world, &config, &mut events);

        assert_eq!(Score::from_world(&world), Score { left: 1, right: 0 });
        assert!(events.left_scored, "Should trigger left_scored event");

        let ball = ball(&world);
        assert_eq!(ball.pos, config.center());
        assert_eq!(ball.vel, Vec2::new(-config.ball_speed, 0.0));
    }

    #[test]
    fn test_edge_touch_counts_as_exit() {
        let config = Config::new();
        let touching = Ball::new(Vec2::new(10.0, 300.0), Vec2::ZERO, 10.0);
        assert_eq!(scoring_side(&touching, &config), Some(Side::Right));

        let inside = Ball::new(Vec2::new(10.5, 300.0), Vec2::ZERO, 10.0);
        assert_eq!(scoring_side(&inside, &config), None);

        let right = Ball::new(Vec2::new(790.0, 300.0), Vec2::ZERO, 10.0);
        assert_eq!(scoring_side(&right, &config), Some(Side::Left));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, config.center(), Vec2::new(250.0, 100.0), 10.0);

        check_scoring(&mut world, &config, &mut events);

        assert_eq!(Score::from_world(&world), Score::new());
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
        assert_eq!(ball(&world).vel, Vec2::new(250.0, 100.0));
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut events) = setup_world();
        let entity = create_ball(&mut world, Vec2::new(795.0, 300.0), Vec2::new(400.0, 0.0), 10.0);

        check_scoring(&mut world, &config, &mut events);
        world.get::<&mut Ball>(entity).unwrap().pos = Vec2::new(800.0, 50.0);
        check_scoring(&mut world, &config, &mut events);

        assert_eq!(Score::from_world(&world), Score { left: 2, right: 0 });
    }

    #[test]
    fn test_paddle_positions_survive_a_point() {
        let (mut world, config, mut events) = setup_world();
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.rect.y = 12.0;
        }
        create_ball(&mut world, Vec2::new(-3.0, 300.0), Vec2::new(-400.0, 0.0), 10.0);

        check_scoring(&mut world, &config, &mut events);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.rect.y, 12.0);
        }
    }
}
