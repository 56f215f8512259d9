use game_core::{
    init_match, step, ActionState, Ball, Config, ConfigError, Events, Paddle, Score, Side, Time,
};
use hecs::World;

/// Read-only copy of what the presentation layer needs for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameView {
    pub paddles: Vec<Paddle>,
    pub ball: Option<Ball>,
    pub score: Score,
}

/// A running match, owned by the frame driver
pub struct LocalGame {
    world: World,
    time: Time,
    config: Config,
    events: Events,
}

impl LocalGame {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let mut world = World::new();
        init_match(&mut world, &config)?;

        Ok(Self {
            world,
            time: Time::new(0.0, 0.0),
            config,
            events: Events::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn elapsed(&self) -> f32 {
        self.time.now
    }

    /// Advance the match by a measured frame delta
    pub fn step(&mut self, dt: f32, actions: &ActionState) -> &Events {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            actions,
            &mut self.events,
        );

        if self.events.left_scored || self.events.right_scored {
            let score = Score::from_world(&self.world);
            tracing::info!(left = score.left, right = score.right, "score");
        }

        &self.events
    }

    pub fn view(&self) -> FrameView {
        let mut paddles: Vec<Paddle> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .collect();
        paddles.sort_by_key(|p| p.side != Side::Left);

        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball);

        FrameView {
            paddles,
            ball,
            score: Score::from_world(&self.world),
        }
    }
}
