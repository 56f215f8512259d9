//! Turns a frame's game state into GPU instances.

use crate::hud::number_rects;
use crate::renderer::resources::InstanceData;
use crate::simulation::FrameView;
use game_core::{Color, Config, Rect, Side};
use glam::Vec2;

pub const SCORE_HEIGHT: f32 = 40.0;
pub const SCORE_TOP: f32 = 20.0;
pub const CENTER_LINE_WIDTH: f32 = 1.0;

/// Everything drawn in one frame, split by mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Color,
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

/// Top-left corner of a side's score text
pub fn score_origin(config: &Config, side: Side) -> Vec2 {
    let x = match side {
        Side::Left => config.arena_width / 4.0,
        Side::Right => 3.0 * config.arena_width / 4.0,
    };
    Vec2::new(x, SCORE_TOP)
}

impl Scene {
    pub fn build(view: &FrameView, config: &Config) -> Self {
        let mut scene = Scene {
            background: Color::BLACK,
            rects: Vec::new(),
            circles: Vec::new(),
        };

        for paddle in &view.paddles {
            scene.rects.push(InstanceData::rect(&paddle.rect, paddle.color));
        }

        let center_line = Rect::new(
            config.arena_width / 2.0 - CENTER_LINE_WIDTH / 2.0,
            0.0,
            CENTER_LINE_WIDTH,
            config.arena_height,
        );
        scene.rects.push(InstanceData::rect(&center_line, Color::WHITE));

        for side in Side::ALL {
            let digits = number_rects(
                view.score.get(side),
                score_origin(config, side),
                SCORE_HEIGHT,
            );
            scene
                .rects
                .extend(digits.iter().map(|rect| InstanceData::rect(rect, Color::WHITE)));
        }

        if let Some(ball) = &view.ball {
            scene
                .circles
                .push(InstanceData::circle(ball.pos, ball.radius, ball.color));
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::LocalGame;

    #[test]
    fn test_initial_scene_contents() {
        let game = LocalGame::new(Config::new()).unwrap();
        let scene = Scene::build(&game.view(), game.config());

        // 2 paddles + center line + two zeros of 6 segments each
        assert_eq!(scene.rects.len(), 2 + 1 + 6 + 6);
        assert_eq!(scene.circles.len(), 1);
        assert_eq!(scene.circles[0].transform, [400.0, 300.0, 20.0, 20.0]);
        assert_eq!(scene.background, Color::BLACK);
    }

    #[test]
    fn test_center_line_spans_screen() {
        let game = LocalGame::new(Config::new()).unwrap();
        let scene = Scene::build(&game.view(), game.config());

        let line = scene
            .rects
            .iter()
            .find(|r| r.transform[3] == 600.0)
            .expect("center line");
        assert_eq!(line.transform, [400.0, 300.0, 1.0, 600.0]);
    }

    #[test]
    fn test_score_origins() {
        let config = Config::new();
        assert_eq!(score_origin(&config, Side::Left), Vec2::new(200.0, 20.0));
        assert_eq!(score_origin(&config, Side::Right), Vec2::new(600.0, 20.0));
    }

    #[test]
    fn test_empty_view_draws_only_field() {
        let scene = Scene::build(&FrameView::default(), &Config::new());
        assert_eq!(scene.rects.len(), 1 + 6 + 6);
        assert!(scene.circles.is_empty());
    }
}
