//! Simulation/render loop body
//!
//! One `frame` call is one displayed frame: advance the ball, then record the
//! draw commands in their fixed order. The platform layer decides when frames
//! happen and presents the recorded list.

use crate::config::AppConfig;
use crate::consts::*;
use crate::renderer::{DrawList, palette};
use crate::sim::{SimState, WallContact, tick};

pub struct App {
    config: AppConfig,
    sim: SimState,
    draw_list: DrawList,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let sim = SimState::new(&config);
        Self {
            config,
            sim,
            draw_list: DrawList::new(),
        }
    }

    /// Advance one frame and return what to draw
    pub fn frame(&mut self, fps: u32) -> &DrawList {
        self.update();
        self.draw(fps);
        &self.draw_list
    }

    pub fn update(&mut self) -> WallContact {
        tick(&mut self.sim)
    }

    /// Record this frame's draw commands; later draws cover earlier ones
    pub fn draw(&mut self, fps: u32) {
        let list = &mut self.draw_list;
        list.begin();

        list.clear_background(palette::RAYWHITE);

        list.draw_text(TITLE_TEXT, 10.0, 10.0, 30.0, palette::DARKGRAY);
        list.draw_text(SUBTITLE_TEXT, 10.0, 50.0, 20.0, palette::GRAY);

        let ball = &self.sim.ball;
        list.draw_circle(ball.pos, ball.radius, palette::MAROON);

        if self.config.show_fps {
            list.draw_fps(self.config.width as f32 - FPS_RIGHT_MARGIN, 10.0, fps);
        }
    }

    pub fn sim(&self) -> &SimState {
        &self.sim
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;
    use glam::Vec2;

    #[test]
    fn test_frame_draw_order() {
        let mut app = App::new(AppConfig::default());
        let list = app.frame(60);
        let commands = list.commands();
        assert_eq!(commands.len(), 5);

        assert_eq!(commands[0], DrawCommand::Clear(palette::RAYWHITE));
        assert_eq!(
            commands[1],
            DrawCommand::Text {
                text: "Raylib Game Template".into(),
                pos: Vec2::new(10.0, 10.0),
                size: 30.0,
                color: palette::DARKGRAY,
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Text {
                text: "Edit main.c to create your game!".into(),
                pos: Vec2::new(10.0, 50.0),
                size: 20.0,
                color: palette::GRAY,
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::Circle {
                center: Vec2::new(405.0, 304.0),
                radius: 20.0,
                color: palette::MAROON,
            }
        );
        match &commands[4] {
            DrawCommand::Text { text, pos, .. } => {
                assert_eq!(text, "60 FPS");
                assert_eq!(*pos, Vec2::new(700.0, 10.0));
            }
            other => panic!("expected FPS text, got {other:?}"),
        }
    }

    #[test]
    fn test_ball_is_drawn_after_update() {
        let mut app = App::new(AppConfig::default());
        for _ in 0..3 {
            app.frame(60);
        }
        let drawn = app
            .draw_list()
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .unwrap();
        assert_eq!(drawn, app.sim().ball.pos);
        assert_eq!(drawn, Vec2::new(415.0, 312.0));
    }

    #[test]
    fn test_list_does_not_grow_across_frames() {
        let mut app = App::new(AppConfig::default());
        for _ in 0..100 {
            app.frame(60);
        }
        assert_eq!(app.draw_list().len(), 5);
        assert_eq!(app.sim().frames, 100);
    }

    #[test]
    fn test_fps_hidden_when_disabled() {
        let config = AppConfig {
            show_fps: false,
            ..Default::default()
        };
        let mut app = App::new(config);
        assert_eq!(app.frame(60).len(), 4);
    }

    #[test]
    fn test_fps_text_fits_on_screen() {
        let x = AppConfig::default().width as f32 - FPS_RIGHT_MARGIN;
        let width = crate::renderer::font::measure_text("999 FPS", 20.0);
        assert!(x + width <= 800.0);
    }
}
