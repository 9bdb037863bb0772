//! Flat-color renderer for the maze session.
//!
//! Draws straight from a [`FrameSnapshot`], so it never holds a reference
//! into the simulation. Sprites are solid rectangles with a small accent
//! block on the facing edge; walking is conveyed by a two-frame bob.

use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::constants::{CELL_SIZE, MAX_HEALTH, SCREEN_SIZE, TREASURE_SCORE};
use crate::error::{GameError, GameResult};
use crate::game::{FrameSnapshot, SpriteView};
use crate::map::direction::Direction;

const BACKGROUND: Color = Color::RGB(24, 24, 28);
const WALL: Color = Color::RGB(70, 74, 90);
const PLAYER_BODY: Color = Color::RGB(64, 160, 255);
const GOBLIN_BODY: Color = Color::RGB(96, 180, 72);
const TREASURE_GOLD: Color = Color::RGB(235, 190, 50);
const ACCENT: Color = Color::RGB(240, 240, 240);
const HEALTH_RED: Color = Color::RGB(200, 40, 40);
const HEALTH_BACK: Color = Color::RGB(255, 255, 255);
const OVERLAY: Color = Color::RGBA(0, 0, 0, 160);

pub struct Renderer;

impl Renderer {
    /// Draws one frame and presents it.
    pub fn draw(canvas: &mut Canvas<Window>, snapshot: &FrameSnapshot) -> GameResult<()> {
        canvas.set_draw_color(BACKGROUND);
        canvas.clear();

        Self::draw_walls(canvas, snapshot)?;
        Self::draw_treasures(canvas, snapshot)?;
        for goblin in &snapshot.goblins {
            Self::draw_goblin(canvas, goblin)?;
        }
        Self::draw_player(canvas, snapshot)?;
        Self::draw_hud(canvas, snapshot)?;

        if snapshot.paused {
            Self::draw_banner(canvas, ACCENT)?;
        } else if snapshot.defeated {
            Self::draw_banner(canvas, HEALTH_RED)?;
        } else if snapshot.victorious {
            Self::draw_banner(canvas, TREASURE_GOLD)?;
        }

        canvas.present();
        Ok(())
    }

    fn draw_walls(canvas: &mut Canvas<Window>, snapshot: &FrameSnapshot) -> GameResult<()> {
        canvas.set_draw_color(WALL);
        let side = CELL_SIZE as u32;
        for obstacle in &snapshot.obstacles {
            let rect = Rect::from_center(point(obstacle.position), side, side);
            canvas.fill_rect(rect).map_err(GameError::Sdl)?;
        }
        Ok(())
    }

    fn draw_treasures(canvas: &mut Canvas<Window>, snapshot: &FrameSnapshot) -> GameResult<()> {
        canvas.set_draw_color(TREASURE_GOLD);
        for site in &snapshot.treasures {
            let rect = Rect::from_center(point(*site), 24, 20);
            canvas.fill_rect(rect).map_err(GameError::Sdl)?;
        }
        Ok(())
    }

    fn draw_goblin(canvas: &mut Canvas<Window>, goblin: &SpriteView) -> GameResult<()> {
        // The walk cycle bobs the body up a couple of pixels on the odd frame.
        let bob = if goblin.frame % 2 == 1 { 2.0 } else { 0.0 };
        let center = goblin.position - Vec2::new(0.0, bob);

        canvas.set_draw_color(GOBLIN_BODY);
        canvas
            .fill_rect(Rect::from_center(point(center), 24, 24))
            .map_err(GameError::Sdl)?;
        Self::draw_accent(canvas, center, goblin.facing)
    }

    fn draw_player(canvas: &mut Canvas<Window>, snapshot: &FrameSnapshot) -> GameResult<()> {
        let player = &snapshot.player;
        let bob = if player.facing.is_some() && player.frame % 2 == 1 {
            2.0
        } else {
            0.0
        };
        let center = player.position - Vec2::new(0.0, bob);

        canvas.set_draw_color(PLAYER_BODY);
        canvas
            .fill_rect(Rect::from_center(point(center), 32, 32))
            .map_err(GameError::Sdl)?;
        if let Some(facing) = player.facing {
            Self::draw_accent(canvas, center, facing)?;
        }
        Ok(())
    }

    /// Small block offset toward the facing edge, standing in for the eyes.
    fn draw_accent(canvas: &mut Canvas<Window>, center: Vec2, facing: Direction) -> GameResult<()> {
        let offset = facing.as_vec2() * 6.0;
        canvas.set_draw_color(ACCENT);
        canvas
            .fill_rect(Rect::from_center(point(center + offset), 8, 8))
            .map_err(GameError::Sdl)
    }

    fn draw_hud(canvas: &mut Canvas<Window>, snapshot: &FrameSnapshot) -> GameResult<()> {
        // Health bar: white backing, red fill proportional to remaining health.
        let backing = Rect::new(20, 20, 200, 20);
        canvas.set_draw_color(HEALTH_BACK);
        canvas.fill_rect(backing).map_err(GameError::Sdl)?;

        let fraction = (snapshot.player.health / MAX_HEALTH).clamp(0.0, 1.0);
        let fill = (200.0 * fraction).round() as u32;
        if fill > 0 {
            canvas.set_draw_color(HEALTH_RED);
            canvas.fill_rect(Rect::new(20, 20, fill, 20)).map_err(GameError::Sdl)?;
        }

        canvas.set_draw_color(BACKGROUND);
        canvas.draw_rect(backing).map_err(GameError::Sdl)?;

        // Score pips: one gold square per collected treasure.
        canvas.set_draw_color(TREASURE_GOLD);
        let collected = snapshot.player.score / TREASURE_SCORE;
        for index in 0..collected {
            let rect = Rect::new(230 + (index as i32) * 16, 24, 12, 12);
            canvas.fill_rect(rect).map_err(GameError::Sdl)?;
        }
        Ok(())
    }

    /// Translucent full-screen wash with a colored center strip. Pure-color
    /// signaling keeps the renderer free of any font dependency.
    fn draw_banner(canvas: &mut Canvas<Window>, color: Color) -> GameResult<()> {
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(OVERLAY);
        canvas
            .fill_rect(Rect::new(0, 0, SCREEN_SIZE.x as u32, SCREEN_SIZE.y as u32))
            .map_err(GameError::Sdl)?;

        canvas.set_draw_color(color);
        let strip = Rect::from_center(point(SCREEN_SIZE / 2.0), SCREEN_SIZE.x as u32, 60);
        canvas.fill_rect(strip).map_err(GameError::Sdl)?;
        canvas.set_blend_mode(BlendMode::None);
        Ok(())
    }
}

fn point(position: Vec2) -> (i32, i32) {
    (position.x.round() as i32, position.y.round() as i32)
}
