//! Maze construction: tiles plus the derived world-space geometry.

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::constants::{MazeTile, CELL_SIZE, RAW_BOARD, WALL_RADIUS};
use crate::error::GameResult;
use crate::map::parser::BoardParser;

/// A circular obstacle in world space. One is created per wall cell at
/// session start; obstacles are never destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec2,
    pub radius: f32,
}

/// The fully constructed maze.
///
/// Holds the immutable tile grid together with everything derived from it:
/// world-space obstacles (one per wall cell, row-major) and legal spawn
/// points (one per floor cell, row-major). Inserted into the ECS world as a
/// resource at session start and never mutated afterwards.
#[derive(Resource, Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<MazeTile>,
    pub obstacles: Vec<Obstacle>,
    pub spawn_points: Vec<Vec2>,
}

impl Maze {
    /// Builds a maze from an ASCII board layout.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::ParseError`] for malformed layouts.
    pub fn new(raw_board: &[&str]) -> GameResult<Maze> {
        let parsed = BoardParser::parse_board(raw_board)?;

        let mut obstacles = Vec::new();
        let mut spawn_points = Vec::new();
        for row in 0..parsed.height {
            for col in 0..parsed.width {
                let center = Maze::cell_center(col, row);
                match parsed.tiles[row * parsed.width + col] {
                    MazeTile::Wall => obstacles.push(Obstacle {
                        position: center,
                        radius: WALL_RADIUS,
                    }),
                    MazeTile::Floor => spawn_points.push(center),
                }
            }
        }

        Ok(Maze {
            width: parsed.width,
            height: parsed.height,
            tiles: parsed.tiles,
            obstacles,
            spawn_points,
        })
    }

    /// Builds the standard game board from [`RAW_BOARD`].
    pub fn standard() -> GameResult<Maze> {
        Maze::new(&RAW_BOARD)
    }

    /// The world-space center of the cell at `(col, row)`.
    pub fn cell_center(col: usize, row: usize) -> Vec2 {
        Vec2::new(
            col as f32 * CELL_SIZE + CELL_SIZE / 2.0,
            row as f32 * CELL_SIZE + CELL_SIZE / 2.0,
        )
    }

    /// The tile at `(col, row)`, or `None` when out of bounds.
    pub fn tile_at(&self, col: usize, row: usize) -> Option<MazeTile> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}
