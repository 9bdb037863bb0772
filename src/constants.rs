//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each maze cell, in world units.
pub const CELL_SIZE: f32 = 40.0;
/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(25, 17);
/// The size of the screen, in world units. Entities are clamped to this area.
pub const SCREEN_SIZE: Vec2 = Vec2::new(1000.0, 700.0);

/// Player movement speed, in world units per second.
pub const PLAYER_SPEED: f32 = 180.0;
/// Goblin movement speed, in world units per second.
pub const GOBLIN_SPEED: f32 = 60.0;

/// Collision radii, in world units.
pub const PLAYER_RADIUS: f32 = 16.0;
pub const GOBLIN_RADIUS: f32 = 12.0;
pub const TREASURE_RADIUS: f32 = 12.0;
pub const WALL_RADIUS: f32 = 20.0;

/// The player starts with this much health; contact damage drains it at
/// [`CONTACT_DAMAGE_PER_SECOND`] per overlapping goblin, floored at zero.
pub const MAX_HEALTH: f32 = 100.0;
pub const CONTACT_DAMAGE_PER_SECOND: f32 = 50.0;
/// Score awarded per collected treasure.
pub const TREASURE_SCORE: u32 = 100;

/// Seconds between goblin heading reselections.
pub const REDIRECT_INTERVAL: f32 = 3.0;
/// Chance that a goblin chases the player (instead of wandering) on redirect.
pub const PURSUIT_CHANCE: f32 = 0.7;

/// Walk cycles are two frames, advanced every [`ANIMATION_INTERVAL`] update ticks.
pub const WALK_FRAMES: usize = 2;
pub const ANIMATION_INTERVAL: u32 = 15;

/// At most this many treasures are placed, and at most one per 4 free cells.
pub const MAX_TREASURES: usize = 8;
pub const TREASURE_POOL_DIVISOR: usize = 4;
/// At most this many goblins are placed, and at most one per 5 free cells.
pub const MAX_GOBLINS: usize = 6;
pub const GOBLIN_POOL_DIVISOR: usize = 5;

/// Preferred player starting positions near the top-left corner, in priority
/// order. The planner falls back to an arbitrary free cell if the board has
/// none of these.
pub const PLAYER_START_CANDIDATES: [Vec2; 4] = [
    Vec2::new(60.0, 60.0),
    Vec2::new(60.0, 100.0),
    Vec2::new(100.0, 60.0),
    Vec2::new(140.0, 60.0),
];

/// An enum representing the different types of tiles on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeTile {
    /// A traversable floor tile, eligible for entity placement.
    Floor,
    /// A wall tile. Becomes a circular obstacle in world space.
    Wall,
}

/// The raw layout of the game board, as a 2D array of characters.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "#########################",
    "#...#.....#.....#.......#",
    "#.#.#.###.#.###.#.#####.#",
    "#.#.....#...#.....#.....#",
    "#.#####.#####.#####.###.#",
    "#.............#.....#...#",
    "###.#####.#.###.#.###.###",
    "#...#.....#...#.#.....#.#",
    "#.###.#######.#.#####.#.#",
    "#.....#.......#.....#...#",
    "#####.#.###########.#####",
    "#.....#...........#.....#",
    "#.#######.#######.#####.#",
    "#.........#.....#.......#",
    "#.#.#######.###.#######.#",
    "#.......................#",
    "#########################",
];
