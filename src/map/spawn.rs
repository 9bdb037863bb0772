//! Spawn planning: randomized, non-overlapping placement of the player,
//! treasures, and goblins on the maze's free cells.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::constants::{
    GOBLIN_POOL_DIVISOR, MAX_GOBLINS, MAX_TREASURES, PLAYER_START_CANDIDATES, TREASURE_POOL_DIVISOR,
};
use crate::error::MazeError;

/// The planned spawn sites for one session. All positions are distinct cell
/// centers drawn from the maze's free-cell pool.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnPlan {
    pub player: Vec2,
    pub treasures: Vec<Vec2>,
    pub goblins: Vec<Vec2>,
}

/// Plans spawn sites by drawing from `spawn_points` without replacement.
///
/// The pool is shuffled once, then consumed in three steps: the player takes
/// the first available preferred start (or the pool's first element), the
/// treasures take the pool's tail, and the goblins take its head. Target
/// counts scale with the pool size and clamp naturally on small boards, so
/// the only failure mode is an empty pool.
///
/// # Errors
///
/// Returns [`MazeError::NoSpawnPositions`] when `spawn_points` is empty.
pub fn plan_spawns(spawn_points: &[Vec2], rng: &mut impl Rng) -> Result<SpawnPlan, MazeError> {
    let mut pool: Vec<Vec2> = spawn_points.to_vec();
    if pool.is_empty() {
        return Err(MazeError::NoSpawnPositions);
    }
    pool.shuffle(rng);

    let player = PLAYER_START_CANDIDATES
        .iter()
        .copied()
        .find(|candidate| pool.contains(candidate))
        .unwrap_or(pool[0]);
    // Remove the start in place so the later head/tail draws cannot reuse it.
    if let Some(index) = pool.iter().position(|point| *point == player) {
        pool.remove(index);
    }

    let treasure_count = MAX_TREASURES.min(pool.len() / TREASURE_POOL_DIVISOR);
    let treasures = pool.split_off(pool.len() - treasure_count);

    let goblin_count = MAX_GOBLINS.min(pool.len() / GOBLIN_POOL_DIVISOR);
    let goblins = pool[..goblin_count].to_vec();

    debug!(
        player = ?player,
        treasures = treasures.len(),
        goblins = goblins.len(),
        free_cells = spawn_points.len(),
        "Planned spawn sites"
    );

    Ok(SpawnPlan {
        player,
        treasures,
        goblins,
    })
}
