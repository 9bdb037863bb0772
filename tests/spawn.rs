use glam::Vec2;
use mazebound::constants::{MAX_GOBLINS, MAX_TREASURES, PLAYER_START_CANDIDATES};
use mazebound::error::MazeError;
use mazebound::map::builder::Maze;
use mazebound::map::spawn::plan_spawns;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use speculoos::prelude::*;

mod common;

fn standard_spawn_points() -> Vec<Vec2> {
    common::create_test_maze().spawn_points
}

#[test]
fn test_empty_pool_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let result = plan_spawns(&[], &mut rng);

    assert_that(&result.unwrap_err()).is_equal_to(MazeError::NoSpawnPositions);
}

#[test]
fn test_standard_board_counts() {
    let spawn_points = standard_spawn_points();
    let mut rng = SmallRng::seed_from_u64(1);
    let plan = plan_spawns(&spawn_points, &mut rng).unwrap();

    // The standard board has far more free cells than the caps need.
    assert_that(&plan.treasures).has_length(MAX_TREASURES);
    assert_that(&plan.goblins).has_length(MAX_GOBLINS);
}

#[test]
fn test_standard_board_player_starts_top_left() {
    let spawn_points = standard_spawn_points();

    // The preferred corner cell is free on the standard board, so the player
    // lands there regardless of the shuffle.
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let plan = plan_spawns(&spawn_points, &mut rng).unwrap();
        assert_that(&plan.player).is_equal_to(PLAYER_START_CANDIDATES[0]);
    }
}

#[test]
fn test_all_sites_are_distinct() {
    let spawn_points = standard_spawn_points();

    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let plan = plan_spawns(&spawn_points, &mut rng).unwrap();

        let mut sites = vec![plan.player];
        sites.extend(&plan.treasures);
        sites.extend(&plan.goblins);

        let mut keys: Vec<(i64, i64)> = sites.iter().map(|p| (p.x as i64, p.y as i64)).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_that(&keys).has_length(sites.len());
    }
}

#[test]
fn test_all_sites_lie_on_free_cells() {
    let spawn_points = standard_spawn_points();
    let mut rng = SmallRng::seed_from_u64(42);
    let plan = plan_spawns(&spawn_points, &mut rng).unwrap();

    assert_that(&spawn_points.contains(&plan.player)).is_true();
    for site in plan.treasures.iter().chain(plan.goblins.iter()) {
        assert_that(&spawn_points.contains(site)).is_true();
    }
}

#[test]
fn test_tiny_board_clamps_counts_to_zero() {
    // One free cell: the player takes it and nothing else spawns.
    let maze = Maze::new(&common::SINGLE_ROOM).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    let plan = plan_spawns(&maze.spawn_points, &mut rng).unwrap();

    assert_that(&plan.player).is_equal_to(Vec2::new(60.0, 60.0));
    assert_that(&plan.treasures).is_empty();
    assert_that(&plan.goblins).is_empty();
}

#[test]
fn test_same_seed_same_plan() {
    let spawn_points = standard_spawn_points();
    let plan_a = plan_spawns(&spawn_points, &mut SmallRng::seed_from_u64(9)).unwrap();
    let plan_b = plan_spawns(&spawn_points, &mut SmallRng::seed_from_u64(9)).unwrap();

    assert_that(&plan_a).is_equal_to(plan_b);
}
