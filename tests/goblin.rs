use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use mazebound::constants::{GOBLIN_SPEED, REDIRECT_INTERVAL};
use mazebound::map::direction::Direction;
use mazebound::systems::{goblin_ai_system, pursuit_heading, Animated, Goblin, Position};
use speculoos::prelude::*;

mod common;

use common::TICK;

#[test]
fn test_pursuit_heading_picks_dominant_axis() {
    let from = Vec2::new(100.0, 100.0);

    assert_that(&pursuit_heading(from, Vec2::new(200.0, 130.0))).is_equal_to(Direction::Right);
    assert_that(&pursuit_heading(from, Vec2::new(0.0, 130.0))).is_equal_to(Direction::Left);
    assert_that(&pursuit_heading(from, Vec2::new(130.0, 300.0))).is_equal_to(Direction::Down);
    assert_that(&pursuit_heading(from, Vec2::new(130.0, 0.0))).is_equal_to(Direction::Up);
}

#[test]
fn test_pursuit_heading_tie_goes_horizontal() {
    let from = Vec2::new(100.0, 100.0);

    assert_that(&pursuit_heading(from, Vec2::new(150.0, 150.0))).is_equal_to(Direction::Right);
    assert_that(&pursuit_heading(from, Vec2::new(50.0, 50.0))).is_equal_to(Direction::Left);
}

#[test]
fn test_goblin_advances_along_heading() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec2::new(60.0, 60.0));
    let goblin = common::spawn_test_goblin(&mut world, Vec2::new(220.0, 220.0), Direction::Right);

    world
        .run_system_once(goblin_ai_system)
        .expect("System should run successfully");

    let position = world.get::<Position>(goblin).unwrap();
    assert_that(&position.0).is_equal_to(Vec2::new(220.0 + GOBLIN_SPEED * TICK, 220.0));

    // No wall hit and the timer is fresh, so the heading is untouched.
    let state = world.get::<Goblin>(goblin).unwrap();
    assert_that(&state.heading).is_equal_to(Direction::Right);
    assert_that(&(state.redirect_timer - TICK).abs()).is_less_than(1e-6);

    let animated = world.get::<Animated>(goblin).unwrap();
    assert_that(&animated.facing).is_equal_to(Some(Direction::Right));
}

#[test]
fn test_goblin_redirects_when_timer_elapses() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec2::new(60.0, 60.0));
    let goblin = common::spawn_test_goblin(&mut world, Vec2::new(220.0, 220.0), Direction::Right);

    world.get_mut::<Goblin>(goblin).unwrap().redirect_timer = REDIRECT_INTERVAL;

    world
        .run_system_once(goblin_ai_system)
        .expect("System should run successfully");

    let state = world.get::<Goblin>(goblin).unwrap();
    assert_that(&state.redirect_timer).is_less_than(REDIRECT_INTERVAL);
}

#[test]
fn test_goblin_bounces_off_walls() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec2::new(60.0, 60.0));
    // Just below a wall cell, heading straight into it.
    let start = Vec2::new(100.0, 212.2);
    let goblin = common::spawn_test_goblin(&mut world, start, Direction::Up);

    world
        .run_system_once(goblin_ai_system)
        .expect("System should run successfully");

    let position = world.get::<Position>(goblin).unwrap();
    let state = world.get::<Goblin>(goblin).unwrap();

    // The move into the wall rolled back.
    assert_that(&position.0).is_equal_to(start);
    // The forced reselect does not consume the redirect timer.
    assert_that(&(state.redirect_timer - TICK).abs()).is_less_than(1e-6);
}

#[test]
fn test_goblin_walks_animation_every_tick() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world, Vec2::new(60.0, 60.0));
    let goblin = common::spawn_test_goblin(&mut world, Vec2::new(220.0, 220.0), Direction::Right);

    for _ in 0..16 {
        world
            .run_system_once(goblin_ai_system)
            .expect("System should run successfully");
    }

    // 16 ticks crosses one animation interval, flipping to the second frame.
    let animated = world.get::<Animated>(goblin).unwrap();
    assert_that(&animated.frame).is_equal_to(1);
}
