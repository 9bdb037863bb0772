#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, world::World};
use glam::Vec2;
use mazebound::{
    constants::{GOBLIN_RADIUS, MAX_HEALTH, PLAYER_RADIUS, TREASURE_RADIUS},
    error::GameError,
    events::GameEvent,
    map::{builder::Maze, direction::Direction},
    systems::{
        Animated, Collider, DeltaTime, EntityKind, GameRng, Goblin, Health, InputState, PlayerControlled, Position,
        Score, SessionState, Treasure,
    },
};
use rand::{rngs::SmallRng, SeedableRng};

pub const TICK: f32 = 1.0 / 60.0;

/// Creates a basic test world with required resources for ECS systems
pub fn create_test_world() -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(Events::<GameError>::default());
    world.insert_resource(DeltaTime(TICK));
    world.insert_resource(InputState::default());
    world.insert_resource(SessionState::default());
    world.insert_resource(GameRng(SmallRng::seed_from_u64(7)));
    world.insert_resource(create_test_maze());

    world
}

/// Creates a test maze using the standard board
pub fn create_test_maze() -> Maze {
    Maze::standard().expect("Failed to create test maze")
}

/// A 3x3 board with a single floor cell at its center
pub const SINGLE_ROOM: [&str; 3] = ["###", "#.#", "###"];

/// Spawns a controllable test player entity at the given position
pub fn spawn_test_player(world: &mut World, position: Vec2) -> Entity {
    world
        .spawn((
            PlayerControlled,
            EntityKind::Player,
            Position(position),
            Collider { radius: PLAYER_RADIUS },
            Health(MAX_HEALTH),
            Score(0),
            Animated::default(),
        ))
        .id()
}

/// Spawns a test goblin entity at the given position
pub fn spawn_test_goblin(world: &mut World, position: Vec2, heading: Direction) -> Entity {
    world
        .spawn((
            EntityKind::Goblin,
            Position(position),
            Collider { radius: GOBLIN_RADIUS },
            Goblin {
                heading,
                redirect_timer: 0.0,
            },
            Animated::default(),
        ))
        .id()
}

/// Spawns a test treasure entity at the given position
pub fn spawn_test_treasure(world: &mut World, position: Vec2) -> Entity {
    world
        .spawn((
            EntityKind::Treasure,
            Position(position),
            Collider {
                radius: TREASURE_RADIUS,
            },
            Treasure,
        ))
        .id()
}

/// Sends a collision event between two entities
pub fn send_collision_event(world: &mut World, entity1: Entity, entity2: Entity) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.send(GameEvent::Collision(entity1, entity2));
}

/// Sets the held movement keys for the next system run
pub fn set_input(world: &mut World, up: bool, down: bool, left: bool, right: bool) {
    world.insert_resource(InputState { up, down, left, right });
}
