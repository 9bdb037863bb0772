//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components,
//! systems, and resources.

pub mod collision;
pub mod components;
pub mod damage;
pub mod goblin;
pub mod item;
pub mod movement;
pub mod player;

pub use collision::{circles_overlap, collision_system};
pub use components::{
    Animated, Collider, DeltaTime, EntityKind, GameRng, Goblin, GoblinBundle, Health, InputState, PlayerBundle,
    PlayerControlled, Position, Score, SessionState, Treasure, TreasureBundle,
};
pub use damage::damage_system;
pub use goblin::{goblin_ai_system, pursuit_heading, random_heading};
pub use item::pickup_system;
pub use movement::{clamp_to_screen, resolve_move};
pub use player::player_movement_system;
