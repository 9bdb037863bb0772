use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::Query;
use glam::Vec2;

use crate::events::GameEvent;
use crate::systems::components::{Collider, PlayerControlled, Position};

/// Tests two circles for overlap. Touching circles do not overlap.
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance_squared(b) < (a_radius + b_radius) * (a_radius + b_radius)
}

/// Detects overlapping entities and emits collision events for the gameplay
/// systems.
///
/// Only player-versus-other pairs matter to gameplay: treasures react by
/// being collected, goblins by draining health. Goblin-goblin and
/// goblin-treasure contacts carry no rules, so they are never reported.
/// Obstacles are not entities; movement resolves against them directly.
pub fn collision_system(
    players: Query<(Entity, &Position, &Collider), With<PlayerControlled>>,
    others: Query<(Entity, &Position, &Collider), Without<PlayerControlled>>,
    mut events: EventWriter<GameEvent>,
) {
    for (player_entity, player_position, player_collider) in players.iter() {
        for (other_entity, other_position, other_collider) in others.iter() {
            if circles_overlap(
                player_position.0,
                player_collider.radius,
                other_position.0,
                other_collider.radius,
            ) {
                events.write(GameEvent::Collision(player_entity, other_entity));
            }
        }
    }
}
