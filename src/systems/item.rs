use bevy_ecs::event::EventReader;
use bevy_ecs::query::With;
use bevy_ecs::system::{Commands, Query};
use tracing::debug;

use crate::constants::TREASURE_SCORE;
use crate::events::GameEvent;
use crate::systems::components::{PlayerControlled, Position, Score, Treasure};

/// Awards score for collected treasure and removes it from the world.
///
/// Consumes this frame's collision events; any event whose second entity is
/// a treasure means the player reached it. Each treasure despawns on its
/// first pickup event, so a treasure can never be scored twice.
pub fn pickup_system(
    mut commands: Commands,
    mut collisions: EventReader<GameEvent>,
    treasures: Query<&Position, With<Treasure>>,
    mut players: Query<&mut Score, With<PlayerControlled>>,
) {
    for event in collisions.read() {
        let GameEvent::Collision(_, other) = event;
        let Ok(position) = treasures.get(*other) else {
            continue;
        };

        if let Ok(mut score) = players.single_mut() {
            score.0 += TREASURE_SCORE;
            debug!(position = ?position.0, score = score.0, "Treasure collected");
        }
        commands.entity(*other).despawn();
    }
}
