use bevy_ecs::event::EventReader;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res};
use tracing::debug;

use crate::constants::CONTACT_DAMAGE_PER_SECOND;
use crate::events::GameEvent;
use crate::systems::components::{DeltaTime, Goblin, Health, PlayerControlled};

/// Drains player health for every goblin in contact this frame.
///
/// Damage is continuous, `CONTACT_DAMAGE_PER_SECOND * dt` per overlapping
/// goblin, so several goblins stack additively within one frame. Health is
/// floored at zero; a defeated player takes no further (visible) damage and
/// never heals.
pub fn damage_system(
    delta_time: Res<DeltaTime>,
    mut collisions: EventReader<GameEvent>,
    goblins: Query<(), With<Goblin>>,
    mut players: Query<&mut Health, With<PlayerControlled>>,
) {
    let Ok(mut health) = players.single_mut() else {
        return;
    };

    for event in collisions.read() {
        let GameEvent::Collision(_, other) = event;
        if goblins.get(*other).is_err() {
            continue;
        }

        let drained = (health.0 - CONTACT_DAMAGE_PER_SECOND * delta_time.0).max(0.0);
        if drained == 0.0 && health.0 > 0.0 {
            debug!("Player defeated");
        }
        health.0 = drained;
    }
}
