use bevy_ecs::prelude::*;

/// Discrete one-shot commands produced by the input layer and handled by the
/// frame orchestrator before the simulation systems run.
///
/// Held movement keys are not commands; they are snapshotted into
/// [`crate::systems::InputState`] once per frame instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    TogglePause,
}

/// Events exchanged between simulation systems within a single tick.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The player overlapped another entity this frame. The first entity is
    /// always the player.
    Collision(Entity, Entity),
}
