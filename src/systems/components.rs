use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;

use crate::constants::{ANIMATION_INTERVAL, WALK_FRAMES};
use crate::map::direction::Direction;

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// A tag component denoting the kind of entity, for dispatch in event
/// consumers.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Goblin,
    Treasure,
}

/// World-space center position of an entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Circular collision boundary.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub radius: f32,
}

/// Player health in `[0, MAX_HEALTH]`. Only ever decreases.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health(pub f32);

/// Player score. Unbounded; 100 per treasure.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score(pub u32);

/// Shared walk-cycle state for player and goblins.
///
/// `facing` is cosmetic only and does not drive physics; `None` means the
/// entity is standing still. The two-frame walk cycle toggles every
/// [`ANIMATION_INTERVAL`] update ticks.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Animated {
    pub facing: Option<Direction>,
    pub frame: usize,
    pub counter: u32,
}

impl Animated {
    /// Ticks the walk cycle by one frame of movement.
    pub fn advance(&mut self) {
        self.counter += 1;
        if self.counter >= ANIMATION_INTERVAL {
            self.counter = 0;
            self.frame = (self.frame + 1) % WALK_FRAMES;
        }
    }

    /// Returns to the standing pose. The tick counter is left alone, matching
    /// the walk-cycle cadence of a briefly interrupted stride.
    pub fn rest(&mut self) {
        self.facing = None;
        self.frame = 0;
    }
}

/// Wandering-enemy AI state.
///
/// The heading is always one of the four cardinal directions; goblins never
/// stand still. The timer accumulates toward the 3-second redirect.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Goblin {
    pub heading: Direction,
    pub redirect_timer: f32,
}

/// A tag component for collectible treasure. Despawned on pickup.
#[derive(Component, Default)]
pub struct Treasure;

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub kind: EntityKind,
    pub position: Position,
    pub collider: Collider,
    pub health: Health,
    pub score: Score,
    pub animated: Animated,
}

#[derive(Bundle)]
pub struct GoblinBundle {
    pub kind: EntityKind,
    pub position: Position,
    pub collider: Collider,
    pub goblin: Goblin,
    pub animated: Animated,
}

#[derive(Bundle)]
pub struct TreasureBundle {
    pub kind: EntityKind,
    pub position: Position,
    pub collider: Collider,
    pub treasure: Treasure,
}

/// Seconds elapsed since the previous tick. Measured, not assumed; there is
/// deliberately no upper clamp.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DeltaTime(pub f32);

/// Snapshot of the held directional intents, rebuilt by the frontend once
/// per frame and handed to [`crate::game::Game::tick`].
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The session's random source. Seedable for deterministic tests.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

/// Session-level flags owned by the frame orchestrator.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SessionState {
    pub paused: bool,
    pub exit: bool,
}
