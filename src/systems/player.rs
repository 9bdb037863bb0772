use std::f32::consts::FRAC_1_SQRT_2;

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res};
use glam::Vec2;

use crate::constants::PLAYER_SPEED;
use crate::error::GameError;
use crate::map::builder::Maze;
use crate::map::direction::Direction;
use crate::systems::components::{Animated, Collider, DeltaTime, InputState, PlayerControlled, Position};
use crate::systems::movement::resolve_move;

/// Executes frame-by-frame movement for the player.
///
/// Builds a displacement from the held directional intents: the vertical axis
/// is read first (Up wins over Down), then the horizontal axis (Left before
/// Right), and the horizontal direction takes over the facing when both axes
/// are active. Simultaneous diagonal input is scaled by `1/sqrt(2)` so the
/// resultant speed matches axis-aligned movement. The move then resolves
/// against the maze with all-or-nothing rollback, and the walk cycle advances
/// whenever there was movement intent.
pub fn player_movement_system(
    maze: Res<Maze>,
    delta_time: Res<DeltaTime>,
    input: Res<InputState>,
    mut players: Query<(&mut Position, &Collider, &mut Animated), With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    let (mut position, collider, mut animated) = match players.single_mut() {
        Ok(tuple) => tuple,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for player system: {e}"
            )));
            return;
        }
    };

    let step = PLAYER_SPEED * delta_time.0;
    let mut displacement = Vec2::ZERO;
    let mut facing = None;

    if input.up {
        displacement.y = -step;
        facing = Some(Direction::Up);
    } else if input.down {
        displacement.y = step;
        facing = Some(Direction::Down);
    }

    if input.left {
        displacement.x = -step;
        facing = Some(Direction::Left);
    } else if input.right {
        displacement.x = step;
        facing = Some(Direction::Right);
    }

    // Normalize diagonal movement to the same magnitude as a single axis.
    if displacement.x != 0.0 && displacement.y != 0.0 {
        displacement *= FRAC_1_SQRT_2;
    }

    let (resolved, _blocked) = resolve_move(position.0, displacement, collider.radius, &maze.obstacles);
    position.0 = resolved;

    if let Some(direction) = facing {
        animated.facing = Some(direction);
        animated.advance();
    } else {
        animated.rest();
    }
}
