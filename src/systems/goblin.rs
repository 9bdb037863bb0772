use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use rand::Rng;
use tracing::trace;

use crate::constants::{GOBLIN_SPEED, PURSUIT_CHANCE, REDIRECT_INTERVAL};
use crate::map::builder::Maze;
use crate::map::direction::Direction;
use crate::systems::components::{Animated, Collider, DeltaTime, GameRng, Goblin, PlayerControlled, Position};
use crate::systems::movement::resolve_move;

/// Picks one of the four cardinal directions uniformly at random.
pub fn random_heading(rng: &mut impl Rng) -> Direction {
    Direction::DIRECTIONS[rng.random_range(0..Direction::DIRECTIONS.len())]
}

/// The chase heading from `from` toward `target`: the axis with the greater
/// absolute delta, signed toward the target. Ties go to the horizontal axis.
pub fn pursuit_heading(from: Vec2, target: Vec2) -> Direction {
    let delta = target - from;
    if delta.x.abs() >= delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Autonomous goblin AI: timed redirects biased toward pursuit, constant
/// motion, and forced redirection on wall contact.
///
/// Runs after the player system, so a goblin reacts to the player's position
/// from this frame, not the last one. Every `REDIRECT_INTERVAL` seconds a
/// goblin reselects its heading: with `PURSUIT_CHANCE` it chases the player
/// along the dominant axis, otherwise it wanders in a uniformly random
/// direction. Walking into a wall rolls the move back and immediately picks a
/// fresh random heading without touching the redirect timer.
pub fn goblin_ai_system(
    maze: Res<Maze>,
    delta_time: Res<DeltaTime>,
    mut rng: ResMut<GameRng>,
    players: Query<&Position, With<PlayerControlled>>,
    mut goblins: Query<(&mut Goblin, &mut Position, &Collider, &mut Animated), Without<PlayerControlled>>,
) {
    let Ok(player_position) = players.single() else {
        return;
    };
    let player_position = player_position.0;

    for (mut goblin, mut position, collider, mut animated) in goblins.iter_mut() {
        goblin.redirect_timer += delta_time.0;
        if goblin.redirect_timer >= REDIRECT_INTERVAL {
            goblin.redirect_timer = 0.0;
            goblin.heading = if rng.0.random::<f32>() < PURSUIT_CHANCE {
                pursuit_heading(position.0, player_position)
            } else {
                random_heading(&mut rng.0)
            };
            trace!(heading = goblin.heading.as_ref(), "Goblin redirect");
        }

        let displacement = goblin.heading.as_vec2() * GOBLIN_SPEED * delta_time.0;
        let (resolved, blocked) = resolve_move(position.0, displacement, collider.radius, &maze.obstacles);
        position.0 = resolved;

        if blocked {
            // Walked into a wall; reselect immediately, the timer keeps running.
            goblin.heading = random_heading(&mut rng.0);
            trace!(heading = goblin.heading.as_ref(), "Goblin bounced off a wall");
        }

        animated.facing = Some(goblin.heading);
        animated.advance();
    }
}
