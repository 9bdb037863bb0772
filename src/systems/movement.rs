//! Per-frame displacement resolution against the maze's obstacles.

use glam::Vec2;

use crate::constants::SCREEN_SIZE;
use crate::map::builder::Obstacle;
use crate::systems::collision::circles_overlap;

/// Clamps a circle's center so the circle stays fully on screen.
pub fn clamp_to_screen(position: Vec2, radius: f32) -> Vec2 {
    position.clamp(Vec2::splat(radius), SCREEN_SIZE - radius)
}

/// Applies a displacement with all-or-nothing rollback.
///
/// The tentative position is the screen-clamped `position + displacement`.
/// If the moved circle would overlap any obstacle, the whole move is rejected
/// and the pre-frame position is returned with `true`; there is no sliding
/// along the unblocked axis. A zero displacement is a no-op.
pub fn resolve_move(position: Vec2, displacement: Vec2, radius: f32, obstacles: &[Obstacle]) -> (Vec2, bool) {
    if displacement == Vec2::ZERO {
        return (position, false);
    }

    let tentative = clamp_to_screen(position + displacement, radius);
    let blocked = obstacles
        .iter()
        .any(|obstacle| circles_overlap(tentative, radius, obstacle.position, obstacle.radius));

    if blocked {
        (position, true)
    } else {
        (tentative, false)
    }
}
