use glam::Vec2;
use strum_macros::AsRefStr;

/// The four cardinal directions.
///
/// There is no "idle" variant; entities that can stand still carry an
/// `Option<Direction>` instead (see [`crate::systems::Animated`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the unit displacement vector for this direction.
    /// Screen coordinates: positive y points down.
    pub const fn as_vec2(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}
