//! Maze layout: board parsing, world-space geometry, and spawn planning.

pub mod builder;
pub mod direction;
pub mod parser;
pub mod spawn;
