//! Mazebound game library crate.

pub mod app;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod map;
pub mod renderer;
pub mod systems;
