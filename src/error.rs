//! Centralized error types for the game.
//!
//! The simulation itself is total: movement, AI, and scoring cannot fail.
//! Errors exist only at the edges, when parsing the board layout, planning
//! spawns on a degenerate board, or talking to SDL.

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs. It is
/// also a `bevy_ecs` event so systems can report anomalies without panicking.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Board parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),

    #[error("Invalid board width at line {line}: expected {expected}, got {got}")]
    BadWidth {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("Board must have at least one row")]
    EmptyBoard,
}

/// Errors related to maze geometry and spawn planning.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("Board has no floor cells to place entities on")]
    NoSpawnPositions,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
