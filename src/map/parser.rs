//! Board parsing functionality for converting raw ASCII layouts into tiles.

use crate::constants::MazeTile;
use crate::error::ParseError;

/// Structured representation of a parsed ASCII board layout.
///
/// Tiles are stored row-major. The parser accepts boards of any rectangular
/// dimensions so tests can build small rooms; the standard game board is
/// [`crate::constants::RAW_BOARD`].
#[derive(Debug)]
pub struct ParsedBoard {
    pub width: usize,
    pub height: usize,
    /// Row-major tile array, `width * height` entries.
    pub tiles: Vec<MazeTile>,
}

/// Parser for converting raw board layouts into structured tile data.
pub struct BoardParser;

impl BoardParser {
    /// Converts ASCII characters from the board layout into tile types.
    ///
    /// The vocabulary is deliberately tiny: walls (`#`) and floors (`.`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCharacter` for any other character.
    pub fn parse_character(c: char) -> Result<MazeTile, ParseError> {
        match c {
            '#' => Ok(MazeTile::Wall),
            '.' => Ok(MazeTile::Floor),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured tile data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, contains unknown characters,
    /// or has rows of differing widths.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedBoard, ParseError> {
        let height = raw_board.len();
        if height == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let width = raw_board[0].len();
        for (line, row) in raw_board.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::BadWidth {
                    line,
                    expected: width,
                    got: row.len(),
                });
            }
        }

        let mut tiles = Vec::with_capacity(width * height);
        for row in raw_board {
            for character in row.chars() {
                tiles.push(Self::parse_character(character)?);
            }
        }

        Ok(ParsedBoard { width, height, tiles })
    }
}
