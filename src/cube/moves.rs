/*
moves.rs

Copyright 2025 Hervé Quatremain

This file is part of Cubik.

Cubik is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Cubik is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Cubik. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Moves: a face turned by a quarter turn in one direction.
//!
//! In the notation, a move is the face letter, optionally followed by an apostrophe for a
//! counter-clockwise turn (`R` and `R'`).

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

use super::face::{Face, NUM_FACES};

/// Number of distinct quarter turns (six faces, two directions).
pub const NUM_MOVES: usize = NUM_FACES * 2;

/// Errors raised when decoding a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("unknown face {0:?}, expected one of U, D, L, R, F, B")]
    Face(char),

    #[error("unknown direction {0:?}, expected cw or ccw")]
    Direction(String),

    #[error("invalid move {0:?}")]
    Notation(String),
}

/// Turn direction, as seen when looking at the turned face from outside the cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Notation suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
        }
    }

    /// Decode a direction given by an input layer.
    ///
    /// Accepts `cw`/`clockwise` and `ccw`/`counterclockwise`/`counter-clockwise` (any case), as
    /// well as the notation suffixes: nothing for clockwise and `'` for counter-clockwise.
    pub fn decode(value: &str) -> Result<Direction, InvalidMove> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "cw" | "clockwise" => Ok(Direction::Clockwise),
            "'" | "ccw" | "counterclockwise" | "counter-clockwise" => {
                Ok(Direction::CounterClockwise)
            }
            _ => Err(InvalidMove::Direction(value.to_string())),
        }
    }
}

/// A quarter turn of a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    pub fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Clockwise quarter turn of `face`.
    pub fn cw(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    /// Counter-clockwise quarter turn of `face`.
    pub fn ccw(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// Decode the raw face and direction values provided by an input layer.
    ///
    /// # Errors
    ///
    /// [`InvalidMove::Face`] or [`InvalidMove::Direction`] when a value is not one of the
    /// enumerated ones.
    pub fn decode(face: char, direction: &str) -> Result<Move, InvalidMove> {
        let face: Face = Face::from_letter(face).ok_or(InvalidMove::Face(face))?;
        let direction: Direction = Direction::decode(direction)?;
        Ok(Self::new(face, direction))
    }

    /// The move that cancels this one.
    pub fn inverse(self) -> Move {
        Self::new(self.face, self.direction.reverse())
    }

    /// Index of the move in `0..NUM_MOVES`.
    pub fn index(self) -> usize {
        self.face.index() * 2 + self.direction as usize
    }

    /// Move for an index returned by [`Move::index`].
    pub fn from_index(index: usize) -> Option<Move> {
        let face: Face = Face::from_repr(u8::try_from(index / 2).ok()?)?;
        let direction: Direction = Direction::from_repr((index % 2) as u8)?;
        Some(Self::new(face, direction))
    }

    /// All the quarter turns, in index order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..NUM_MOVES).filter_map(Move::from_index)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction.suffix())
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    /// Parse a move in notation form, such as `U` or `U'`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token: &str = token.trim();
        let mut chars = token.chars();
        let letter: char = chars
            .next()
            .ok_or_else(|| InvalidMove::Notation(token.to_string()))?;
        let face: Face =
            Face::from_letter(letter).ok_or_else(|| InvalidMove::Notation(token.to_string()))?;
        let direction: Direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::CounterClockwise,
            _ => return Err(InvalidMove::Notation(token.to_string())),
        };
        Ok(Self::new(face, direction))
    }
}

/// Parse a sequence of moves separated by white spaces or commas, such as `R U R' U'`.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Move>, InvalidMove> {
    let moves: Vec<Move> = sequence
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(Move::from_str)
        .collect::<Result<Vec<Move>, InvalidMove>>()?;
    debug!("Parsed {} moves from {sequence:?}", moves.len());
    Ok(moves)
}

/// Format a sequence of moves in notation form.
pub fn format_sequence(moves: &[Move], separator: &str) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<String>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_round_trip() {
        let all: Vec<Move> = Move::all().collect();
        assert_eq!(all.len(), NUM_MOVES);
        for mv in all {
            assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
        }
    }

    #[test]
    fn notation() {
        assert_eq!("R".parse::<Move>(), Ok(Move::cw(Face::Right)));
        assert_eq!("u'".parse::<Move>(), Ok(Move::ccw(Face::Up)));
        assert_eq!(Move::ccw(Face::Back).to_string(), "B'");
        assert!(matches!("".parse::<Move>(), Err(InvalidMove::Notation(_))));
        assert!(matches!("X".parse::<Move>(), Err(InvalidMove::Notation(_))));
        assert!(matches!("U2".parse::<Move>(), Err(InvalidMove::Notation(_))));
        assert!(matches!("U''".parse::<Move>(), Err(InvalidMove::Notation(_))));
    }

    #[test]
    fn decode_raw_values() {
        assert_eq!(Move::decode('F', "cw"), Ok(Move::cw(Face::Front)));
        assert_eq!(Move::decode('f', "CCW"), Ok(Move::ccw(Face::Front)));
        assert_eq!(
            Move::decode('L', "counter-clockwise"),
            Ok(Move::ccw(Face::Left))
        );
        assert_eq!(Move::decode('D', "'"), Ok(Move::ccw(Face::Down)));
        assert_eq!(Move::decode('D', ""), Ok(Move::cw(Face::Down)));
        assert_eq!(Move::decode('Q', "cw"), Err(InvalidMove::Face('Q')));
        assert_eq!(
            Move::decode('U', "sideways"),
            Err(InvalidMove::Direction("sideways".to_string()))
        );
    }

    #[test]
    fn inverse_and_index() {
        for mv in Move::all() {
            assert_ne!(mv.inverse(), mv);
            assert_eq!(mv.inverse().inverse(), mv);
            assert_eq!(mv.inverse().face, mv.face);
            assert_eq!(Move::from_index(mv.index()), Some(mv));
        }
        assert_eq!(Move::from_index(NUM_MOVES), None);
    }

    #[test]
    fn sequences() {
        let moves: Vec<Move> = parse_sequence("R U R' U'").unwrap();
        assert_eq!(
            moves,
            vec![
                Move::cw(Face::Right),
                Move::cw(Face::Up),
                Move::ccw(Face::Right),
                Move::ccw(Face::Up)
            ]
        );
        assert_eq!(format_sequence(&moves, ", "), "R, U, R', U'");
        assert_eq!(parse_sequence("R, U, R', U'").unwrap(), moves);
        assert_eq!(parse_sequence("  ").unwrap(), Vec::new());
        assert_eq!(
            parse_sequence("R Z"),
            Err(InvalidMove::Notation("Z".to_string()))
        );
    }
}
