/*
face.rs

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

//! Faces of the cube and facelet colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Number of faces of the cube, which is also the number of facelet slots of a cubie.
pub const NUM_FACES: usize = 6;

/// Integer vector in cube coordinates (`x`, `y`, `z`).
pub type Vector = [i8; 3];

/// Face of the cube.
///
/// The same value names a face of the whole cube (the up face) and the direction of a facelet
/// slot of a cubie (the slot pointing up).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    /// All the faces, in slot order.
    pub const ALL: [Face; NUM_FACES] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Slot index of the face.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward unit normal of the face.
    pub fn normal(self) -> Vector {
        match self {
            Face::Up => [0, 1, 0],
            Face::Down => [0, -1, 0],
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
            Face::Left => [-1, 0, 0],
            Face::Right => [1, 0, 0],
        }
    }

    /// Face whose outward normal is `v`.
    ///
    /// `v` must be one of the six unit axis vectors.
    pub fn facing(v: Vector) -> Face {
        match v {
            [0, 1, 0] => Face::Up,
            [0, -1, 0] => Face::Down,
            [0, 0, 1] => Face::Front,
            [0, 0, -1] => Face::Back,
            [-1, 0, 0] => Face::Left,
            _ => Face::Right,
        }
    }

    /// Axis the face is perpendicular to: 0 for `x`, 1 for `y`, 2 for `z`.
    pub fn axis(self) -> usize {
        match self {
            Face::Left | Face::Right => 0,
            Face::Up | Face::Down => 1,
            Face::Front | Face::Back => 2,
        }
    }

    /// Coordinate, along [`Face::axis`], of the layer of cubies that shows this face.
    pub fn layer(self) -> i8 {
        match self {
            Face::Up | Face::Front | Face::Right => 1,
            Face::Down | Face::Back | Face::Left => -1,
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    /// Screen axes of the face as seen from outside the cube: the vector pointing to the next
    /// column (right) and the vector pointing to the next row (down).
    ///
    /// The up face is seen with the front face below it, the down face with the front face above
    /// it, and the four side faces with the up face above them.
    pub fn grid_axes(self) -> (Vector, Vector) {
        match self {
            Face::Up => ([1, 0, 0], [0, 0, 1]),
            Face::Down => ([1, 0, 0], [0, 0, -1]),
            Face::Front => ([1, 0, 0], [0, -1, 0]),
            Face::Back => ([-1, 0, 0], [0, -1, 0]),
            Face::Left => ([0, 0, 1], [0, -1, 0]),
            Face::Right => ([0, 0, -1], [0, -1, 0]),
        }
    }

    /// Notation letter.
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Face for a notation letter. Lower case letters are accepted.
    pub fn from_letter(letter: char) -> Option<Face> {
        match letter.to_ascii_uppercase() {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            _ => None,
        }
    }

    /// Color of the face on a solved cube.
    pub fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Facelet color.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    pub const ALL: [Color; NUM_FACES] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// Index of the color, for counting tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face that shows this color on a solved cube.
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::Up,
            Color::Yellow => Face::Down,
            Color::Green => Face::Front,
            Color::Blue => Face::Back,
            Color::Orange => Face::Left,
            Color::Red => Face::Right,
        }
    }

    /// Single letter used by the text net.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normals_match_axis_and_layer() {
        for face in Face::ALL {
            let n = face.normal();
            assert_eq!(n[face.axis()], face.layer());
            assert_eq!(n.iter().filter(|c| **c != 0).count(), 1);
            assert_eq!(Face::facing(n), face);
        }
    }

    #[test]
    fn opposite_faces_share_axis() {
        for face in Face::ALL {
            let other = face.opposite();
            assert_ne!(face, other);
            assert_eq!(face.axis(), other.axis());
            assert_eq!(face.layer(), -other.layer());
            assert_eq!(other.opposite(), face);
        }
    }

    #[test]
    fn letters() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
            assert_eq!(
                Face::from_letter(face.letter().to_ascii_lowercase()),
                Some(face)
            );
        }
        assert_eq!(Face::from_letter('X'), None);
        assert_eq!(Face::from_letter('\''), None);
    }

    #[test]
    fn home_colors_are_distinct() {
        for face in Face::ALL {
            assert_eq!(face.home_color().home_face(), face);
        }
        for color in Color::ALL {
            assert_eq!(color.home_face().home_color(), color);
        }
    }

    #[test]
    fn repr_follows_slot_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_repr(i as u8), Some(*face));
        }
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(Color::from_repr(i as u8), Some(*color));
        }
    }

    #[test]
    fn grid_axes_are_perpendicular_to_normal() {
        for face in Face::ALL {
            let (right, down) = face.grid_axes();
            let n = face.normal();
            let dot = |a: Vector, b: Vector| -> i8 { a.iter().zip(b).map(|(x, y)| x * y).sum() };
            assert_eq!(dot(right, n), 0);
            assert_eq!(dot(down, n), 0);
            assert_eq!(dot(right, down), 0);
        }
    }
}
