/*
state.rs

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

//! Cube state: the 27 cubies and the moves applied to them.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::face::{Color, Face, NUM_FACES, Vector};
use super::move_table::{self, Turn};
use super::moves::{InvalidMove, Move};

/// Number of cubies in the grid.
pub const NUM_POSITIONS: usize = 27;

/// Number of stickers on a face.
pub const FACE_STICKERS: usize = 9;

/// Position of a cubie in the grid.
///
/// Each coordinate is in `-1..=1`: `x` goes from left to right, `y` from down to up, and `z` from
/// back to front.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    x: i8,
    y: i8,
    z: i8,
}

impl Position {
    /// Create a [`Position`] object, or None if a coordinate is out of the grid.
    pub fn new(x: i8, y: i8, z: i8) -> Option<Self> {
        let range = -1i8..=1;
        if range.contains(&x) && range.contains(&y) && range.contains(&z) {
            Some(Self { x, y, z })
        } else {
            None
        }
    }

    /// Position for a vector, with the coordinates clamped to the grid.
    pub fn from_vector(v: Vector) -> Self {
        Self {
            x: v[0].clamp(-1, 1),
            y: v[1].clamp(-1, 1),
            z: v[2].clamp(-1, 1),
        }
    }

    /// Position for an index returned by [`Position::index`].
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_POSITIONS);
        let index: i8 = (index % NUM_POSITIONS) as i8;
        Self {
            x: index / 9 - 1,
            y: (index / 3) % 3 - 1,
            z: index % 3 - 1,
        }
    }

    /// Index of the position in the flat cubie array.
    pub fn index(&self) -> usize {
        ((self.x + 1) * 9 + (self.y + 1) * 3 + (self.z + 1)) as usize
    }

    /// All the positions, in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_POSITIONS).map(Position::from_index)
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn z(&self) -> i8 {
        self.z
    }

    pub fn vector(&self) -> Vector {
        [self.x, self.y, self.z]
    }

    /// Whether the cubie at this position belongs to the layer that shows `face`.
    pub fn is_in_layer(&self, face: Face) -> bool {
        self.vector()[face.axis()] == face.layer()
    }
}

/// A cubie and the colors of its six facelet slots.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    /// Colors indexed by [`Face::index`].
    colors: [Color; NUM_FACES],
}

impl Cubie {
    /// Cubie of a solved cube: every slot shows the home color of its direction.
    pub fn solved() -> Self {
        Self {
            colors: Face::ALL.map(Face::home_color),
        }
    }

    /// Color showing in the given slot.
    pub fn color(&self, slot: Face) -> Color {
        self.colors[slot.index()]
    }

    pub fn colors(&self) -> &[Color; NUM_FACES] {
        &self.colors
    }

    /// Cubie with its slots moved as described by `slots`.
    fn turned(&self, slots: &[Face; NUM_FACES]) -> Self {
        let mut colors: [Color; NUM_FACES] = self.colors;
        for face in Face::ALL {
            colors[slots[face.index()].index()] = self.colors[face.index()];
        }
        Self { colors }
    }
}

/// Colors of a face, row by row, as seen from outside the cube.
/// See [`Face::grid_axes`] for the orientation.
fn face_grid(cubies: &[Cubie; NUM_POSITIONS], face: Face) -> [[Color; 3]; 3] {
    let n: Vector = face.normal();
    let (right, down) = face.grid_axes();
    let mut grid: [[Color; 3]; 3] = [[face.home_color(); 3]; 3];

    for (row, line) in grid.iter_mut().enumerate() {
        for (col, color) in line.iter_mut().enumerate() {
            let r: i8 = row as i8 - 1;
            let c: i8 = col as i8 - 1;
            let position = Position::from_vector([
                n[0] + c * right[0] + r * down[0],
                n[1] + c * right[1] + r * down[1],
                n[2] + c * right[2] + r * down[2],
            ]);
            *color = cubies[position.index()].color(face);
        }
    }
    grid
}

/// State of the cube.
///
/// The state is always well-formed: every move is applied as a single permutation of the cubie
/// array. [`CubeState`] has no interior mutability, so sharing it between threads requires the
/// caller to serialize the moves, for example with a mutex.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    /// Cubies indexed by [`Position::index`].
    cubies: [Cubie; NUM_POSITIONS],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new_solved()
    }
}

impl CubeState {
    /// Create a solved cube.
    pub fn new_solved() -> Self {
        Self {
            cubies: [Cubie::solved(); NUM_POSITIONS],
        }
    }

    /// Apply a move given as raw values by an input layer.
    ///
    /// See [`Move::decode`] for the accepted values.
    ///
    /// # Errors
    ///
    /// [`InvalidMove`] when the face or the direction is unknown. The cube is not modified.
    pub fn apply_move(&mut self, face: char, direction: &str) -> Result<(), InvalidMove> {
        let mv: Move = Move::decode(face, direction)?;
        self.apply(mv);
        Ok(())
    }

    /// Apply a move.
    pub fn apply(&mut self, mv: Move) {
        self.cubies = self.turned(mv);
    }

    /// Apply moves in sequence.
    pub fn apply_all<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = Move>,
    {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Return the cubie array after the given move, without modifying the cube.
    pub fn turned(&self, mv: Move) -> [Cubie; NUM_POSITIONS] {
        let turn: &Turn = move_table::table().get(mv);
        let mut cubies: [Cubie; NUM_POSITIONS] = self.cubies;

        for (i, cubie) in self.cubies.iter().enumerate() {
            if turn.in_layer[i] {
                cubies[turn.positions[i]] = cubie.turned(&turn.slots);
            }
        }
        cubies
    }

    /// Whether each face shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|face| {
            let grid: [[Color; 3]; 3] = face_grid(&self.cubies, *face);
            let first: Color = grid[0][0];
            grid.iter().flatten().all(|c| *c == first)
        })
    }

    /// Return a read-only copy of the cubies.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cubies: self.cubies,
        }
    }

    /// Return the cubie at the given position.
    pub fn cubie(&self, position: Position) -> &Cubie {
        &self.cubies[position.index()]
    }

    /// Replace the cubies with those of a previously taken snapshot.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        debug!("Restoring the cube from a snapshot");
        self.cubies = snapshot.cubies;
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

/// Read-only copy of the cube, for renderers and loggers.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cubies: [Cubie; NUM_POSITIONS],
}

impl Snapshot {
    /// Return the cubie at the given position.
    pub fn cubie(&self, position: Position) -> &Cubie {
        &self.cubies[position.index()]
    }

    /// Return the cubie at the given coordinates, or None if they are out of the grid.
    pub fn cubie_at(&self, x: i8, y: i8, z: i8) -> Option<&Cubie> {
        Position::new(x, y, z).map(|p| self.cubie(p))
    }

    /// Iterate over the cubies and their position.
    pub fn cubies(&self) -> impl Iterator<Item = (Position, &Cubie)> {
        self.cubies
            .iter()
            .enumerate()
            .map(|(i, c)| (Position::from_index(i), c))
    }

    /// Colors of a face, row by row, as seen from outside the cube.
    pub fn face(&self, face: Face) -> [[Color; 3]; 3] {
        face_grid(&self.cubies, face)
    }

    /// Number of outward stickers of each color, indexed by [`Color::index`].
    pub fn color_counts(&self) -> [usize; NUM_FACES] {
        let mut counts: [usize; NUM_FACES] = [0; NUM_FACES];
        for face in Face::ALL {
            for color in self.face(face).iter().flatten() {
                counts[color.index()] += 1;
            }
        }
        counts
    }

    /// Number of facelet slots of each color over all the cubies, including the slots that
    /// do not face outward.
    pub fn slot_color_counts(&self) -> [usize; NUM_FACES] {
        let mut counts: [usize; NUM_FACES] = [0; NUM_FACES];
        for cubie in &self.cubies {
            for color in cubie.colors() {
                counts[color.index()] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::moves::{Direction, parse_sequence};

    fn assert_colors_conserved(cube: &CubeState) {
        let snapshot: Snapshot = cube.snapshot();
        assert_eq!(snapshot.color_counts(), [FACE_STICKERS; NUM_FACES]);
        assert_eq!(snapshot.slot_color_counts(), [NUM_POSITIONS; NUM_FACES]);
    }

    /// A cube in a state that no single move produces.
    fn mixed_cube() -> CubeState {
        let mut cube = CubeState::new_solved();
        cube.apply_all(parse_sequence("R U F' L D B' R' U' L F").unwrap());
        cube
    }

    #[test]
    fn positions() {
        for (i, position) in Position::all().enumerate() {
            assert_eq!(position.index(), i);
        }
        assert_eq!(Position::new(0, 0, 0).unwrap().index(), 13);
        assert_eq!(Position::new(-1, -1, -1).unwrap().index(), 0);
        assert_eq!(Position::new(1, 1, 1).unwrap().index(), 26);
        assert!(Position::new(2, 0, 0).is_none());
        assert!(Position::new(0, -2, 0).is_none());
        assert!(Position::new(0, 1, 0).unwrap().is_in_layer(Face::Up));
        assert!(!Position::new(0, 1, 0).unwrap().is_in_layer(Face::Down));
    }

    #[test]
    fn new_cube_is_solved() {
        let cube = CubeState::new_solved();
        assert!(cube.is_solved());
        assert_eq!(cube, CubeState::default());
        assert_colors_conserved(&cube);
        for face in Face::ALL {
            assert_eq!(cube.snapshot().face(face), [[face.home_color(); 3]; 3]);
        }
    }

    #[test]
    fn four_turns_are_identity() {
        for start in [CubeState::new_solved(), mixed_cube()] {
            for mv in Move::all() {
                let mut cube: CubeState = start.clone();
                for _ in 0..4 {
                    cube.apply(mv);
                }
                assert_eq!(cube, start, "{mv}");
            }
        }
    }

    #[test]
    fn inverse_cancels_move() {
        for start in [CubeState::new_solved(), mixed_cube()] {
            for mv in Move::all() {
                let mut cube: CubeState = start.clone();
                cube.apply(mv);
                assert_ne!(cube, start, "{mv}");
                cube.apply(mv.inverse());
                assert_eq!(cube, start, "{mv}");
            }
        }
    }

    #[test]
    fn single_move_breaks_solved_cube() {
        for mv in Move::all() {
            let mut cube = CubeState::new_solved();
            cube.apply(mv);
            assert!(!cube.is_solved(), "{mv}");
            assert_colors_conserved(&cube);
        }
    }

    #[test]
    fn turned_face_keeps_its_color() {
        for mv in Move::all() {
            let mut cube = CubeState::new_solved();
            cube.apply(mv);
            let snapshot: Snapshot = cube.snapshot();
            assert_eq!(snapshot.face(mv.face), [[mv.face.home_color(); 3]; 3]);
            assert_eq!(
                snapshot.face(mv.face.opposite()),
                [[mv.face.opposite().home_color(); 3]; 3]
            );
        }
    }

    #[test]
    fn up_turn_moves_front_row_to_the_left() {
        let mut cube = CubeState::new_solved();
        cube.apply(Move::cw(Face::Up));
        let snapshot: Snapshot = cube.snapshot();
        assert_eq!(snapshot.face(Face::Left)[0], [Color::Green; 3]);
        assert_eq!(snapshot.face(Face::Front)[0], [Color::Red; 3]);
        assert_eq!(snapshot.face(Face::Right)[0], [Color::Blue; 3]);
        assert_eq!(snapshot.face(Face::Back)[0], [Color::Orange; 3]);
        assert_eq!(snapshot.face(Face::Front)[1], [Color::Green; 3]);
    }

    #[test]
    fn right_turn_moves_front_column_up() {
        let mut cube = CubeState::new_solved();
        cube.apply(Move::cw(Face::Right));
        let snapshot: Snapshot = cube.snapshot();
        for row in 0..3 {
            assert_eq!(snapshot.face(Face::Up)[row][2], Color::Green);
            assert_eq!(snapshot.face(Face::Front)[row][2], Color::Yellow);
            assert_eq!(snapshot.face(Face::Up)[row][0], Color::White);
        }
    }

    #[test]
    fn front_turn_moves_up_row_to_the_right() {
        let mut cube = CubeState::new_solved();
        cube.apply(Move::cw(Face::Front));
        let snapshot: Snapshot = cube.snapshot();
        for row in 0..3 {
            assert_eq!(snapshot.face(Face::Right)[row][0], Color::White);
            assert_eq!(snapshot.face(Face::Left)[row][2], Color::Yellow);
        }
        assert_eq!(snapshot.face(Face::Up)[2], [Color::Orange; 3]);
        assert_eq!(snapshot.face(Face::Down)[0], [Color::Red; 3]);
    }

    #[test]
    fn cubies_move_with_the_layer() {
        let mut cube = CubeState::new_solved();
        cube.apply(Move::cw(Face::Up));
        // The up-front-right corner moved to up-front-left, turning with the layer.
        let corner: Cubie = *cube.snapshot().cubie_at(-1, 1, 1).unwrap();
        assert_eq!(corner.color(Face::Up), Color::White);
        assert_eq!(corner.color(Face::Front), Color::Red);
        assert_eq!(corner.color(Face::Left), Color::Green);
        assert_eq!(corner.color(Face::Down), Color::Yellow);
        // Cubies outside the layer do not move.
        assert_eq!(*cube.snapshot().cubie_at(1, 0, 1).unwrap(), Cubie::solved());
        assert!(cube.snapshot().cubie_at(0, 2, 0).is_none());
    }

    #[test]
    fn colors_are_conserved_over_long_sequences() {
        let mut cube = CubeState::new_solved();
        for i in 0..200 {
            let mv: Move = Move::from_index((i * 7 + i / 3) % 12).unwrap();
            cube.apply(mv);
            assert_colors_conserved(&cube);
        }
    }

    #[test]
    fn invalid_move_leaves_cube_unchanged() {
        let mut cube: CubeState = mixed_cube();
        let before: Snapshot = cube.snapshot();

        assert_eq!(cube.apply_move('X', "cw"), Err(InvalidMove::Face('X')));
        assert_eq!(cube.snapshot(), before);

        assert!(matches!(
            cube.apply_move('U', "half"),
            Err(InvalidMove::Direction(_))
        ));
        assert_eq!(cube.snapshot(), before);

        assert_eq!(cube.apply_move('U', "cw"), Ok(()));
        assert_ne!(cube.snapshot(), before);
        assert_eq!(cube.apply_move('U', "ccw"), Ok(()));
        assert_eq!(cube.snapshot(), before);
    }

    #[test]
    fn sexy_move_scenario() {
        let sequence: Vec<Move> = parse_sequence("R U R' U'").unwrap();

        let mut repeated = CubeState::new_solved();
        for _ in 0..4 {
            for mv in &sequence {
                repeated.apply(*mv);
            }
        }

        let mut individual = CubeState::new_solved();
        individual.apply_move('R', "cw").unwrap();
        individual.apply_move('U', "cw").unwrap();
        individual.apply_move('R', "ccw").unwrap();
        individual.apply_move('U', "ccw").unwrap();
        individual.apply_move('R', "cw").unwrap();
        individual.apply_move('U', "cw").unwrap();
        individual.apply_move('R', "ccw").unwrap();
        individual.apply_move('U', "ccw").unwrap();
        individual.apply_move('R', "cw").unwrap();
        individual.apply_move('U', "cw").unwrap();
        individual.apply_move('R', "ccw").unwrap();
        individual.apply_move('U', "ccw").unwrap();
        individual.apply_move('R', "cw").unwrap();
        individual.apply_move('U', "cw").unwrap();
        individual.apply_move('R', "ccw").unwrap();
        individual.apply_move('U', "ccw").unwrap();

        assert_eq!(repeated, individual);
        assert_colors_conserved(&repeated);

        let uniform: bool = Face::ALL.iter().all(|face| {
            let grid = repeated.snapshot().face(*face);
            grid.iter().flatten().all(|c| *c == grid[0][0])
        });
        assert_eq!(repeated.is_solved(), uniform);

        // The sequence has order 6: two more repetitions solve the cube.
        for _ in 0..2 {
            repeated.apply_all(sequence.iter().copied());
        }
        assert!(repeated.is_solved());
    }

    #[test]
    fn restore_snapshot() {
        let mut cube: CubeState = mixed_cube();
        let snapshot: Snapshot = cube.snapshot();
        cube.apply(Move::new(Face::Back, Direction::CounterClockwise));
        cube.restore(&snapshot);
        assert_eq!(cube, mixed_cube());
    }
}
