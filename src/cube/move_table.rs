/*
move_table.rs

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

//! Permutation table of the quarter turns.
//!
//! Every entry is derived from the geometry of the turn rather than written by hand: the cubies
//! of the turned layer are moved to their rotated position, and their facelet slots are rotated
//! by the same quarter turn.
//!
//! A clockwise turn of the face with outward normal `n` is the rotation by -90 degrees about `n`
//! (right-hand rule), which maps a vector `v` to `v × n + (v · n) n`.
//! Looking at the face from outside, that rotation is clockwise.
//! A counter-clockwise turn maps `v` to `n × v + (v · n) n`.

use std::sync::OnceLock;

use super::face::{Face, NUM_FACES, Vector};
use super::moves::{Direction, Move, NUM_MOVES};
use super::state::{NUM_POSITIONS, Position};

/// Rotate `v` by the quarter turn of `mv`.
pub fn rotate(v: Vector, mv: Move) -> Vector {
    let n: Vector = mv.face.normal();
    let dot: i8 = v[0] * n[0] + v[1] * n[1] + v[2] * n[2];
    let cross: Vector = [
        v[1] * n[2] - v[2] * n[1],
        v[2] * n[0] - v[0] * n[2],
        v[0] * n[1] - v[1] * n[0],
    ];
    let sign: i8 = match mv.direction {
        Direction::Clockwise => 1,
        Direction::CounterClockwise => -1,
    };
    [
        sign * cross[0] + dot * n[0],
        sign * cross[1] + dot * n[1],
        sign * cross[2] + dot * n[2],
    ]
}

/// Permutation applied by one quarter turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Whether the cubie at each position index belongs to the turned layer.
    pub in_layer: [bool; NUM_POSITIONS],

    /// Position index the cubie at each position index moves to.
    /// Cubies outside the layer stay in place.
    pub positions: [usize; NUM_POSITIONS],

    /// Slot each facelet slot of a turned cubie moves to, indexed by [`Face::index`].
    pub slots: [Face; NUM_FACES],
}

impl Turn {
    /// Build the permutation of the given move.
    fn new(mv: Move) -> Self {
        let mut in_layer: [bool; NUM_POSITIONS] = [false; NUM_POSITIONS];
        let mut positions: [usize; NUM_POSITIONS] = [0; NUM_POSITIONS];

        for position in Position::all() {
            let i: usize = position.index();
            if position.is_in_layer(mv.face) {
                in_layer[i] = true;
                positions[i] = Position::from_vector(rotate(position.vector(), mv)).index();
            } else {
                positions[i] = i;
            }
        }
        let slots: [Face; NUM_FACES] = Face::ALL.map(|f| Face::facing(rotate(f.normal(), mv)));

        Self {
            in_layer,
            positions,
            slots,
        }
    }
}

/// Permutations of the [`NUM_MOVES`] quarter turns, indexed by [`Move::index`].
#[derive(Debug)]
pub struct MoveTable {
    turns: Vec<Turn>,
}

impl MoveTable {
    fn new() -> Self {
        let turns: Vec<Turn> = Move::all().map(Turn::new).collect();
        debug_assert_eq!(turns.len(), NUM_MOVES);
        Self { turns }
    }

    /// Permutation of the given move.
    pub fn get(&self, mv: Move) -> &Turn {
        &self.turns[mv.index()]
    }
}

/// The table, built on first use.
pub fn table() -> &'static MoveTable {
    static TABLE: OnceLock<MoveTable> = OnceLock::new();
    TABLE.get_or_init(MoveTable::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_bijection(map: &[usize]) -> bool {
        let mut seen: Vec<bool> = vec![false; map.len()];
        for &target in map {
            if target >= map.len() || seen[target] {
                return false;
            }
            seen[target] = true;
        }
        true
    }

    #[test]
    fn positions_are_bijections() {
        for mv in Move::all() {
            let turn: &Turn = table().get(mv);
            assert!(is_bijection(&turn.positions), "{mv}");
            let slots: Vec<usize> = turn.slots.iter().map(|f| f.index()).collect();
            assert!(is_bijection(&slots), "{mv}");
        }
    }

    #[test]
    fn only_the_layer_moves() {
        for mv in Move::all() {
            let turn: &Turn = table().get(mv);
            assert_eq!(turn.in_layer.iter().filter(|b| **b).count(), 9);
            for position in Position::all() {
                let i: usize = position.index();
                let target: Position = Position::from_index(turn.positions[i]);
                if turn.in_layer[i] {
                    assert!(target.is_in_layer(mv.face));
                } else {
                    assert_eq!(target, position);
                }
            }
        }
    }

    #[test]
    fn axis_slots_are_fixed() {
        for mv in Move::all() {
            let turn: &Turn = table().get(mv);
            assert_eq!(turn.slots[mv.face.index()], mv.face);
            assert_eq!(turn.slots[mv.face.opposite().index()], mv.face.opposite());
            for face in Face::ALL {
                if face.axis() != mv.face.axis() {
                    assert_ne!(turn.slots[face.index()], face);
                    assert_ne!(turn.slots[face.index()], face.opposite());
                }
            }
        }
    }

    #[test]
    fn counter_clockwise_inverts_clockwise() {
        for face in Face::ALL {
            let cw: &Turn = table().get(Move::cw(face));
            let ccw: &Turn = table().get(Move::ccw(face));
            for i in 0..NUM_POSITIONS {
                assert_eq!(ccw.positions[cw.positions[i]], i);
            }
            for slot in Face::ALL {
                assert_eq!(ccw.slots[cw.slots[slot.index()].index()], slot);
            }
        }
    }

    #[test]
    fn clockwise_convention() {
        // Top layer: front goes to the left.
        assert_eq!(rotate(Face::Front.normal(), Move::cw(Face::Up)), Face::Left.normal());
        // Bottom layer: front goes to the right.
        assert_eq!(rotate(Face::Front.normal(), Move::cw(Face::Down)), Face::Right.normal());
        // Right layer: front goes up.
        assert_eq!(rotate(Face::Front.normal(), Move::cw(Face::Right)), Face::Up.normal());
        // Left layer: front goes down.
        assert_eq!(rotate(Face::Front.normal(), Move::cw(Face::Left)), Face::Down.normal());
        // Front layer: up goes right.
        assert_eq!(rotate(Face::Up.normal(), Move::cw(Face::Front)), Face::Right.normal());
        // Back layer: up goes left.
        assert_eq!(rotate(Face::Up.normal(), Move::cw(Face::Back)), Face::Left.normal());
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for mv in Move::all() {
            for face in Face::ALL {
                let mut v: Vector = face.normal();
                for _ in 0..4 {
                    v = rotate(v, mv);
                }
                assert_eq!(v, face.normal());
            }
        }
    }
}
