/*
scrambler.rs

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

//! Scramble a cube with uniformly random moves.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::face::{Face, NUM_FACES};
use super::moves::{self, Direction, Move};
use super::state::CubeState;
use crate::config::DEFAULT_SCRAMBLE_MOVES;

/// Draw a move: the face and the direction are chosen uniformly.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    let face: Face = Face::ALL[rng.random_range(0..NUM_FACES)];
    let direction: Direction = if rng.random_bool(0.5) {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    };
    Move::new(face, direction)
}

/// Generator of random move sequences.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scrambler {
    /// Number of moves in a sequence.
    pub count: usize,

    /// Seed of the random number generator. When not set, the thread generator is used and the
    /// sequences are not reproducible.
    pub seed: Option<u64>,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new(DEFAULT_SCRAMBLE_MOVES)
    }
}

impl Scrambler {
    /// Create a [`Scrambler`] object.
    pub fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    /// Use a seeded generator so that the sequences are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn sequence<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Move> {
        let mut sequence: Vec<Move> = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            sequence.push(random_move(rng));
        }
        sequence
    }

    /// Return a random sequence of moves.
    pub fn generate(&self) -> Vec<Move> {
        match self.seed {
            Some(seed) => self.sequence(&mut StdRng::seed_from_u64(seed)),
            None => self.sequence(&mut rand::rng()),
        }
    }

    /// Apply a random sequence of moves to the cube and return the sequence.
    pub fn scramble(&self, cube: &mut CubeState) -> Vec<Move> {
        let sequence: Vec<Move> = self.generate();
        debug!("Scramble: {}", moves::format_sequence(&sequence, " "));
        cube.apply_all(sequence.iter().copied());
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_length() {
        assert_eq!(Scrambler::new(0).generate().len(), 0);
        assert_eq!(Scrambler::new(25).generate().len(), 25);
        assert_eq!(Scrambler::default().count, DEFAULT_SCRAMBLE_MOVES);
    }

    #[test]
    fn seeded_sequences_are_reproducible() {
        let scrambler: Scrambler = Scrambler::new(40).with_seed(42);
        assert_eq!(scrambler.generate(), scrambler.generate());
        assert_ne!(
            scrambler.generate(),
            Scrambler::new(40).with_seed(43).generate()
        );
    }

    #[test]
    fn every_move_is_drawn() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen: [bool; moves::NUM_MOVES] = [false; moves::NUM_MOVES];
        for _ in 0..1000 {
            seen[random_move(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn scramble_applies_the_sequence() {
        let scrambler: Scrambler = Scrambler::new(30).with_seed(2025);
        let mut cube = CubeState::new_solved();
        let sequence: Vec<Move> = scrambler.scramble(&mut cube);

        let mut expected = CubeState::new_solved();
        expected.apply_all(sequence.iter().copied());
        assert_eq!(cube, expected);

        // Undo the scramble
        for mv in sequence.iter().rev() {
            cube.apply(mv.inverse());
        }
        assert!(cube.is_solved());
    }
}
