/*
move_history.rs

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

//! Manage the moves that the player made.
//!
//! The module keeps the moves in the order the player made them, which is also the undo list,
//! and the redo list.

use serde::{Deserialize, Serialize};

use crate::cube::moves::Move;

/// Moves made by the player, with undo and redo.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    /// Moves in the order they were made. The last one is the next to undo.
    done: Vec<Move>,

    /// Undone moves. The last one is the next to redo.
    undone: Vec<Move>,
}

impl MoveHistory {
    /// Create a [`MoveHistory`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }

    /// Record a move. The redo list is cleared.
    pub fn push(&mut self, mv: Move) {
        self.done.push(mv);
        self.undone.clear();
    }

    /// Take the last move out of the history and return it. The caller applies its inverse.
    pub fn undo(&mut self) -> Option<Move> {
        let mv: Move = self.done.pop()?;
        self.undone.push(mv);
        Some(mv)
    }

    /// Put the last undone move back in the history and return it. The caller applies it.
    pub fn redo(&mut self) -> Option<Move> {
        let mv: Move = self.undone.pop()?;
        self.done.push(mv);
        Some(mv)
    }

    /// Return the moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.done
    }

    /// Return the number of moves.
    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Return the length of the undo list.
    pub fn undo_len(&self) -> usize {
        self.done.len()
    }

    /// Return the length of the redo list.
    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::face::Face;

    #[test]
    fn undo_redo() {
        let mut history = MoveHistory::new();
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);

        history.push(Move::cw(Face::Right));
        history.push(Move::ccw(Face::Up));
        assert_eq!(history.len(), 2);

        assert_eq!(history.undo(), Some(Move::ccw(Face::Up)));
        assert_eq!(history.moves(), &[Move::cw(Face::Right)]);
        assert_eq!(history.redo_len(), 1);

        assert_eq!(history.redo(), Some(Move::ccw(Face::Up)));
        assert_eq!(history.undo_len(), 2);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn push_clears_redo() {
        let mut history = MoveHistory::new();
        history.push(Move::cw(Face::Front));
        history.undo();
        assert_eq!(history.redo_len(), 1);
        history.push(Move::cw(Face::Back));
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.moves(), &[Move::cw(Face::Back)]);

        history.clear();
        assert!(history.is_empty());
    }
}
