/*
checkpoint.rs

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

//! Game checkpoint.
//!
//! Players can take checkpoints while solving the cube so that they can revert back to a
//! well-known state if need be.
//! A checkpoint saves the cube and the move history.
//!
//! See [`crate::session`] where the checkpoints are organized as a stack: a player can create
//! several checkpoints, and can revert back to the last checkpoint, which is then deleted.

use serde::{Deserialize, Serialize};

use crate::cube::state::CubeState;
use crate::move_history::MoveHistory;
use crate::session::Session;

/// Checkpoint representation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CheckPoint {
    /// The cube when the checkpoint was taken.
    pub cube: CubeState,

    /// The moves and the undo and redo lists.
    pub history: MoveHistory,
}

impl CheckPoint {
    /// Create a [`CheckPoint`] object for the provided [`Session`] object.
    pub fn new(session: &Session) -> Self {
        Self {
            cube: session.cube().clone(),
            history: session.history().clone(),
        }
    }
}
