/*
highscores.rs

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

//! Manage the players' high scores.
//!
//! The main object, [`HighScores`], maintains a board of the best solve times for each player.
//! This object is saved when a player solves the cube and makes it to their board, and is
//! restored when Cubik starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Number of entries per board (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// How long did it take to solve the cube.
    pub time: Duration,

    /// Number of moves the player made.
    pub moves: usize,

    /// Completion timestamp.
    pub when: SystemTime,
}

/// List of the boards of the players, indexed by player name.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Sorted list of the top scores for each player, fastest first.
    /// The number of scores in a list is controlled by the [`BOARD_SIZE`] constant.
    board: HashMap<String, Vec<Score>>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a score to the board of the given player and return the position in the board, or
    /// None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A score equal to an existing one is
    /// ranked after it.
    pub fn add_score(&mut self, player: &str, time: Duration, moves: usize) -> Option<usize> {
        let top: &mut Vec<Score> = self.board.entry(player.to_string()).or_default();
        let position: usize = top
            .iter()
            .position(|s| time < s.time)
            .unwrap_or(top.len());
        if position >= BOARD_SIZE {
            return None;
        }
        top.insert(
            position,
            Score {
                time,
                moves,
                when: SystemTime::now(),
            },
        );
        top.truncate(BOARD_SIZE);
        Some(position + 1)
    }

    /// Return the list of [`Score`] for the given player.
    ///
    /// Return None when the player has no score.
    pub fn get_score(&self, player: &str) -> Option<&Vec<Score>> {
        self.board.get(player).filter(|top| !top.is_empty())
    }

    /// Return whether no player has a score.
    pub fn is_empty(&self) -> bool {
        self.board.values().all(|top| top.is_empty())
    }
}
