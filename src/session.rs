/*
session.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Session`] groups everything that belongs to one player's game around the cube: the
//! scramble, the moves and their undo and redo lists, the timer, and the checkpoints.
//! The cube itself, [`CubeState`], does not know about any of these.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::checkpoint::CheckPoint;
use crate::config::DEFAULT_PLAYER;
use crate::cube::moves::{InvalidMove, Move};
use crate::cube::scrambler::Scrambler;
use crate::cube::state::{CubeState, Snapshot};
use crate::move_history::MoveHistory;
use crate::saver::game::instant;

/// Errors raised when playing a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error("the game is paused")]
    Paused,
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct Session {
    /// Name of the player.
    pub player: String,

    /// The cube being played.
    cube: CubeState,

    /// Moves that the player made since the scramble.
    history: MoveHistory,

    /// Moves of the last scramble.
    scramble: Vec<Move>,

    /// Whether the cube has been scrambled and the timer is running.
    pub started: bool,

    /// Whether the player solved the cube since the scramble.
    pub solved: bool,

    /// Whether the player paused the game. Moves are refused while paused.
    pub paused: bool,

    /// Time when the game started. Used to compute game duration.
    #[serde(with = "instant")]
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,

    /// The elapsed time when the player solved the cube.
    solve_duration: Option<Duration>,

    /// List of checkpoints set by the player.
    checkpoints: Vec<CheckPoint>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER)
    }
}

impl Session {
    /// Create a [`Session`] object with a solved cube.
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            cube: CubeState::new_solved(),
            history: MoveHistory::new(),
            scramble: Vec::new(),
            started: false,
            solved: false,
            paused: false,
            start_time: Instant::now(),
            pause_duration: None,
            solve_duration: None,
            checkpoints: Vec::new(),
        }
    }

    /// Put back a solved cube and clear the game status. The timer is stopped.
    pub fn reset(&mut self) {
        self.cube = CubeState::new_solved();
        self.history.clear();
        self.scramble.clear();
        self.started = false;
        self.solved = false;
        self.paused = false;
        self.pause_duration = None;
        self.solve_duration = None;
        self.checkpoints.clear();
    }

    /// Start a new game: reset the cube, scramble it, and start the timer.
    pub fn scramble(&mut self, scrambler: &Scrambler) -> &[Move] {
        self.reset();
        self.scramble = scrambler.scramble(&mut self.cube);
        self.started = true;
        self.start_time = Instant::now();
        info!(
            "{}: new game scrambled with {} moves",
            self.player,
            self.scramble.len()
        );
        &self.scramble
    }

    /// Return the cube.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// Return a read-only copy of the cube.
    pub fn snapshot(&self) -> Snapshot {
        self.cube.snapshot()
    }

    /// Return the move history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Return the moves the player made since the scramble.
    pub fn moves(&self) -> &[Move] {
        self.history.moves()
    }

    /// Return the moves of the last scramble.
    pub fn scramble_moves(&self) -> &[Move] {
        &self.scramble
    }

    /// Whether the cube shows a single color on each face.
    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Play a move and add it to the history.
    ///
    /// # Errors
    ///
    /// [`SessionError::Paused`] while the game is paused.
    pub fn apply(&mut self, mv: Move) -> Result<(), SessionError> {
        if self.paused {
            return Err(SessionError::Paused);
        }
        self.cube.apply(mv);
        self.history.push(mv);
        debug!("Move {mv} ({} moves)", self.history.len());
        self.check_solved();
        Ok(())
    }

    /// Parse a move in notation form and play it.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidMove`] when the token is not a move, or [`SessionError::Paused`].
    /// In both cases the cube is not modified.
    pub fn apply_token(&mut self, token: &str) -> Result<Move, SessionError> {
        let mv: Move = token.parse()?;
        self.apply(mv)?;
        Ok(mv)
    }

    /// Undo the last move and return it, or None if there is nothing to undo or the game is
    /// paused.
    pub fn undo(&mut self) -> Option<Move> {
        if self.paused {
            return None;
        }
        let mv: Move = self.history.undo()?;
        self.cube.apply(mv.inverse());
        self.check_solved();
        Some(mv)
    }

    /// Redo the last undone move and return it, or None if there is nothing to redo or the
    /// game is paused.
    pub fn redo(&mut self) -> Option<Move> {
        if self.paused {
            return None;
        }
        let mv: Move = self.history.redo()?;
        self.cube.apply(mv);
        self.check_solved();
        Some(mv)
    }

    /// Mark the game as solved and stop the timer when the cube of a started game is solved.
    fn check_solved(&mut self) {
        if self.started && !self.solved && self.cube.is_solved() {
            self.solved = true;
            let duration: Duration = self.start_time.elapsed();
            self.solve_duration = Some(duration);
            info!(
                "{}: cube solved in {:.2}s and {} moves",
                self.player,
                duration.as_secs_f64(),
                self.history.len()
            );
        }
    }

    /// Return the number of checkpoints that the player created.
    pub fn checkpoints_len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Set a checkpoint.
    pub fn set_checkpoint(&mut self) {
        self.checkpoints.push(CheckPoint::new(self));
    }

    /// Revert back to the last checkpoint, which is removed. Return false if there is no
    /// checkpoint.
    pub fn undo_checkpoint(&mut self) -> bool {
        match self.checkpoints.pop() {
            Some(c) => {
                self.cube = c.cube;
                self.history = c.history;
                self.check_solved();
                true
            }
            None => false,
        }
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if self.paused || self.solved {
            return;
        }
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration.take() {
            self.start_time += self.start_time.elapsed().saturating_sub(d);
        }
        self.paused = false;
    }

    /// Return the game duration.
    ///
    /// The duration is zero before the scramble, and does not change after the cube is
    /// solved or while the game is paused.
    pub fn get_duration(&self) -> Duration {
        if !self.started {
            return Duration::ZERO;
        }
        match (self.solve_duration, self.pause_duration) {
            (Some(d), _) => d,
            (None, Some(d)) => d,
            (None, None) => self.start_time.elapsed(),
        }
    }

    /// Return the game duration in hours, minutes, and seconds
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.get_duration().as_secs();
        (duration / 3600, (duration % 3600) / 60, duration % 60)
    }
}
