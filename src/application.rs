/*
application.rs

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

//! Terminal front-end.
//!
//! The application reads lines from an input stream and writes the cube and the messages to an
//! output stream. Each line holds one or more whitespace-separated tokens: moves in notation
//! form (`R`, `U'`) or commands (see [`Command`]).
//! When a token is not understood, an error is displayed and the rest of the line is skipped.
//!
//! On startup the game saved by a previous run is restored, and on shutdown the game in progress
//! is saved. Solved games are added to the player's record file and high scores.

use chrono::{DateTime, Local};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::cube::moves::{self, InvalidMove, Move};
use crate::cube::scrambler::Scrambler;
use crate::highscores::HighScores;
use crate::saver::game::SaverGame;
use crate::saver::highscores::SaverHighScores;
use crate::saver::records::{GameRecord, SaverRecords};
use crate::session::{Session, SessionError};

const HELP: &str = "Moves: U D L R F B, followed by ' for a counter-clockwise turn (R U R' U')
Commands:
  scramble    scramble the cube and start the timer
  reset       put back a solved cube
  undo, redo  undo or redo the last move
  checkpoint  save the current position
  back        revert to the last checkpoint
  pause       pause the timer
  resume      resume the timer
  show        display the cube
  status      display the game status
  scores      display your high scores
  help        display this help
  quit        save the game in progress and quit";

/// Token read from the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Scramble,
    Reset,
    Undo,
    Redo,
    Checkpoint,
    Back,
    Pause,
    Resume,
    Show,
    Status,
    Scores,
    Help,
    Quit,
}

impl Command {
    /// Whether the command can modify the cube.
    fn modifies_cube(self) -> bool {
        matches!(
            self,
            Command::Move(_)
                | Command::Scramble
                | Command::Reset
                | Command::Undo
                | Command::Redo
                | Command::Back
        )
    }
}

impl FromStr for Command {
    type Err = InvalidMove;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let command: Command = match token.to_ascii_lowercase().as_str() {
            "scramble" => Command::Scramble,
            "reset" => Command::Reset,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "checkpoint" => Command::Checkpoint,
            "back" => Command::Back,
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "show" => Command::Show,
            "status" => Command::Status,
            "scores" => Command::Scores,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Move(token.parse()?),
        };
        Ok(command)
    }
}

/// Whether to keep reading the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal application.
pub struct CubikApplication {
    /// The game being played.
    session: Session,

    /// Scramble parameters.
    scrambler: Scrambler,

    /// High scores of all the players.
    highscores: HighScores,

    saver_game: SaverGame,
    saver_highscores: SaverHighScores,
    saver_records: SaverRecords,
}

impl CubikApplication {
    /// Create a [`CubikApplication`] object for the given player. Data files are read from and
    /// written to `data_dir`.
    pub fn new(player: &str, scrambler: Scrambler, data_dir: PathBuf) -> Self {
        Self {
            session: Session::new(player),
            scrambler,
            highscores: HighScores::new(),
            saver_game: SaverGame::new(data_dir.clone()),
            saver_highscores: SaverHighScores::new(data_dir.clone()),
            saver_records: SaverRecords::new(data_dir),
        }
    }

    /// Return the game being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Restore the saved game and the high scores.
    pub fn startup(&mut self) {
        debug!("Getting the saved game");
        match self.saver_game.get_game() {
            Ok(Some(session)) => {
                if session.player == self.session.player {
                    debug!("Restoring the game of {}", session.player);
                    self.session = session;
                } else {
                    debug!("The saved game belongs to {}, ignoring it", session.player);
                }
            }
            Ok(None) => debug!("No saved game"),
            Err(error) => {
                debug!("Error getting the saved game: {error}");
                // Delete the file in error for trying to resolve the issue for the next start
                self.saver_game.delete_save();
            }
        }

        debug!("Getting the high scores");
        match self.saver_highscores.get_highscores() {
            Ok(Some(highscores)) => self.highscores = highscores,
            Ok(None) => debug!("No high scores"),
            Err(error) => debug!("Error getting the high scores: {error}"),
        }
    }

    /// Save the game in progress, if any.
    pub fn shutdown(&self) {
        debug!("Saving the game");
        if self.session.started && !self.session.solved {
            if let Err(error) = self.saver_game.save_game(&self.session) {
                debug!("Error saving the game: {error}");
            }
        } else {
            self.saver_game.delete_save();
        }
    }

    /// Process the input until the end of the stream or the `quit` command.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "Hello {}! Type `help` for the commands.", self.session.player)?;
        writeln!(output, "{}", self.session.snapshot())?;
        for line in input.lines() {
            if self.process_line(&line?, output)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Process the tokens of a line. The cube is displayed if it changed.
    fn process_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        let mut modified: bool = false;
        let mut flow: Flow = Flow::Continue;

        for token in line.split_whitespace() {
            let command: Command = match token.parse() {
                Ok(c) => c,
                Err(error) => {
                    writeln!(output, "Error: {error}")?;
                    break;
                }
            };
            modified |= command.modifies_cube();
            if self.execute(command, output)? == Flow::Quit {
                flow = Flow::Quit;
                break;
            }
        }
        if modified {
            writeln!(output, "{}", self.session.snapshot())?;
        }
        Ok(flow)
    }

    /// Execute one command.
    fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<Flow> {
        let was_solved: bool = self.session.solved;

        match command {
            Command::Move(mv) => match self.session.apply(mv) {
                Ok(()) => (),
                Err(SessionError::Paused) => {
                    writeln!(output, "The game is paused, type `resume` to continue.")?
                }
                Err(error) => writeln!(output, "Error: {error}")?,
            },
            Command::Scramble => {
                let scramble: String =
                    moves::format_sequence(self.session.scramble(&self.scrambler), " ");
                writeln!(output, "Scramble: {scramble}")?;
            }
            Command::Reset => self.session.reset(),
            Command::Undo => {
                if self.session.undo().is_none() {
                    writeln!(output, "Nothing to undo.")?;
                }
            }
            Command::Redo => {
                if self.session.redo().is_none() {
                    writeln!(output, "Nothing to redo.")?;
                }
            }
            Command::Checkpoint => {
                self.session.set_checkpoint();
                writeln!(output, "Checkpoint {} saved.", self.session.checkpoints_len())?;
            }
            Command::Back => {
                if !self.session.undo_checkpoint() {
                    writeln!(output, "No checkpoint.")?;
                }
            }
            Command::Pause => self.session.pause(),
            Command::Resume => self.session.resume(),
            Command::Show => writeln!(output, "{}", self.session.snapshot())?,
            Command::Status => self.write_status(output)?,
            Command::Scores => self.write_scores(output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        if self.session.solved && !was_solved {
            self.on_solved(output)?;
        }
        Ok(Flow::Continue)
    }

    /// Record the solved game and update the high scores.
    fn on_solved<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        let record: GameRecord = GameRecord::new(&self.session);
        writeln!(
            output,
            "Solved in {:.2} seconds and {} moves!",
            record.time.as_secs_f64(),
            record.moves.len()
        )?;

        if let Err(error) = self.saver_records.append(&record) {
            debug!("Error saving the game record: {error}");
        }

        if let Some(rank) =
            self.highscores
                .add_score(&record.player, record.time, record.moves.len())
        {
            writeln!(output, "New high score, rank {rank}.")?;
            if let Err(error) = self.saver_highscores.save_highscores(&self.highscores) {
                debug!("Error saving the high scores: {error}");
            }
        }
        self.saver_game.delete_save();
        Ok(())
    }

    fn write_status<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let (h, m, s) = self.session.get_duration_hms();
        let state: &str = if !self.session.started {
            "not started"
        } else if self.session.solved {
            "solved"
        } else if self.session.paused {
            "paused"
        } else {
            "in progress"
        };
        writeln!(
            output,
            "Player: {}\nGame: {state}\nTime: {h:02}:{m:02}:{s:02}\nMoves: {}\nCheckpoints: {}",
            self.session.player,
            moves::format_sequence(self.session.moves(), " "),
            self.session.checkpoints_len()
        )
    }

    fn write_scores<W: Write>(&self, output: &mut W) -> io::Result<()> {
        match self.highscores.get_score(&self.session.player) {
            Some(top) => {
                for (i, score) in top.iter().enumerate() {
                    let when: DateTime<Local> = score.when.into();
                    writeln!(
                        output,
                        "{:2}. {:8.2}s {:4} moves  {}",
                        i + 1,
                        score.time.as_secs_f64(),
                        score.moves,
                        when.format("%Y-%m-%d %H:%M")
                    )?;
                }
                Ok(())
            }
            None => writeln!(output, "No high score yet."),
        }
    }
}
