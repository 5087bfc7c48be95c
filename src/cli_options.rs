/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Cubik starts an interactive game on the terminal for the default player.
//!
//! # Examples
//!
//! Play as `ann`, with 25 moves scrambles:
//!
//! ```text
//! $ cubik --player ann --scramble 25
//! ```
//!
//! Apply a sequence of moves to a solved cube and display the result:
//!
//! ```text
//! $ cubik --moves "R U R' U'"
//!       W W O
//!       W W G
//!       W W G
//! B O O G G Y R R W B R R
//! O O O G G W B R R B B B
//! O O O G G G W R R B B B
//!       Y Y R
//!       Y Y Y
//!       Y Y Y
//! Solved: no
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{self, COPYRIGHT_NOTICE, DEFAULT_PLAYER, DEFAULT_SCRAMBLE_MOVES};
use crate::cube::moves::{self, Move};
use crate::cube::scrambler::Scrambler;
use crate::cube::state::CubeState;

/// Play with a 3x3x3 cube in the terminal.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Name of the player
    #[arg(short, long, default_value = DEFAULT_PLAYER)]
    pub player: String,

    /// Number of random moves in a scramble
    #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_MOVES)]
    pub scramble: usize,

    /// Seed for reproducible scrambles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Apply the sequence of moves to a solved cube, display the cube, and exit
    #[arg(short, long)]
    pub moves: Option<String>,

    /// Directory for the saved game, the high scores, and the game records
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Return the scramble parameters.
    pub fn scrambler(&self) -> Scrambler {
        let scrambler = Scrambler::new(self.scramble);
        match self.seed {
            Some(seed) => scrambler.with_seed(seed),
            None => scrambler,
        }
    }

    /// Return the data directory.
    pub fn data_dir(&self) -> PathBuf {
        config::data_dir(self.data_dir.clone())
    }
}

/// What to do after parsing the options.
#[derive(Debug)]
pub enum Mode {
    /// The options were fully processed. Exit with the given code.
    Done(u8),

    /// Start the interactive game.
    Play(Args),
}

/// Parse and process command-line options.
pub fn parse() -> Mode {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Options: {args:?}");

    match &args.moves {
        Some(sequence) => Mode::Done(show_sequence(sequence, &mut io::stdout())),
        None => Mode::Play(args),
    }
}

/// Apply the sequence of moves to a solved cube, and print the cube and whether it is solved.
///
/// Return the exit code: 0 on success, 1 if the sequence is invalid.
pub fn show_sequence<W: Write>(sequence: &str, output: &mut W) -> u8 {
    let moves: Vec<Move> = match moves::parse_sequence(sequence) {
        Ok(m) => m,
        Err(error) => {
            eprintln!("Error: {error}");
            return 1;
        }
    };
    let mut cube = CubeState::new_solved();
    cube.apply_all(moves.iter().copied());

    let solved: &str = if cube.is_solved() { "yes" } else { "no" };
    match write!(output, "{cube}Solved: {solved}\n") {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    }
}
