/*
config.rs

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

//! Build and runtime configuration.

use std::env;
use std::path::PathBuf;

/// Text displayed by `--version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (C) 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Player name when none is given.
pub const DEFAULT_PLAYER: &str = "player";

/// Number of random moves in a scramble.
pub const DEFAULT_SCRAMBLE_MOVES: usize = 30;

/// Name of the file that stores the game in progress.
pub const SAVEGAME_FILE: &str = "savegame.json";

/// Name of the file that stores the high scores.
pub const HIGHSCORES_FILE: &str = "highscores.json";

/// Suffix of the per-player game record file (`<player>_cube_games.txt`).
pub const RECORDS_FILE_SUFFIX: &str = "_cube_games.txt";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "CUBIK_DATA_DIR";

/// Directory where the game, the high scores, and the records are saved.
///
/// The command-line option comes first, then the [`DATA_DIR_ENV`] environment variable, and
/// finally the current directory.
pub fn data_dir(option: Option<PathBuf>) -> PathBuf {
    option
        .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
