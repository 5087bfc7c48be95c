/*
lib.rs

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

//! Cubik models a 3x3x3 cube as a discrete state.
//!
//! The [`cube`] module holds the cube itself: its cubies, the quarter turns, and the validity
//! queries. It knows nothing about players or files.
//! The other modules build a game around it: [`session::Session`] tracks the player, the
//! timer, and the moves; the [`saver`] module keeps the game in progress, the high scores,
//! and the game records on disk; [`application`] drives a session from a terminal.

pub mod application;
pub mod checkpoint;
pub mod cli_options;
pub mod config;
pub mod cube;
pub mod highscores;
pub mod move_history;
pub mod saver;
pub mod session;
