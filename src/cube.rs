/*
cube.rs

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

//! Discrete state of a 3x3x3 cube and the quarter turns applied to it.
//!
//! The cube is modeled as 27 cubies laid out on a grid whose coordinates go from -1 to 1 on each
//! axis: `x` from the left face to the right face, `y` from the down face to the up face, and `z`
//! from the back face to the front face.
//! Each cubie carries six facelet slots, one per [`face::Face`] direction, which hold the
//! [`face::Color`] showing in that direction.
//!
//! * [`state::CubeState`] owns the 27 cubies and applies the moves.
//! * [`moves::Move`] is a face turned clockwise or counter-clockwise.
//!   Clockwise is as seen when looking at the turned face from outside the cube.
//! * [`move_table`] derives the permutation of every quarter turn from the geometry.
//! * [`state::Snapshot`] is the read-only copy that renderers consume.
//!   [`net`] renders it as a flat text net.
//! * [`scrambler::Scrambler`] draws uniformly random moves.

pub mod face;
pub mod move_table;
pub mod moves;
pub mod net;
pub mod scrambler;
pub mod state;
