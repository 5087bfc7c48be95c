/*
net.rs

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

//! Render a cube as a flat text net.
//!
//! The up face is drawn above the front face, and the down face below it.
//! The left, front, right, and back faces are drawn side by side:
//!
//! ```text
//!       W W W
//!       W W W
//!       W W W
//! O O O G G G R R R B B B
//! O O O G G G R R R B B B
//! O O O G G G R R R B B B
//!       Y Y Y
//!       Y Y Y
//!       Y Y Y
//! ```

use std::fmt;

use super::face::{Color, Face};
use super::state::Snapshot;

/// Faces of the middle band, from left to right.
const BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// Indentation of the up and down faces: one face width.
const INDENT: &str = "      ";

fn row_to_string(row: &[Color; 3]) -> String {
    row.iter()
        .map(Color::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

impl Snapshot {
    /// Lines of the text net.
    pub fn net_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::with_capacity(9);

        for row in self.face(Face::Up).iter() {
            lines.push(format!("{INDENT}{}", row_to_string(row)));
        }

        let band: Vec<[[Color; 3]; 3]> = BAND.iter().map(|f| self.face(*f)).collect();
        for r in 0..3 {
            lines.push(
                band.iter()
                    .map(|grid| row_to_string(&grid[r]))
                    .collect::<Vec<String>>()
                    .join(" "),
            );
        }

        for row in self.face(Face::Down).iter() {
            lines.push(format!("{INDENT}{}", row_to_string(row)));
        }
        lines
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.net_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
