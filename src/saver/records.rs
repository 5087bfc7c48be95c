/*
records.rs

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

//! Keep a record of the solved games.
//!
//! Every solved game is appended to the `<player>_cube_games.txt` file of the player, as a
//! block of text:
//!
//! ```text
//! Player: ann
//! Solve time: 83.27 seconds
//! Moves: R, U, R', U'
//! Date: 2025-06-01 18:42:07
//! ---
//! ```

use chrono::{DateTime, Local};
use log::debug;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::RECORDS_FILE_SUFFIX;
use crate::cube::moves::{self, Move};
use crate::session::Session;

/// Record of a solved game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub player: String,
    pub time: Duration,
    pub moves: Vec<Move>,
    pub when: DateTime<Local>,
}

impl GameRecord {
    /// Create a [`GameRecord`] object for the game of the provided [`Session`] object.
    pub fn new(session: &Session) -> Self {
        Self {
            player: session.player.clone(),
            time: session.get_duration(),
            moves: session.moves().to_vec(),
            when: Local::now(),
        }
    }

    /// Return the text block written to the record file.
    pub fn to_text(&self) -> String {
        format!(
            "Player: {}\nSolve time: {:.2} seconds\nMoves: {}\nDate: {}\n---\n",
            self.player,
            self.time.as_secs_f64(),
            moves::format_sequence(&self.moves, ", "),
            self.when.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Object to append game records to the players' record files.
pub struct SaverRecords {
    /// Directory of the record files.
    data_dir: PathBuf,
}

impl SaverRecords {
    /// Create a [`SaverRecords`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the record files are stored.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Return the path to the record file of the given player.
    ///
    /// Path separators in the name are replaced by underscores.
    pub fn record_file(&self, player: &str) -> PathBuf {
        let name: String = player
            .chars()
            .map(|c| if std::path::is_separator(c) { '_' } else { c })
            .collect();
        self.data_dir.join(format!("{name}{RECORDS_FILE_SUFFIX}"))
    }

    /// Append the record to the file of its player.
    pub fn append(&self, record: &GameRecord) -> Result<PathBuf, Box<dyn Error>> {
        let path: PathBuf = self.record_file(&record.player);
        debug!("Appending the game record to {path:?}");
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(record.to_text().as_bytes())?;
        writer.flush()?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::face::Face;
    use crate::saver::TestDir;
    use chrono::TimeZone;

    fn record() -> GameRecord {
        GameRecord {
            player: "erin".to_string(),
            time: Duration::from_millis(83_270),
            moves: vec![
                Move::cw(Face::Right),
                Move::cw(Face::Up),
                Move::ccw(Face::Right),
                Move::ccw(Face::Up),
            ],
            when: Local.with_ymd_and_hms(2025, 6, 1, 18, 42, 7).unwrap(),
        }
    }

    #[test]
    fn text_block() {
        assert_eq!(
            record().to_text(),
            "Player: erin\nSolve time: 83.27 seconds\nMoves: R, U, R', U'\nDate: 2025-06-01 18:42:07\n---\n"
        );
    }

    #[test]
    fn record_file_name() {
        let saver = SaverRecords::new(PathBuf::from("/data"));
        assert_eq!(
            saver.record_file("erin"),
            PathBuf::from("/data/erin_cube_games.txt")
        );
        assert_eq!(
            saver.record_file("../erin"),
            PathBuf::from("/data/.._erin_cube_games.txt")
        );
    }

    #[test]
    fn records_are_appended() {
        let dir = TestDir::new("records");
        let saver = SaverRecords::new(dir.0.clone());
        saver.append(&record()).unwrap();
        let path: PathBuf = saver.append(&record()).unwrap();

        let content: String = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, record().to_text().repeat(2));
    }
}
