/*
game.rs

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

//! Save and restore the game in progress when quitting or starting Cubik.
//!
//! When a game is in progress and the player quits Cubik, the game status is saved in the
//! `savegame.json` file.
//! When Cubik is restarted, the saved game is loaded, and the player can continue solving the
//! cube.
//!
//! The saved object is a serialization of the [`Session`] object in JSON format by using
//! [`serde`]. Moves are saved in notation form (`"R'"`).

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::remove_file;
use std::path::PathBuf;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::config::SAVEGAME_FILE;
use crate::cube::moves::Move;
use crate::session::Session;

/// Serialize and deserialize [`std::time::Instant`] objects with Serde.
pub mod instant {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
    use std::time::{Duration, Instant};

    /// Serialize an [`std::time::Instant`] object as the time elapsed since then.
    pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        instant.elapsed().serialize(serializer)
    }

    /// Deserialize an [`std::time::Instant`] object from the time elapsed since then.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
    where
        D: Deserializer<'de>,
    {
        let duration: Duration = Duration::deserialize(deserializer)?;
        Instant::now()
            .checked_sub(duration)
            .ok_or_else(|| Error::custom("Cannot compute the saved game duration"))
    }
}

/// Serialize a [`Move`] object in notation form.
impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize a [`Move`] object from its notation form.
impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MoveVisitor;

        impl Visitor<'_> for MoveVisitor {
            type Value = Move;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a move such as `U` or `U'`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Move, E>
            where
                E: de::Error,
            {
                value
                    .parse::<Move>()
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(MoveVisitor)
    }
}

/// Object to save and restore a game in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(SAVEGAME_FILE);
        debug!("Save game file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Session`] object for the saved game.
    ///
    /// Return the [`Session`] object or None if there is no saved game.
    pub fn get_game(&self) -> Result<Option<Session>, Box<dyn Error>> {
        super::read_json(&self.save_file)
    }

    /// Save the provided [`Session`] object.
    pub fn save_game(&self, session: &Session) -> Result<(), Box<dyn Error>> {
        super::write_json(&self.save_file, session)
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
