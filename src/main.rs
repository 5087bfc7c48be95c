/*
main.rs

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

use log::debug;
use std::io;
use std::process::ExitCode;

use cubik::application::CubikApplication;
use cubik::cli_options::{self, Mode};

fn main() -> ExitCode {
    let args: cli_options::Args = match cli_options::parse() {
        Mode::Done(code) => return ExitCode::from(code),
        Mode::Play(args) => args,
    };

    let mut app: CubikApplication =
        CubikApplication::new(&args.player, args.scrambler(), args.data_dir());
    app.startup();

    let stdin = io::stdin();
    let result: io::Result<()> = app.run(stdin.lock(), &mut io::stdout());
    app.shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!("Error reading the input: {error}");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
