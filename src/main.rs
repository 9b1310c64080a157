/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::Parser;
use hopper::Cli;

fn main() {
    if let Err(e) = Cli::parse().run() {
        eprintln!("{} encountered an error: {e}", env!("CARGO_PKG_NAME"));
        std::process::exit(1);
    }
}
