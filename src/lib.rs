/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The board, its coordinates and pieces, and per-piece move generation.
mod board;

/// Command definitions for the inspection binary.
mod cli;

pub use board::*;
pub use cli::*;
