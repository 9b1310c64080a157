/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::{Board, Coord, FEN_STARTPOS};

/// A position-inspection command.
#[derive(Debug, Clone, Parser)]
#[command(about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a visual representation of a position.
    #[command(alias = "d")]
    Display {
        /// The position to display, as (the placement field of) a FEN string.
        #[arg(default_value = FEN_STARTPOS)]
        fen: String,
    },

    /// Show the destinations available to the piece on a square.
    Moves {
        /// The square whose occupant to inspect, like "b1".
        square: Coord,

        /// The position to inspect, as (the placement field of) a FEN string.
        #[arg(short, long, default_value = FEN_STARTPOS)]
        fen: String,

        /// If set, destinations will be sorted in alphabetical order.
        ///
        /// By default, moves are generated in no particular order.
        #[arg(short, long, default_value = "false")]
        sort: bool,
    },
}

impl Cli {
    /// Executes this command, printing its result to stdout.
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Display { fen } => {
                let board = Board::from_fen(&fen)?;
                println!("{board}");
            }

            Command::Moves { square, fen, sort } => {
                let board = Board::from_fen(&fen)?;

                let Some(piece) = board.get(square) else {
                    bail!("No piece on {square}");
                };

                let mut destinations = piece
                    .moves_from(square, &board)
                    .iter()
                    .map(|mv| mv.to().to_string())
                    .collect::<Vec<_>>();

                if sort {
                    destinations.sort();
                }

                println!(
                    "{} {} on {square}: {}",
                    piece.color(),
                    piece.kind(),
                    destinations.join(" ")
                );
            }
        }

        Ok(())
    }
}
