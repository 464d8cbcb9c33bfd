/*
lib.rs

Copyright 2025 Hervé Quatremain

This file is part of Vanishing Cube.

Vanishing Cube is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Vanishing Cube is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Vanishing Cube. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Vanishing Cube: a word-finding puzzle played on a cube of letters.
//!
//! The letters fill an N×N×N lattice. The player chains adjacent cells (in all three dimensions)
//! to spell words. Every letter can be part of three words only; after that it vanishes from
//! play, so the cube changes as the game goes on.
//!
//! The crate is organized as follows:
//!
//! * [`lattice`] defines the cell indexes and which cells are adjacent.
//! * [`cube`] stores the letters and their usage counters.
//! * [`dictionary`] answers whether a string is a word, or the start of a word.
//! * [`generator`] builds random puzzles with some words already embedded.
//! * [`selection`] processes the player's taps and commits the words.
//! * [`scoring`] computes word scores.
//! * [`session`] ties a puzzle, a dictionary, and a selection together for a game.

pub mod cube;
pub mod dictionary;
pub mod generator;
pub mod lattice;
pub mod scoring;
pub mod selection;
pub mod session;

pub use cube::{Cube, CubeError, Letter, MAX_USAGE};
pub use dictionary::{Dictionary, WordOracle};
pub use generator::difficulty::Difficulty;
pub use generator::puzzle::{Puzzle, PuzzleGenerator};
pub use lattice::{Lattice, LatticeError};
pub use selection::{SelectionEngine, SelectionState, TapOutcome};
pub use session::{GameSession, SessionSummary};
