/*
generator.rs

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

//! Generate random puzzles.
//!
//! A [`puzzle::Puzzle`] is a cube of letters in which some words from a curated list were
//! placed along chains of adjacent cells.
//! You create a puzzle by creating a [`puzzle::PuzzleGenerator`] object, with the dictionary
//! that validates the candidate words, and by using its [`puzzle::PuzzleGenerator::generate`]
//! method.
//!
//! The generator relies on the following modules:
//!
//! * [`difficulty`] maps a [`difficulty::Difficulty`] level to the cube size and to the length
//!   and number of words to embed.
//! * [`word_path`] searches for a random chain of free cells that can spell a word.
//!   Chains are stored in [`path::Path`] objects.
//! * [`grid`] holds the characters placed so far and fills the remaining cells.

pub mod difficulty;
pub mod grid;
pub mod path;
pub mod puzzle;
pub mod word_list;
pub mod word_path;
