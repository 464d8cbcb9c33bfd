/*
common/mod.rs

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

//! Helpers shared by the integration tests.

use std::collections::BTreeSet;
use std::sync::Arc;

use vanishing_cube::{Cube, Dictionary, Difficulty, GameSession, Lattice, Puzzle, WordOracle};

/// Layer 0 of the 3x3x3 test cube, the other layers are filled with X:
///
/// ```text
/// C A T
/// S O D
/// X X X
/// ```
pub const CAT_CUBE: &str = "CAT SOD XXX  XXX XXX XXX  XXX XXX XXX";

/// Build a puzzle around the given letters, with no embedded words.
pub fn puzzle_from(size: usize, letters: &str) -> Puzzle {
    Puzzle {
        cube: Cube::from_characters(size, letters).expect("wrong number of letters"),
        difficulty: Difficulty::Easy,
        embedded_words: BTreeSet::new(),
        placements: Vec::new(),
    }
}

/// Start a session on the given letters with a dictionary made of the given words.
pub fn session_with(size: usize, letters: &str, words: &[&str]) -> GameSession {
    let oracle: Arc<dyn WordOracle> = Arc::new(Dictionary::from_words(words));
    GameSession::new(puzzle_from(size, letters), oracle)
}

/// Verify that the cells form a chain of distinct, adjacent cells.
pub fn assert_valid_chain(lattice: &Lattice, cells: &[usize]) {
    let distinct: BTreeSet<&usize> = cells.iter().collect();
    assert_eq!(distinct.len(), cells.len(), "duplicated cells in {cells:?}");
    for pair in cells.windows(2) {
        assert!(
            lattice.is_adjacent(pair[0], pair[1]),
            "cells {} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}
