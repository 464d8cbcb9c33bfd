/*
word_path.rs

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

//! Find a random cell path that can spell a word.
//!
//! The search starts from a random free cell and goes deep first: at each step it tries the
//! neighbors of the last cell, in random order, that can hold the next character.
//! The first complete path is returned; it is neither the shortest nor the best one.
//! If no path exists from a starting cell, another random starting cell is tried, up to
//! [`MAX_START_ATTEMPTS`] times.

use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;
use std::time::Instant;

use super::grid::LetterGrid;
use super::path::Path;

/// Number of random starting cells tried for a word.
pub const MAX_START_ATTEMPTS: usize = 50;

// Max duration for trying to place a word. When a nearly full cube has many free cells that are
// not connected enough, the search could explore a lot of dead ends.
const MAX_TIME_SEC: u64 = 2;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum WordPathError {
    /// No path spells the word from the starting cell.
    NoPath,

    /// None of the starting cells led to a path.
    AttemptsExhausted,

    /// No path found before the timeout.
    DurationExceeded,
}

/// [`WordPath`] object.
pub struct WordPath<'a> {
    /// Characters already placed in the cube.
    grid: &'a LetterGrid,

    /// Cells used by the words already placed. These cells cannot be used again.
    committed: &'a HashSet<usize>,

    /// Number of iterations it took to find the last path.
    pub iteration: usize,

    /// Duration in seconds it took to find the last path.
    pub duration: f32,

    /// Time when the search started. Used to compute the [`WordPath::duration`].
    start: Instant,
}

impl<'a> WordPath<'a> {
    /// Create the object.
    pub fn new(grid: &'a LetterGrid, committed: &'a HashSet<usize>) -> Self {
        Self {
            grid,
            committed,
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Find and return a random path for the given word.
    ///
    /// # Errors
    ///
    /// The method returns an error if no path is found from [`MAX_START_ATTEMPTS`] random
    /// starting cells, or if it takes too long.
    pub fn find<R: Rng + ?Sized>(
        &mut self,
        word: &[char],
        rng: &mut R,
    ) -> Result<Path, WordPathError> {
        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let Some(first) = word.first() else {
            return Err(WordPathError::NoPath);
        };

        let free_cells: Vec<usize> = (0..self.grid.lattice().num_cells())
            .filter(|c| !self.committed.contains(c))
            .collect();
        if free_cells.len() < word.len() {
            debug!(
                "Only {} free cells for a {} letter word",
                free_cells.len(),
                word.len()
            );
            return Err(WordPathError::AttemptsExhausted);
        }

        let mut res: Result<Path, WordPathError> = Err(WordPathError::AttemptsExhausted);
        for attempt in 0..MAX_START_ATTEMPTS {
            let Some(&starting_cell) = free_cells.choose(rng) else {
                break;
            };
            if !self.grid.accepts(starting_cell, *first) {
                continue;
            }
            debug!("Attempt {attempt}: starting cell = {starting_cell}");

            let mut path: Path = Path::new(word.len());
            match self.find_path(starting_cell, word, &mut path, rng) {
                Ok(()) => {
                    res = Ok(path);
                    break;
                }
                Err(WordPathError::DurationExceeded) => {
                    res = Err(WordPathError::DurationExceeded);
                    break;
                }
                Err(_) => (),
            }
        }

        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        res
    }

    /// Whether the cell can hold the given character for the word being placed.
    fn accepts(&self, cell: usize, character: char) -> bool {
        !self.committed.contains(&cell) && self.grid.accepts(cell, character)
    }

    /// Recursively find a path.
    fn find_path<R: Rng + ?Sized>(
        &mut self,
        current_cell: usize,
        word: &[char],
        path: &mut Path,
        rng: &mut R,
    ) -> Result<(), WordPathError> {
        path.push(current_cell);
        if path.len() == word.len() {
            return Ok(());
        }

        self.iteration += 1;
        if self.start.elapsed().as_secs() >= MAX_TIME_SEC {
            return Err(WordPathError::DurationExceeded);
        }

        // Randomize the order in which to test the neighbors
        let next_char: char = word[path.len()];
        let mut cells: Vec<usize> = self
            .grid
            .lattice()
            .neighbors(current_cell)
            .into_iter()
            .filter(|&cell| !path.contains(cell) && self.accepts(cell, next_char))
            .collect();
        cells.shuffle(rng);

        for cell in cells {
            match self.find_path(cell, word, path, rng) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if e == WordPathError::DurationExceeded {
                        return Err(e);
                    }
                }
            }
        }
        path.pop();
        Err(WordPathError::NoPath)
    }
}
