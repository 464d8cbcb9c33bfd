/*
grid.rs

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

//! Letter grid used while a puzzle is being generated.
//!
//! Cells start unfilled. Embedded words write their characters into the grid, and the remaining
//! unfilled cells receive random letters when the grid is turned into a [`Cube`].
//! Unfilled cells are `None`, which cannot be confused with any letter.

use log::debug;
use rand::Rng;

use crate::cube::{Cube, Letter};
use crate::lattice::Lattice;

/// Letters used to fill the cells that no embedded word uses.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Flat grid of optional characters, indexed by lattice index.
#[derive(Debug, Clone)]
pub struct LetterGrid {
    lattice: Lattice,
    cells: Vec<Option<char>>,
}

impl LetterGrid {
    /// Create a [`LetterGrid`] object with all the cells unfilled.
    pub fn new(lattice: Lattice) -> Self {
        Self {
            lattice,
            cells: vec![None; lattice.num_cells()],
        }
    }

    /// Return the grid geometry.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Return the character of the cell, or None if the cell is unfilled or does not exist.
    pub fn get(&self, cell: usize) -> Option<char> {
        self.cells.get(cell).copied().flatten()
    }

    /// Whether the cell can hold the given character: it is unfilled or already holds it.
    pub fn accepts(&self, cell: usize, character: char) -> bool {
        match self.cells.get(cell) {
            Some(Some(c)) => *c == character,
            Some(None) => true,
            None => false,
        }
    }

    /// Write a character in the cell.
    pub fn set(&mut self, cell: usize, character: char) {
        if let Some(c) = self.cells.get_mut(cell) {
            *c = Some(character);
        }
    }

    /// Return the number of cells still unfilled.
    pub fn num_unfilled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fill the unfilled cells with random letters and build the [`Cube`] object.
    pub fn into_cube<R: Rng + ?Sized>(self, rng: &mut R) -> Cube {
        debug!(
            "Filling {} of {} cells with random letters",
            self.num_unfilled(),
            self.cells.len()
        );
        let letters: Vec<Letter> = self
            .cells
            .into_iter()
            .enumerate()
            .map(|(id, c)| {
                let character: char =
                    c.unwrap_or_else(|| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]));
                Letter::new(id, character)
            })
            .collect();
        Cube::from_letters(self.lattice, letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn accepts_unfilled_or_same_character() {
        let mut grid = LetterGrid::new(Lattice::new(2));
        assert!(grid.accepts(0, 'A'));
        grid.set(0, 'T');
        assert!(grid.accepts(0, 'T'));
        assert!(!grid.accepts(0, 'A'));
        assert!(!grid.accepts(8, 'T'));
        assert_eq!(grid.get(0), Some('T'));
        assert_eq!(grid.get(1), None);
        assert_eq!(grid.num_unfilled(), 7);
    }

    #[test]
    fn into_cube_keeps_written_letters() {
        let mut grid = LetterGrid::new(Lattice::new(3));
        grid.set(0, 'C');
        grid.set(1, 'A');
        grid.set(2, 'T');
        let cube: Cube = grid.into_cube(&mut StdRng::seed_from_u64(7));
        assert_eq!(cube.len(), 27);
        assert_eq!(cube.word_along(&[0, 1, 2]), "CAT");
        for (i, letter) in cube.letters().iter().enumerate() {
            assert_eq!(letter.id, i);
            assert_eq!(letter.usage_count(), 0);
            assert!(letter.character.is_ascii_uppercase());
        }
    }
}
