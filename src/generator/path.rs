/*
path.rs

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

//! Chain of cells in the cube lattice.
//!
//! The same structure holds the cells of a word being embedded by the generator and the cells
//! that the player is selecting.
//! A cell appears at most once in a path.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<usize>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<usize>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl From<Vec<usize>> for Path {
    fn from(cells: Vec<usize>) -> Self {
        let mut path: Path = Path::new(cells.len());
        for cell in cells {
            if !path.contains(cell) {
                path.push(cell);
            }
        }
        path
    }
}

impl From<Path> for Vec<usize> {
    fn from(path: Path) -> Self {
        path.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    ///
    /// Callers verify with [`Path::contains`] that the cell is not already in the path.
    pub fn push(&mut self, cell: usize) {
        debug_assert!(!self.visited.contains(&cell));
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) {
        if let Some(c) = self.path.pop() {
            self.visited.remove(&c);
        }
    }

    /// Keep the first `len` cells and drop the others.
    pub fn truncate(&mut self, len: usize) {
        while self.path.len() > len {
            self.pop();
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: usize) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the cells in path order.
    pub fn get(&self) -> &[usize] {
        &self.path
    }

    /// Return the position of the given cell in the path.
    pub fn position(&self, cell: usize) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        self.path.iter().position(|c| *c == cell)
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<usize> {
        self.path.last().copied()
    }
}
