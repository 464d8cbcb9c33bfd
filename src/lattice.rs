/*
lattice.rs

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

//! Geometry of the cube lattice.
//!
//! Cells of an N×N×N cube are identified by their linear index `z*N² + y*N + x`.
//! That index is the stable cell identifier used everywhere else in the crate: letter IDs,
//! selection paths, and serialized puzzles all refer to cells by index.
//!
//! Two cells are adjacent when they differ by at most one step along every axis (the 3D Moore
//! neighborhood), which gives up to 26 neighbors for an inner cell.
//! The puzzle generator and the selection engine both rely on [`Lattice::neighbors`] and
//! [`Lattice::is_adjacent`], so the two never disagree on what a valid chain is.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Coordinates of a cell in the lattice.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum LatticeError {
    /// A lattice has at least one cell.
    ZeroSize,

    /// The number of cells does not fit in a `usize`.
    TooLarge(usize),
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LatticeError::ZeroSize => write!(f, "the cube size must be at least 1"),
            LatticeError::TooLarge(size) => write!(f, "the cube size {size} is too large"),
        }
    }
}

impl Error for LatticeError {}

/// Cube lattice of a given size.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(try_from = "RawLattice")]
pub struct Lattice {
    /// Number of cells along each axis.
    size: usize,
}

/// Lattice as read from a serialized puzzle, before validation.
#[derive(Deserialize)]
struct RawLattice {
    size: usize,
}

impl TryFrom<RawLattice> for Lattice {
    type Error = LatticeError;

    fn try_from(raw: RawLattice) -> Result<Self, Self::Error> {
        Lattice::checked(raw.size)
    }
}

impl Lattice {
    /// Create a [`Lattice`] object.
    ///
    /// A lattice has at least one cell, so a size of zero is raised to one.
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    /// Create a [`Lattice`] object from an untrusted size.
    pub fn checked(size: usize) -> Result<Self, LatticeError> {
        if size == 0 {
            return Err(LatticeError::ZeroSize);
        }
        if size.checked_pow(3).is_none() {
            return Err(LatticeError::TooLarge(size));
        }
        Ok(Self { size })
    }

    /// Return the number of cells along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the total number of cells (`size³`).
    pub fn num_cells(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Whether the given index identifies a cell of the lattice.
    pub fn contains(&self, index: usize) -> bool {
        index < self.num_cells()
    }

    /// Return the coordinates of the cell with the given index.
    ///
    /// The index is not verified. Use [`Lattice::contains`] first for untrusted input.
    pub fn point(&self, index: usize) -> Point {
        Point {
            x: index % self.size,
            y: (index / self.size) % self.size,
            z: index / (self.size * self.size),
        }
    }

    /// Return the index of the cell at the given coordinates, or None if the coordinates are
    /// outside the lattice.
    pub fn index(&self, point: Point) -> Option<usize> {
        if point.x >= self.size || point.y >= self.size || point.z >= self.size {
            return None;
        }
        Some(point.z * self.size * self.size + point.y * self.size + point.x)
    }

    /// Return the neighbors of the given cell, in ascending index order.
    ///
    /// An index outside the lattice has no neighbors.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let mut neighbors: Vec<usize> = Vec::with_capacity(26);
        if !self.contains(index) {
            return neighbors;
        }
        let p: Point = self.point(index);

        for dz in -1..=1_isize {
            for dy in -1..=1_isize {
                for dx in -1..=1_isize {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    if let (Some(x), Some(y), Some(z)) = (
                        p.x.checked_add_signed(dx),
                        p.y.checked_add_signed(dy),
                        p.z.checked_add_signed(dz),
                    ) && let Some(n) = self.index(Point { x, y, z })
                    {
                        neighbors.push(n);
                    }
                }
            }
        }
        neighbors
    }

    /// Whether the two cells are distinct neighbors.
    pub fn is_adjacent(&self, index1: usize, index2: usize) -> bool {
        if index1 == index2 || !self.contains(index1) || !self.contains(index2) {
            return false;
        }
        let p1: Point = self.point(index1);
        let p2: Point = self.point(index2);
        p1.x.abs_diff(p2.x) <= 1 && p1.y.abs_diff(p2.y) <= 1 && p1.z.abs_diff(p2.z) <= 1
    }

    /// Return the position of the cell in a coordinate system centered on the middle of the cube.
    ///
    /// Renderers use this position to lay out the cube around the origin.
    pub fn centered_position(&self, index: usize) -> (f32, f32, f32) {
        let p: Point = self.point(index);
        let offset: f32 = (self.size - 1) as f32 / 2.0;
        (
            p.x as f32 - offset,
            p.y as f32 - offset,
            p.z as f32 - offset,
        )
    }
}
