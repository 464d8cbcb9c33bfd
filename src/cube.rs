/*
cube.rs

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

//! Letters and the cube that holds them.
//!
//! A [`Cube`] owns every [`Letter`] of a puzzle.
//! The layout (size and characters) never changes once the cube is built.
//! Only the usage counters change, when the selection engine commits a word: each letter of the
//! word is used once more, and a letter used [`MAX_USAGE`] times is removed from play.
//! A removed letter keeps its character, so that it can still be displayed, but it can no longer
//! be selected.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::lattice::{Lattice, LatticeError};

/// Number of committed words a letter can be part of before it vanishes.
pub const MAX_USAGE: u32 = 3;

/// Lettered cell of the cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Letter {
    /// Cell identifier, which is also the lattice index of the cell.
    pub id: usize,

    /// Uppercase character displayed in the cell.
    pub character: char,

    /// Number of committed words that used this letter.
    usage_count: u32,

    /// Whether the letter is part of the current selection.
    /// This is a display hint only; the selection engine owns the authoritative path.
    #[serde(skip)]
    pub is_selected: bool,
}

impl Letter {
    /// Create a [`Letter`] object that has not been used yet.
    pub fn new(id: usize, character: char) -> Self {
        Self {
            id,
            character: character.to_ascii_uppercase(),
            usage_count: 0,
            is_selected: false,
        }
    }

    /// Return the number of committed words that used this letter.
    pub fn usage_count(&self) -> u32 {
        self.usage_count
    }

    /// Whether the letter vanished from play.
    pub fn is_removed(&self) -> bool {
        self.usage_count >= MAX_USAGE
    }

    /// Return how many more words can use this letter before it vanishes.
    pub fn remaining_uses(&self) -> u32 {
        MAX_USAGE.saturating_sub(self.usage_count)
    }
}

/// Type of errors raised when a cube is read from untrusted data.
#[derive(Debug, PartialEq)]
pub enum CubeError {
    /// The cube size is not valid.
    Lattice(LatticeError),

    /// The number of letters is not `size³`.
    LetterCount { expected: usize, found: usize },

    /// The letter at the given position does not carry that position as its ID.
    LetterId { index: usize, id: usize },

    /// The letter is not an uppercase A-Z character.
    Character { id: usize, character: char },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CubeError::Lattice(e) => write!(f, "{e}"),
            CubeError::LetterCount { expected, found } => {
                write!(f, "expected {expected} letters, found {found}")
            }
            CubeError::LetterId { index, id } => {
                write!(f, "letter at position {index} has ID {id}")
            }
            CubeError::Character { id, character } => {
                write!(f, "letter {id} is not an A-Z character: {character:?}")
            }
        }
    }
}

impl Error for CubeError {}

impl From<LatticeError> for CubeError {
    fn from(e: LatticeError) -> Self {
        CubeError::Lattice(e)
    }
}

/// Cube of letters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawCube")]
pub struct Cube {
    /// Cube geometry.
    #[serde(flatten)]
    lattice: Lattice,

    /// Letters indexed by their cell ID.
    letters: Vec<Letter>,
}

/// Cube as read from a serialized puzzle, before validation.
#[derive(Deserialize)]
struct RawCube {
    size: usize,
    letters: Vec<Letter>,
}

impl TryFrom<RawCube> for Cube {
    type Error = CubeError;

    fn try_from(raw: RawCube) -> Result<Self, Self::Error> {
        let lattice: Lattice = Lattice::checked(raw.size)?;
        if raw.letters.len() != lattice.num_cells() {
            return Err(CubeError::LetterCount {
                expected: lattice.num_cells(),
                found: raw.letters.len(),
            });
        }
        for (index, letter) in raw.letters.iter().enumerate() {
            if letter.id != index {
                return Err(CubeError::LetterId {
                    index,
                    id: letter.id,
                });
            }
            if !letter.character.is_ascii_uppercase() {
                return Err(CubeError::Character {
                    id: letter.id,
                    character: letter.character,
                });
            }
        }
        Ok(Self {
            lattice,
            letters: raw.letters,
        })
    }
}

impl Cube {
    /// Create a [`Cube`] object from letters already ordered by cell ID.
    pub(crate) fn from_letters(lattice: Lattice, letters: Vec<Letter>) -> Self {
        debug_assert_eq!(letters.len(), lattice.num_cells());
        Self { lattice, letters }
    }

    /// Build a cube from its characters, given in cell ID order.
    ///
    /// Whitespace is ignored so that layers can be written on separate lines.
    /// Return None if the number of characters is not `size³`, or if a character is not an A-Z
    /// letter (either case).
    pub fn from_characters(size: usize, characters: &str) -> Option<Self> {
        let lattice: Lattice = Lattice::new(size);
        let chars: Vec<char> = characters.chars().filter(|c| !c.is_whitespace()).collect();
        if !chars.iter().all(char::is_ascii_alphabetic) {
            return None;
        }
        let letters: Vec<Letter> = chars
            .into_iter()
            .enumerate()
            .map(|(id, c)| Letter::new(id, c))
            .collect();
        if letters.len() != lattice.num_cells() {
            return None;
        }
        Some(Self { lattice, letters })
    }

    /// Return the cube geometry.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Return the number of cells along each axis.
    pub fn size(&self) -> usize {
        self.lattice.size()
    }

    /// Return the number of letters (`size³`).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the cube has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Return all the letters, ordered by cell ID.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Return the letter of the given cell, or None if the cell does not exist.
    pub fn letter(&self, id: usize) -> Option<&Letter> {
        self.letters.get(id)
    }

    /// Return the character of the given cell.
    pub fn character(&self, id: usize) -> Option<char> {
        self.letters.get(id).map(|l| l.character)
    }

    /// Whether the cell exists and its letter is still in play.
    pub fn is_selectable(&self, id: usize) -> bool {
        self.letters.get(id).is_some_and(|l| !l.is_removed())
    }

    /// Return the neighbors of the given cell, whether they are removed or not.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        self.lattice.neighbors(id)
    }

    /// Return the centered position of the given cell, for rendering.
    pub fn position(&self, id: usize) -> (f32, f32, f32) {
        self.lattice.centered_position(id)
    }

    /// Return the uppercase word spelled by the letters of the given cells.
    ///
    /// Each cell contributes exactly one character.
    pub fn word_along(&self, cells: &[usize]) -> String {
        cells
            .iter()
            .filter_map(|id| self.character(*id))
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    /// Increment the usage counter of the given letter.
    ///
    /// Return `true` if the letter vanished because of this use.
    pub(crate) fn use_letter(&mut self, id: usize) -> bool {
        match self.letters.get_mut(id) {
            Some(letter) => {
                let was_removed: bool = letter.is_removed();
                letter.usage_count += 1;
                !was_removed && letter.is_removed()
            }
            None => false,
        }
    }

    /// Update the selection hint of every letter from the given path.
    pub(crate) fn mark_selection(&mut self, cells: &[usize]) {
        for letter in self.letters.iter_mut() {
            letter.is_selected = false;
        }
        for id in cells {
            if let Some(letter) = self.letters.get_mut(*id) {
                letter.is_selected = true;
            }
        }
    }

    /// Return the IDs of the letters that vanished.
    pub fn removed_cells(&self) -> Vec<usize> {
        self.letters
            .iter()
            .filter(|l| l.is_removed())
            .map(|l| l.id)
            .collect()
    }

    /// Whether every letter vanished, in which case nothing can be played anymore.
    pub fn is_exhausted(&self) -> bool {
        self.letters.iter().all(|l| l.is_removed())
    }
}

/// Print the cube layer by layer. Removed letters are displayed as a dot.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size: usize = self.size();
        for z in 0..size {
            writeln!(f, "Layer {z}")?;
            for y in 0..size {
                let row: Vec<String> = (0..size)
                    .map(|x| {
                        let letter: &Letter = &self.letters[z * size * size + y * size + x];
                        if letter.is_removed() {
                            String::from(".")
                        } else {
                            letter.character.to_string()
                        }
                    })
                    .collect();
                writeln!(f, "  {}", row.join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_characters_checks_length() {
        assert!(Cube::from_characters(2, "ABCD EFGH").is_some());
        assert!(Cube::from_characters(2, "ABC").is_none());
        // Only A-Z letters, one character per cell
        assert!(Cube::from_characters(2, "ßSABCDEF").is_none());
        assert!(Cube::from_characters(2, "ABC1EFGH").is_none());
        let cube = Cube::from_characters(1, "q").unwrap();
        assert_eq!(cube.character(0), Some('Q'));
    }

    #[test]
    fn letters_vanish_after_max_usage() {
        let mut cube = Cube::from_characters(2, "ABCDEFGH").unwrap();
        assert!(!cube.use_letter(3));
        assert!(!cube.use_letter(3));
        assert!(cube.use_letter(3));
        assert!(!cube.is_selectable(3));
        assert_eq!(cube.letter(3).unwrap().usage_count(), MAX_USAGE);
        assert_eq!(cube.letter(3).unwrap().remaining_uses(), 0);
        // A removed letter stays removed and is reported only once
        assert!(!cube.use_letter(3));
        assert_eq!(cube.removed_cells(), vec![3]);
        assert_eq!(cube.character(3), Some('D'));
        assert!(!cube.is_exhausted());
    }

    #[test]
    fn word_along_path() {
        let cube = Cube::from_characters(2, "catsdogs").unwrap();
        assert_eq!(cube.word_along(&[0, 1, 2]), "CAT");
        assert_eq!(cube.word_along(&[]), "");
        assert_eq!(cube.word_along(&[3, 7]).chars().count(), 2);
    }

    #[test]
    fn display_hides_removed_letters() {
        let mut cube = Cube::from_characters(2, "ABCDEFGH").unwrap();
        for _ in 0..MAX_USAGE {
            cube.use_letter(0);
        }
        let text: String = cube.to_string();
        assert_eq!(text, "Layer 0\n  . B\n  C D\nLayer 1\n  E F\n  G H\n");
    }

    #[test]
    fn selection_hint_is_not_serialized() {
        let mut cube = Cube::from_characters(1, "Z").unwrap();
        cube.mark_selection(&[0]);
        assert!(cube.letter(0).unwrap().is_selected);
        let json: String = serde_json::to_string(&cube).unwrap();
        assert!(!json.contains("is_selected"));
        let restored: Cube = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.size(), 1);
        assert!(!restored.letter(0).unwrap().is_selected);
    }

    #[test]
    fn deserialization_checks_invariants() {
        let short = r#"{"size":3,"letters":[{"id":0,"character":"A","usage_count":0}]}"#;
        assert!(serde_json::from_str::<Cube>(short).is_err());

        let empty = r#"{"size":0,"letters":[]}"#;
        assert!(serde_json::from_str::<Cube>(empty).is_err());

        let swapped = r#"{"size":1,"letters":[{"id":4,"character":"A","usage_count":0}]}"#;
        assert!(serde_json::from_str::<Cube>(swapped).is_err());

        let sharp_s = r#"{"size":1,"letters":[{"id":0,"character":"ß","usage_count":0}]}"#;
        assert!(serde_json::from_str::<Cube>(sharp_s).is_err());

        let valid = r#"{"size":1,"letters":[{"id":0,"character":"Q","usage_count":2}]}"#;
        let cube: Cube = serde_json::from_str(valid).unwrap();
        assert_eq!(cube.letter(0).unwrap().remaining_uses(), 1);
    }

    #[test]
    fn raw_cube_errors() {
        let raw = RawCube {
            size: 1,
            letters: vec![Letter::new(0, 'A'), Letter::new(1, 'B')],
        };
        assert_eq!(
            Cube::try_from(raw),
            Err(CubeError::LetterCount {
                expected: 1,
                found: 2
            })
        );
        let raw = RawCube {
            size: 0,
            letters: Vec::new(),
        };
        assert_eq!(
            Cube::try_from(raw),
            Err(CubeError::Lattice(LatticeError::ZeroSize))
        );
    }
}
