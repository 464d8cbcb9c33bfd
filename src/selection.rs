/*
selection.rs

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

//! Selection engine.
//!
//! The player builds words by tapping cells. Each tap is processed by
//! [`SelectionEngine::tap`], which updates the current selection and returns a [`TapOutcome`]
//! describing what happened, so that the user interface can give feedback.
//!
//! Rules for a tap on a cell:
//!
//! * When the selection is empty, or when the cell is a neighbor of the last selected cell, the
//!   cell is added to the selection (extend). The cell must still be in play and not already
//!   selected.
//!   - If the selection now spells a dictionary word of at least three letters that was not
//!     found before, the word is committed: it is scored, every letter of the word is used once
//!     more, and the selection is cleared.
//!   - If no dictionary word starts with the selection, the selection is a dead end and is
//!     cleared.
//!   - If the selection spells a word that was already found, the word is rejected but the
//!     selection is kept, because it might still grow into a longer word.
//! * When the cell is already selected, the selection is rewound to just before that cell
//!   (retract).
//! * Any other tap is invalid and does not change the selection.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cube::Cube;
use crate::dictionary::WordOracle;
use crate::generator::path::Path;
use crate::scoring::{self, MIN_WORD_LENGTH};

/// Result of a tap, for the feedback layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TapOutcome {
    /// The cell was added to the selection, which is still a possible word prefix.
    Extended { path: Vec<usize>, word: String },

    /// The selection spelled a new word, which is now scored.
    /// `removed` lists the cells that vanished because of this word.
    Committed {
        word: String,
        score: u32,
        removed: Vec<usize>,
    },

    /// The selection spells a word that was already found. The selection is kept.
    RejectedInvalidWord { word: String },

    /// No word starts with the selection. The selection was cleared.
    RejectedDeadEnd { word: String },

    /// The selection was rewound to just before the tapped cell.
    Retracted { path: Vec<usize>, word: String },

    /// The cell cannot be selected. Nothing changed.
    InvalidTap { cell: usize },
}

impl TapOutcome {
    /// Whether the tap was refused, which the feedback layer reports as an error.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TapOutcome::RejectedInvalidWord { .. }
                | TapOutcome::RejectedDeadEnd { .. }
                | TapOutcome::InvalidTap { .. }
        )
    }
}

impl fmt::Display for TapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TapOutcome::Extended { path, word } => write!(f, "extended: {word} {path:?}"),
            TapOutcome::Committed {
                word,
                score,
                removed,
            } => {
                write!(f, "committed: {word} (+{score})")?;
                if !removed.is_empty() {
                    write!(f, " vanished {removed:?}")?;
                }
                Ok(())
            }
            TapOutcome::RejectedInvalidWord { word } => write!(f, "rejected: {word} already found"),
            TapOutcome::RejectedDeadEnd { word } => write!(f, "rejected: no word starts with {word}"),
            TapOutcome::Retracted { path, word } => write!(f, "retracted: {word} {path:?}"),
            TapOutcome::InvalidTap { cell } => write!(f, "invalid: cell {cell} cannot be selected"),
        }
    }
}

/// State of the selection.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// No cell selected.
    Idle,

    /// Some cells are selected, but they do not spell a new word yet.
    Extending,
}

/// Manage the selection and the words found during a game.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct SelectionEngine {
    /// Selected cells.
    path: Path,

    /// Uppercase word spelled by the selected cells.
    current_word: String,

    /// Committed words, in the order they were found.
    words_found: Vec<String>,

    /// Sum of the scores of the committed words.
    score: u32,
}

impl SelectionEngine {
    /// Create a [`SelectionEngine`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the state of the selection.
    pub fn state(&self) -> SelectionState {
        if self.path.is_empty() {
            SelectionState::Idle
        } else {
            SelectionState::Extending
        }
    }

    /// Return the selected cells, in selection order.
    pub fn path(&self) -> &[usize] {
        self.path.get()
    }

    /// Return the word spelled by the selected cells.
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Return the committed words, in the order they were found.
    pub fn words_found(&self) -> &[String] {
        &self.words_found
    }

    /// Return the total score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the word was already committed.
    pub fn has_found(&self, word: &str) -> bool {
        let word: String = word.to_uppercase();
        self.words_found.contains(&word)
    }

    /// Unselect all the cells.
    pub fn clear_selection(&mut self, cube: &mut Cube) {
        self.path.clear();
        self.current_word.clear();
        cube.mark_selection(&[]);
    }

    /// Whether the cell can be added at the end of the selection.
    fn can_extend(&self, cube: &Cube, cell: usize) -> bool {
        cube.is_selectable(cell)
            && !self.path.contains(cell)
            && self
                .path
                .get_last()
                .is_none_or(|last| cube.lattice().is_adjacent(last, cell))
    }

    /// Process a tap on the given cell.
    pub fn tap(&mut self, cube: &mut Cube, oracle: &dyn WordOracle, cell: usize) -> TapOutcome {
        // Tapping a selected cell rewinds the selection
        if let Some(position) = self.path.position(cell) {
            self.path.truncate(position);
            self.current_word = cube.word_along(self.path.get());
            cube.mark_selection(self.path.get());
            debug!("Cell {cell}: retracted to {:?}", self.path.get());
            return TapOutcome::Retracted {
                path: self.path.get().to_vec(),
                word: self.current_word.clone(),
            };
        }

        if !self.can_extend(cube, cell) {
            debug!("Cell {cell}: invalid tap");
            return TapOutcome::InvalidTap { cell };
        }

        self.path.push(cell);
        self.current_word = cube.word_along(self.path.get());
        let word: String = self.current_word.clone();

        if word.chars().count() >= MIN_WORD_LENGTH && oracle.is_valid_word(&word) {
            if !self.has_found(&word) {
                return self.commit(cube, word);
            }
            debug!("Word {word} already found");
            cube.mark_selection(self.path.get());
            return TapOutcome::RejectedInvalidWord { word };
        }

        if !oracle.is_prefix(&word) {
            debug!("Dead end: no word starts with {word}");
            self.clear_selection(cube);
            return TapOutcome::RejectedDeadEnd { word };
        }

        cube.mark_selection(self.path.get());
        TapOutcome::Extended {
            path: self.path.get().to_vec(),
            word,
        }
    }

    /// Score the word, use its letters, and clear the selection.
    fn commit(&mut self, cube: &mut Cube, word: String) -> TapOutcome {
        let points: u32 = scoring::score(&word);
        self.score += points;
        self.words_found.push(word.clone());

        let removed: Vec<usize> = self
            .path
            .get()
            .iter()
            .copied()
            .filter(|cell| cube.use_letter(*cell))
            .collect();
        debug!(
            "Word {word} committed: +{points} (total {})  vanished cells {removed:?}",
            self.score
        );

        self.clear_selection(cube);
        TapOutcome::Committed {
            word,
            score: points,
            removed,
        }
    }
}
