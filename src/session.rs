/*
session.rs

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

//! Manage the status of a game in progress.
//!
//! A [`GameSession`] owns the puzzle being played and the [`SelectionEngine`] that processes the
//! player's taps.
//! The dictionary is given when the session is created, so that the same dictionary can be
//! shared by the generator and by several sessions.
//!
//! Taps must be processed one at a time: [`GameSession::tap`] takes a mutable reference to the
//! session, so concurrent taps on the same session cannot happen.

use chrono::{DateTime, Local};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cube::Cube;
use crate::dictionary::WordOracle;
use crate::generator::difficulty::Difficulty;
use crate::generator::puzzle::Puzzle;
use crate::selection::{SelectionEngine, SelectionState, TapOutcome};

/// Results of a finished game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Difficulty level of the puzzle.
    pub difficulty: Difficulty,

    /// Final score.
    pub score: u32,

    /// Words found, in the order they were found.
    pub words_found: Vec<String>,

    /// Number of words found.
    pub word_count: usize,

    /// Longest word found. Empty if no word was found.
    pub longest_word: String,

    /// Number of letters that vanished.
    pub removed_letters: usize,

    /// Played time in seconds, pauses excluded.
    pub duration_secs: u64,

    /// When the game ended.
    pub finished_at: DateTime<Local>,
}

/// Manage the status of the game in progress.
pub struct GameSession {
    /// Puzzle being played. Its cube is updated as words are committed.
    puzzle: Puzzle,

    /// Current selection and words found.
    engine: SelectionEngine,

    /// Dictionary that decides which words are valid.
    oracle: Arc<dyn WordOracle>,

    /// Whether the player paused the game.
    paused: bool,

    /// Whether the player ended the game.
    ended: bool,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,
}

impl GameSession {
    /// Create a [`GameSession`] object and start the game.
    pub fn new(puzzle: Puzzle, oracle: Arc<dyn WordOracle>) -> Self {
        debug!(
            "New game: {}x{0}x{0} {} cube, embedded words {:?}",
            puzzle.size(),
            puzzle.difficulty,
            puzzle.embedded_words
        );
        Self {
            puzzle,
            engine: SelectionEngine::new(),
            oracle,
            paused: false,
            ended: false,
            start_time: Instant::now(),
            pause_duration: None,
        }
    }

    /// Process a tap on the given cell.
    ///
    /// Taps are ignored, and reported as invalid, while the game is paused or over.
    pub fn tap(&mut self, cell: usize) -> TapOutcome {
        if self.paused || self.is_over() {
            debug!("Cell {cell}: game paused or over");
            return TapOutcome::InvalidTap { cell };
        }
        let outcome: TapOutcome = self
            .engine
            .tap(&mut self.puzzle.cube, self.oracle.as_ref(), cell);
        if let TapOutcome::Committed { word, .. } = &outcome {
            info!("Found {word}, score = {}", self.engine.score());
        }
        outcome
    }

    /// Return the puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Return the cube of letters in its current state.
    pub fn cube(&self) -> &Cube {
        &self.puzzle.cube
    }

    /// Return the total score.
    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    /// Return the words found so far.
    pub fn words_found(&self) -> &[String] {
        self.engine.words_found()
    }

    /// Return the selected cells.
    pub fn selection(&self) -> &[usize] {
        self.engine.path()
    }

    /// Return the word spelled by the selected cells.
    pub fn current_word(&self) -> &str {
        self.engine.current_word()
    }

    /// Return the state of the selection.
    pub fn selection_state(&self) -> SelectionState {
        self.engine.state()
    }

    /// Whether the game is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the game is over: the player ended it, or every letter vanished.
    pub fn is_over(&self) -> bool {
        self.ended || self.puzzle.cube.is_exhausted()
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if self.paused || self.ended {
            return;
        }
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the played time, pauses excluded.
    pub fn elapsed(&self) -> Duration {
        match self.pause_duration {
            Some(d) => d,
            None => self.start_time.elapsed(),
        }
    }

    /// Return the played time in hours, minutes, and seconds.
    pub fn elapsed_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.elapsed().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }

    /// End the game and return its results.
    pub fn end(&mut self) -> SessionSummary {
        let summary: SessionSummary = self.summary();
        self.engine.clear_selection(&mut self.puzzle.cube);
        self.ended = true;
        info!(
            "Game over: score = {}  words = {}",
            summary.score, summary.word_count
        );
        summary
    }

    /// Return the results of the game so far.
    pub fn summary(&self) -> SessionSummary {
        let words_found: Vec<String> = self.engine.words_found().to_vec();
        // The first of the longest words wins
        let longest_word: String = words_found
            .iter()
            .fold(None::<&String>, |longest, w| match longest {
                Some(l) if l.chars().count() >= w.chars().count() => Some(l),
                _ => Some(w),
            })
            .cloned()
            .unwrap_or_default();

        SessionSummary {
            difficulty: self.puzzle.difficulty,
            score: self.engine.score(),
            word_count: words_found.len(),
            words_found,
            longest_word,
            removed_letters: self.puzzle.cube.removed_cells().len(),
            duration_secs: self.elapsed().as_secs(),
            finished_at: Local::now(),
        }
    }
}
