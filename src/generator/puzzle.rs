/*
puzzle.rs

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

//! Puzzle generation.
//!
//! [`PuzzleGenerator::generate`] builds a [`Puzzle`] in four steps:
//!
//! 1. Select candidate words from the curated list: words with a length in the range of the
//!    difficulty level and that the dictionary accepts. A random sample of them is kept.
//! 2. Embed the candidates one after the other. Each word gets a random path of adjacent free
//!    cells (see [`word_path::WordPath`]). A word that cannot be placed is dropped, and the
//!    following words are still tried. Placement is greedy: earlier words are never moved to
//!    make room for later ones.
//! 3. Fill the cells that no word uses with random letters.
//! 4. Build the [`Cube`] of letters.
//!
//! Generation never fails. In the worst case, no word is embedded and the cube is made of
//! random letters only.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Instant;

use super::difficulty::{Difficulty, DifficultyConfig};
use super::grid::LetterGrid;
use super::path::Path;
use super::word_list::CURATED_WORDS;
use super::word_path::{self, WordPath};
use crate::cube::Cube;
use crate::dictionary::WordOracle;
use crate::lattice::Lattice;

/// Cells where an embedded word was placed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Placement {
    /// Embedded word.
    pub word: String,

    /// Cells that spell the word, in order.
    pub cells: Vec<usize>,
}

/// Generated puzzle.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Puzzle {
    /// Cube of letters.
    pub cube: Cube,

    /// Difficulty level used for generating the puzzle.
    pub difficulty: Difficulty,

    /// Words that the generator placed in the cube.
    ///
    /// Players are not limited to these words: any dictionary word they can chain is accepted.
    pub embedded_words: BTreeSet<String>,

    /// Where each embedded word was placed, in embedding order. Can be used for hints.
    pub placements: Vec<Placement>,
}

impl Puzzle {
    /// Return the cube size.
    pub fn size(&self) -> usize {
        self.cube.size()
    }

    /// Whether the generator placed the given word in the cube.
    pub fn is_embedded(&self, word: &str) -> bool {
        self.embedded_words.contains(&word.to_uppercase())
    }

    /// Return the placement of an embedded word.
    pub fn placement(&self, word: &str) -> Option<&Placement> {
        let word: String = word.to_uppercase();
        self.placements.iter().find(|p| p.word == word)
    }
}

/// [`PuzzleGenerator`] object.
pub struct PuzzleGenerator {
    /// Dictionary used to validate the candidate words.
    oracle: Arc<dyn WordOracle>,

    /// Uppercase words that the generator tries to embed.
    words: Vec<String>,

    /// Number of words that the last generation tried to embed.
    pub attempted: usize,

    /// Number of search iterations of the last generation.
    pub iteration: usize,

    /// Duration in seconds of the last generation.
    pub duration: f32,
}

impl PuzzleGenerator {
    /// Create a [`PuzzleGenerator`] object that embeds words from the curated list.
    pub fn new(oracle: Arc<dyn WordOracle>) -> Self {
        Self::with_words(oracle, CURATED_WORDS.iter().copied())
    }

    /// Create a [`PuzzleGenerator`] object that embeds words from the given list.
    pub fn with_words<I, S>(oracle: Arc<dyn WordOracle>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            oracle,
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_uppercase())
                .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
                .collect(),
            attempted: 0,
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Return the words that fit the given parameters and that the dictionary accepts.
    pub fn candidates(&self, config: &DifficultyConfig) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| {
                let len: usize = w.chars().count();
                len >= config.min_word_length
                    && len <= config.max_word_length
                    && self.oracle.is_valid_word(w)
            })
            .cloned()
            .collect()
    }

    /// Generate a puzzle by using the thread random number generator.
    pub fn generate(&mut self, size: usize, difficulty: Difficulty) -> Puzzle {
        self.generate_with_rng(size, difficulty, &mut rand::rng())
    }

    /// Generate a puzzle by using the given random number generator.
    ///
    /// A seeded generator gives the same puzzle on every run only as long as no word search
    /// reaches the per-word time limit (two seconds). A search that times out drops its word,
    /// so on a slow machine the same seed can embed fewer words.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Puzzle {
        let start: Instant = Instant::now();
        let lattice: Lattice = Lattice::new(size);
        let config: DifficultyConfig = difficulty.config(lattice.size());

        let mut words: Vec<String> = self.candidates(&config);
        words.shuffle(rng);
        words.truncate(config.max_words_to_embed);
        debug!(
            "Size = {}  Difficulty = {difficulty}  Words to embed = {words:?}",
            lattice.size()
        );

        let mut grid: LetterGrid = LetterGrid::new(lattice);
        let placements: Vec<Placement> = self.embed_words(&words, &mut grid, rng);
        let cube: Cube = grid.into_cube(rng);

        self.attempted = words.len();
        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Embedded {} of {} words in {}s",
            placements.len(),
            self.attempted,
            self.duration
        );

        Puzzle {
            cube,
            difficulty,
            embedded_words: placements.iter().map(|p| p.word.clone()).collect(),
            placements,
        }
    }

    /// Place the words in the grid, one after the other, and return the placements that succeeded.
    fn embed_words<R: Rng + ?Sized>(
        &mut self,
        words: &[String],
        grid: &mut LetterGrid,
        rng: &mut R,
    ) -> Vec<Placement> {
        let mut placements: Vec<Placement> = Vec::with_capacity(words.len());
        let mut committed: HashSet<usize> = HashSet::new();
        self.iteration = 0;

        for word in words {
            let characters: Vec<char> = word.chars().collect();
            let mut search: WordPath = WordPath::new(grid, &committed);
            let res: Result<Path, word_path::WordPathError> = search.find(&characters, rng);
            self.iteration += search.iteration;

            match res {
                Ok(path) => {
                    debug!("Word {word} placed at {:?}", path.get());
                    for (cell, c) in path.get().iter().zip(&characters) {
                        grid.set(*cell, *c);
                        committed.insert(*cell);
                    }
                    placements.push(Placement {
                        word: word.clone(),
                        cells: path.into(),
                    });
                }
                Err(e) => {
                    // The word does not fit in the space left; skip it
                    debug!("Word {word} dropped: {e:?}");
                }
            }
        }
        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator() -> PuzzleGenerator {
        PuzzleGenerator::new(Arc::new(Dictionary::embedded()))
    }

    fn assert_placements_spell_words(puzzle: &Puzzle) {
        let lattice: &Lattice = puzzle.cube.lattice();
        let mut used: HashSet<usize> = HashSet::new();
        for placement in &puzzle.placements {
            assert_eq!(puzzle.cube.word_along(&placement.cells), placement.word);
            for pair in placement.cells.windows(2) {
                assert!(lattice.is_adjacent(pair[0], pair[1]));
            }
            for cell in &placement.cells {
                assert!(used.insert(*cell), "cell {cell} used twice");
            }
        }
        assert_eq!(puzzle.embedded_words.len(), puzzle.placements.len());
    }

    #[test]
    fn candidates_follow_the_difficulty() {
        let generator = generator();
        let config: DifficultyConfig = Difficulty::Hard.default_config();
        let candidates: Vec<String> = generator.candidates(&config);
        assert!(!candidates.is_empty());
        assert!(
            candidates
                .iter()
                .all(|w| (4..=6).contains(&w.len()))
        );
    }

    #[test]
    fn candidates_must_be_dictionary_words() {
        let oracle = Arc::new(Dictionary::from_words(["CAT"]));
        let generator = PuzzleGenerator::with_words(oracle, ["cat", "dog", "c4t"]);
        let config: DifficultyConfig = Difficulty::Easy.default_config();
        assert_eq!(generator.candidates(&config), vec!["CAT"]);
    }

    #[test]
    fn generated_puzzles_are_consistent() {
        let mut generator = generator();
        let mut rng = StdRng::seed_from_u64(2025);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let puzzle: Puzzle =
                generator.generate_with_rng(difficulty.cube_size(), difficulty, &mut rng);
            let size: usize = difficulty.cube_size();
            assert_eq!(puzzle.cube.len(), size * size * size);
            assert!(!puzzle.embedded_words.is_empty());
            assert!(puzzle.embedded_words.len() <= difficulty.default_config().max_words_to_embed);
            assert_placements_spell_words(&puzzle);
        }
    }

    #[test]
    fn tiny_cube_embeds_nothing() {
        let mut generator = generator();
        let puzzle: Puzzle = generator.generate(1, Difficulty::Easy);
        assert_eq!(puzzle.cube.len(), 1);
        assert!(puzzle.embedded_words.is_empty());
        assert!(puzzle.cube.character(0).unwrap().is_ascii_uppercase());
        assert_eq!(generator.attempted, 0);
    }

    #[test]
    fn empty_dictionary_still_builds_a_cube() {
        let mut generator = PuzzleGenerator::new(Arc::new(Dictionary::empty()));
        let puzzle: Puzzle = generator.generate(3, Difficulty::Medium);
        assert_eq!(puzzle.cube.len(), 27);
        assert!(puzzle.embedded_words.is_empty());
        assert!(puzzle.placements.is_empty());
    }

    #[test]
    fn embedded_word_lookup() {
        let oracle = Arc::new(Dictionary::from_words(["CAT"]));
        let mut generator = PuzzleGenerator::with_words(oracle, ["CAT"]);
        let puzzle: Puzzle =
            generator.generate_with_rng(3, Difficulty::Easy, &mut StdRng::seed_from_u64(5));
        assert!(puzzle.is_embedded("cat"));
        let placement: &Placement = puzzle.placement("Cat").unwrap();
        assert_eq!(placement.cells.len(), 3);
        assert_eq!(puzzle.cube.word_along(&placement.cells), "CAT");
    }
}
