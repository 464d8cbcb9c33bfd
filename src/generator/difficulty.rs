/*
difficulty.rs

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

//! Difficulty levels.
//!
//! A [`Difficulty`] selects the default cube size and the words that the generator tries to
//! embed: their length range and how many of them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Puzzle difficulty level.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, ValueEnum, Default,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Generation parameters for a difficulty level and a cube size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DifficultyConfig {
    /// Cube size the parameters were computed for.
    pub cube_size: usize,

    /// Shortest word to embed.
    pub min_word_length: usize,

    /// Longest word to embed. Never more than the number of cells in the cube.
    pub max_word_length: usize,

    /// Maximum number of words to embed.
    pub max_words_to_embed: usize,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Return the default cube size for the difficulty level.
    pub fn cube_size(&self) -> usize {
        match self {
            Difficulty::Easy | Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Return a short description of the difficulty level.
    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "3x3x3 cube with shorter words",
            Difficulty::Medium => "3x3x3 cube with medium words",
            Difficulty::Hard => "4x4x4 cube with longer words",
        }
    }

    /// Return the generation parameters for a cube of the given size.
    pub fn config(&self, size: usize) -> DifficultyConfig {
        let size: usize = size.max(1);
        let area: usize = size * size;
        let volume: usize = area * size;

        let (max_words_to_embed, min_word_length, max_word_length) = match self {
            Difficulty::Easy => (5.min(area), 3, 4),
            Difficulty::Medium => (8.min(area * 2), 3, 5),
            Difficulty::Hard => (12.min(volume), 4, 6),
        };
        DifficultyConfig {
            cube_size: size,
            min_word_length,
            max_word_length: max_word_length.min(volume),
            max_words_to_embed,
        }
    }

    /// Return the generation parameters for the default cube size.
    pub fn default_config(&self) -> DifficultyConfig {
        self.config(self.cube_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configs() {
        assert_eq!(
            Difficulty::Easy.default_config(),
            DifficultyConfig {
                cube_size: 3,
                min_word_length: 3,
                max_word_length: 4,
                max_words_to_embed: 5
            }
        );
        assert_eq!(Difficulty::Medium.default_config().max_words_to_embed, 8);
        let hard: DifficultyConfig = Difficulty::Hard.default_config();
        assert_eq!(hard.cube_size, 4);
        assert_eq!((hard.min_word_length, hard.max_word_length), (4, 6));
        assert_eq!(hard.max_words_to_embed, 12);
    }

    #[test]
    fn small_cubes_bound_the_words() {
        let config: DifficultyConfig = Difficulty::Hard.config(1);
        assert_eq!(config.max_words_to_embed, 1);
        assert_eq!(config.max_word_length, 1);
        assert_eq!(Difficulty::Easy.config(2).max_words_to_embed, 4);
        assert_eq!(Difficulty::Medium.config(0).cube_size, 1);
    }

    #[test]
    fn display_and_description() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert!(Difficulty::Easy.description().starts_with("3x3x3"));
    }
}
