/*
scoring.rs

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

//! Word scoring.
//!
//! A word is worth ten points per letter. Words longer than five letters earn a bonus of twenty
//! points for every letter past the fifth.

/// Shortest word that can be committed.
pub const MIN_WORD_LENGTH: usize = 3;

/// Points per letter.
const LETTER_POINTS: u32 = 10;

/// Bonus points per letter beyond [`BONUS_THRESHOLD`].
const BONUS_POINTS: u32 = 20;

/// Words longer than this number of letters earn a bonus.
const BONUS_THRESHOLD: usize = 5;

/// Return the score of a committed word.
pub fn score(word: &str) -> u32 {
    let len: usize = word.chars().count();
    let base: u32 = len as u32 * LETTER_POINTS;
    let bonus: u32 = if len > BONUS_THRESHOLD {
        (len - BONUS_THRESHOLD) as u32 * BONUS_POINTS
    } else {
        0
    };
    base + bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_have_no_bonus() {
        assert_eq!(score("CAT"), 30);
        assert_eq!(score("CUBE"), 40);
        assert_eq!(score("APPLE"), 50);
    }

    #[test]
    fn long_words_earn_a_bonus() {
        assert_eq!(score("PUZZLE"), 80);
        assert_eq!(score("GARDENS"), 110);
    }
}
