/*
dictionary.rs

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

//! Dictionary lookups.
//!
//! The generator and the selection engine only need two questions answered: is a string a word,
//! and does some word start with a string.
//! Both are expressed by the [`WordOracle`] trait, so that any word source can be plugged in.
//!
//! [`Dictionary`] is the word source provided with Vanishing Cube.
//! It is built from a word list, either the embedded English list or a file with one word per
//! line.
//! Lookups are case-insensitive.

use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Word list embedded in the binary, used when no other list is provided.
const DEFAULT_WORDS: &str = include_str!("../data/words.txt");

/// Membership and prefix tests over a dictionary.
///
/// Implementations must be case-insensitive.
pub trait WordOracle: Send + Sync {
    /// Whether the string is a dictionary word.
    fn is_valid_word(&self, word: &str) -> bool;

    /// Whether at least one dictionary word starts with the string.
    fn is_prefix(&self, prefix: &str) -> bool;
}

/// In-memory dictionary.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Uppercase words for membership tests.
    words: HashSet<String>,

    /// Same words, sorted, for prefix tests.
    sorted: BTreeSet<String>,
}

impl Dictionary {
    /// Create a [`Dictionary`] object with no words.
    ///
    /// With an empty dictionary no word can ever be committed, and every chain is a dead end.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a [`Dictionary`] object from a list of words.
    ///
    /// Words are trimmed and stored in uppercase. Blank entries and entries starting with `#` are
    /// skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary: Dictionary = Self::empty();
        for w in words {
            dictionary.insert(w.as_ref());
        }
        dictionary
    }

    /// Create a [`Dictionary`] object from the embedded word list.
    pub fn embedded() -> Self {
        let dictionary: Dictionary = Self::from_words(DEFAULT_WORDS.lines());
        debug!("Embedded dictionary: {} words", dictionary.len());
        dictionary
    }

    /// Create a [`Dictionary`] object from a word list file, one word per line.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let mut dictionary: Dictionary = Self::empty();

        for line in reader.lines() {
            dictionary.insert(&line?);
        }
        debug!("Dictionary {path:?}: {} words", dictionary.len());
        Ok(dictionary)
    }

    /// Add a word to the dictionary.
    fn insert(&mut self, entry: &str) {
        let word: &str = entry.trim();
        if word.is_empty() || word.starts_with('#') {
            return;
        }
        let word: String = word.to_uppercase();
        self.words.insert(word.clone());
        self.sorted.insert(word);
    }

    /// Return the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    fn is_prefix(&self, prefix: &str) -> bool {
        let prefix: String = prefix.to_uppercase();
        // The first word not lower than the prefix is the only candidate
        self.sorted
            .range(prefix.clone()..)
            .next()
            .is_some_and(|w| w.starts_with(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookups_are_case_insensitive() {
        let dictionary = Dictionary::from_words(["cat", "Cats", "DOG"]);
        assert!(dictionary.is_valid_word("CAT"));
        assert!(dictionary.is_valid_word("cats"));
        assert!(dictionary.is_valid_word("dog"));
        assert!(!dictionary.is_valid_word("CA"));
        assert!(dictionary.is_prefix("ca"));
        assert!(dictionary.is_prefix("CAT"));
        assert!(dictionary.is_prefix("CATS"));
        assert!(!dictionary.is_prefix("CATX"));
        assert!(!dictionary.is_prefix("B"));
    }

    #[test]
    fn empty_dictionary_knows_nothing() {
        let dictionary = Dictionary::empty();
        assert!(dictionary.is_empty());
        assert!(!dictionary.is_valid_word("CAT"));
        assert!(!dictionary.is_prefix("C"));
        assert!(!dictionary.is_prefix(""));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let dictionary = Dictionary::from_words(["# animals", "", "  bird  "]);
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.is_valid_word("BIRD"));
    }

    #[test]
    fn embedded_list_has_common_words() {
        let dictionary = Dictionary::embedded();
        assert!(dictionary.len() > 100);
        for word in ["CAT", "DOG", "CUBE", "WORD", "PUZZLE"] {
            assert!(dictionary.is_valid_word(word), "{word} is missing");
        }
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("vanishing-cube-{}.txt", std::process::id()));
        let mut file = File::create(&path).unwrap();
        writeln!(file, "apple\nbanana\n# fruit").unwrap();
        drop(file);

        let dictionary = Dictionary::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_valid_word("Banana"));
        assert!(Dictionary::from_file(&path).is_err());
    }
}
