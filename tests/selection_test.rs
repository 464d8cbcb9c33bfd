/*
selection_test.rs

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

//! Integration tests for the selection rules, played through a game session.

mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use common::{CAT_CUBE, assert_valid_chain, session_with};
use vanishing_cube::{
    Dictionary, Difficulty, GameSession, MAX_USAGE, PuzzleGenerator, SelectionState, TapOutcome,
    WordOracle,
};

#[test]
fn test_cat_scenario() {
    let mut session = session_with(3, CAT_CUBE, &["CAT"]);

    assert_eq!(
        session.tap(0),
        TapOutcome::Extended {
            path: vec![0],
            word: "C".to_string()
        }
    );
    assert_eq!(
        session.tap(1),
        TapOutcome::Extended {
            path: vec![0, 1],
            word: "CA".to_string()
        }
    );
    assert_eq!(
        session.tap(2),
        TapOutcome::Committed {
            word: "CAT".to_string(),
            score: 30,
            removed: vec![]
        }
    );
    assert_eq!(session.score(), 30);
    assert_eq!(session.selection_state(), SelectionState::Idle);
    for cell in 0..3 {
        assert_eq!(session.cube().letter(cell).unwrap().usage_count(), 1);
    }
}

#[test]
fn test_letters_vanish_after_three_words() {
    let mut session = session_with(3, CAT_CUBE, &["CAT", "ACT", "TAC"]);

    for cell in [0, 1, 2] {
        session.tap(cell);
    }
    for cell in [1, 0, 2] {
        session.tap(cell);
    }
    session.tap(2);
    session.tap(1);
    assert_eq!(
        session.tap(0),
        TapOutcome::Committed {
            word: "TAC".to_string(),
            score: 30,
            removed: vec![2, 1, 0]
        }
    );
    assert_eq!(session.score(), 90);

    for cell in 0..3 {
        let letter = session.cube().letter(cell).unwrap();
        assert_eq!(letter.usage_count(), MAX_USAGE);
        assert!(letter.is_removed());
    }

    // Vanished cells cannot start or extend a chain, even when adjacent
    assert_eq!(session.tap(0), TapOutcome::InvalidTap { cell: 0 });
    assert!(matches!(session.tap(3), TapOutcome::RejectedDeadEnd { .. }));
    assert_eq!(session.tap(4), TapOutcome::RejectedDeadEnd { word: "O".to_string() });
}

#[test]
fn test_vanished_neighbor_is_not_an_extension() {
    let mut session = session_with(3, CAT_CUBE, &["CAT", "ACT", "TAC", "OAT"]);
    for cells in [[0, 1, 2], [1, 0, 2], [2, 1, 0]] {
        for cell in cells {
            session.tap(cell);
        }
    }
    // O is adjacent to A, but A vanished
    assert!(matches!(session.tap(4), TapOutcome::Extended { .. }));
    assert_eq!(session.tap(1), TapOutcome::InvalidTap { cell: 1 });
    assert_eq!(session.selection(), &[4]);
}

#[test]
fn test_retraction_rewinds_the_chain() {
    let mut session = session_with(3, CAT_CUBE, &["DTXQ"]);
    session.tap(5);
    session.tap(2);
    session.tap(11);
    assert_eq!(session.selection(), &[5, 2, 11]);
    assert_eq!(session.current_word(), "DTX");

    assert_eq!(
        session.tap(2),
        TapOutcome::Retracted {
            path: vec![5],
            word: "D".to_string()
        }
    );
    assert_eq!(session.current_word(), "D");
}

#[test]
fn test_empty_dictionary_degrades_gracefully() {
    let mut session = session_with(3, CAT_CUBE, &[]);
    for cell in 0..27 {
        assert_eq!(
            session.selection_state(),
            SelectionState::Idle,
            "tap {cell} left a selection"
        );
        assert!(session.tap(cell).is_rejection());
    }
    assert!(session.words_found().is_empty());
}

#[test]
fn test_random_taps_keep_a_valid_chain() {
    let oracle: Arc<dyn WordOracle> = Arc::new(Dictionary::embedded());
    let mut rng = StdRng::seed_from_u64(11);
    let puzzle =
        PuzzleGenerator::new(Arc::clone(&oracle)).generate_with_rng(3, Difficulty::Medium, &mut rng);
    let lattice = *puzzle.cube.lattice();
    let mut session = GameSession::new(puzzle, oracle);

    let mut expected_score: u32 = 0;
    for _ in 0..2000 {
        let cell: usize = rng.random_range(0..lattice.num_cells());
        if let TapOutcome::Committed { score, .. } = session.tap(cell) {
            expected_score += score;
        }
        assert_valid_chain(&lattice, session.selection());
        for cell in session.selection() {
            assert!(!session.cube().letter(*cell).unwrap().is_removed());
        }
    }
    assert_eq!(session.score(), expected_score);
}
