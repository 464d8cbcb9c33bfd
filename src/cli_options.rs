/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line is a developer tool: it generates puzzles and prints them, and it can play
//! a game from the standard input to try the selection rules.
//!
//! # Examples
//!
//! Generate three puzzles at the hard difficulty level and print some statistics:
//!
//! ```text
//! $ vanishing-cube -c 3 -f hard --summary
//! ```
//!
//! Play a game on a 3x3x3 cube. Each input line is a cell ID, or one of the `pause`, `resume`,
//! `show`, and `quit` commands:
//!
//! ```text
//! $ vanishing-cube --play -s 3
//! Puzzle 1: 3x3x3 Medium
//! Layer 0
//!   C A T
//!   ...
//! 0
//! extended: C [0]
//! 1
//! extended: CA [0, 1]
//! 2
//! committed: CAT (+30)
//! ```

use clap::Parser;
use log::debug;
use serde::Serialize;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use vanishing_cube::dictionary::{Dictionary, WordOracle};
use vanishing_cube::generator::difficulty::Difficulty;
use vanishing_cube::generator::puzzle::{Puzzle, PuzzleGenerator};
use vanishing_cube::selection::TapOutcome;
use vanishing_cube::session::{GameSession, SessionSummary};

/// Generate Vanishing Cube puzzles and play them from the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Difficulty level for the puzzle
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Cube size (defaults to the size for the difficulty level)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=8))]
    size: Option<u16>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1, conflicts_with = "play")]
    count: usize,

    /// Word list file to use as the dictionary, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Print the puzzles and results in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Play a game, reading cell IDs from the standard input
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false, conflicts_with = "play")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn run() -> ExitCode {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let dictionary: Dictionary = match &args.words {
        Some(path) => match Dictionary::from_file(path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Cannot read the word list {}: {e}", path.display());
                return ExitCode::from(1);
            }
        },
        None => Dictionary::embedded(),
    };
    if dictionary.is_empty() {
        eprintln!("Warning: the dictionary is empty, no word can be found");
    }
    let oracle: Arc<dyn WordOracle> = Arc::new(dictionary);
    let size: usize = args
        .size
        .map(usize::from)
        .unwrap_or(args.difficulty.cube_size());

    let res: Result<(), Box<dyn Error>> = if args.play {
        play(&args, size, oracle)
    } else {
        generate(&args, size, oracle)
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Print a value in JSON format.
fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a puzzle in text format.
fn print_puzzle(number: usize, puzzle: &Puzzle) {
    println!(
        "Puzzle {number}: {}x{0}x{0} {}",
        puzzle.size(),
        puzzle.difficulty
    );
    print!("{}", puzzle.cube);
    let words: Vec<&str> = puzzle.embedded_words.iter().map(|w| w.as_str()).collect();
    println!("Embedded words: {}", words.join(", "));
}

/// Generate and print puzzles.
fn generate(args: &Args, size: usize, oracle: Arc<dyn WordOracle>) -> Result<(), Box<dyn Error>> {
    let mut generator: PuzzleGenerator = PuzzleGenerator::new(oracle);
    let mut puzzles: Vec<Puzzle> = Vec::with_capacity(args.count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut embedded: usize = 0;
    let mut attempted: usize = 0;
    let mut iterations: usize = 0;

    for i in 0..args.count {
        debug!("Iteration {i}");
        let puzzle: Puzzle = generator.generate(size, args.difficulty);

        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iteration;
        attempted += generator.attempted;
        embedded += puzzle.embedded_words.len();

        if args.json {
            puzzles.push(puzzle);
        } else {
            print_puzzle(i + 1, &puzzle);
        }
    }
    if args.json {
        print_json(&puzzles)?;
    }

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
    embedded words = {} of {}",
            total,
            total / args.count as f32,
            max,
            iterations / args.count,
            embedded,
            attempted
        );
    }
    Ok(())
}

/// Play a game from the standard input.
fn play(args: &Args, size: usize, oracle: Arc<dyn WordOracle>) -> Result<(), Box<dyn Error>> {
    let puzzle: Puzzle = PuzzleGenerator::new(Arc::clone(&oracle)).generate(size, args.difficulty);
    if args.json {
        print_json(&puzzle)?;
    } else {
        print_puzzle(1, &puzzle);
    }
    let mut session: GameSession = GameSession::new(puzzle, oracle);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line: String = line?;
        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "pause" => {
                session.pause();
                println!("paused");
            }
            "resume" => {
                session.resume();
                println!("resumed");
            }
            "show" => print!("{}", session.cube()),
            input => match input.parse::<usize>() {
                Ok(cell) => {
                    let outcome: TapOutcome = session.tap(cell);
                    if args.json {
                        println!("{}", serde_json::to_string(&outcome)?);
                    } else {
                        println!("{outcome}");
                    }
                }
                Err(_) => eprintln!("Not a cell ID or a command: {input}"),
            },
        }
        io::stdout().flush()?;
        if session.is_over() {
            break;
        }
    }

    let summary: SessionSummary = session.end();
    if args.json {
        print_json(&summary)?;
    } else {
        println!(
            "Score: {}\nWords found ({}): {}\nLongest word: {}\nVanished letters: {}",
            summary.score,
            summary.word_count,
            summary.words_found.join(", "),
            summary.longest_word,
            summary.removed_letters
        );
    }
    Ok(())
}
