/*
word_list.rs

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

//! Curated words that the generator tries to embed.
//!
//! These are short, common words that fit easily in a small cube.
//! Before embedding, the generator keeps only the words that the dictionary in use accepts.

pub const CURATED_WORDS: &[&str] = &[
    "CAT", "DOG", "BAT", "RAT", "MAT", "HAT", "SAT", "FAT", "THE", "AND", "FOR", "ARE", "BUT",
    "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR", "OUT", "DAY", "GET", "HAS", "HIM",
    "HIS", "HOW", "ITS", "MAY", "NEW", "NOW", "OLD", "SEE", "TWO", "WHO", "BOY", "DID", "LET",
    "PUT", "SAY", "SHE", "TOO", "USE", "WORD", "ABLE", "BACK", "BALL", "BAND", "BANK", "BASE",
    "BEAR", "BEAT", "BEEN", "BELL", "BEST", "BILL", "BIRD", "BLOW", "BLUE", "BOAT", "BODY",
    "BOOK", "BORN", "BOTH", "BOYS", "BUSY", "CALL", "CALM", "CAME", "CAMP", "CARD", "CARE",
    "CASE", "CAST", "CAVE", "CHIP", "CITY", "CLAY", "CLUB", "COAL", "COAT", "CODE", "COLD",
    "COME", "COOK", "COOL", "COPY", "CORD", "CORE", "CORN", "COST", "CREW", "CROP", "CROW",
    "CUBE", "APPLE", "BEACH", "BREAD", "CHAIR", "CLOUD", "DREAM", "EARTH", "GRAPE", "HOUSE",
    "LIGHT", "MUSIC", "OCEAN", "PLANT", "RIVER", "STONE", "TABLE", "WATER", "WORLD", "ANIMAL",
    "BRIDGE", "CASTLE", "FLOWER", "FOREST", "GARDEN", "PLANET", "PUZZLE", "WINDOW", "WINTER",
];
