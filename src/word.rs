// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::fmt::{self, Display, Formatter};

/// Number of bytes making up a single word.
pub const WORD_SIZE: usize = 4;

/// Width of a formatted word, in binary digits.
const WORD_BITS: usize = WORD_SIZE * 8;

/// Decodes a little-endian word. Missing trailing bytes count as zero and
/// anything past the fourth byte is ignored.
pub fn bytes_to_le_word(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(WORD_SIZE)
        .enumerate()
        .fold(0, |acc, (i, b)| acc | ((*b as u32) << (i * 8)))
}

pub fn format_word(word: u32) -> String {
    Word(word).to_string()
}

/// A 32-bit word read from a binary image.
///
/// Displays as exactly 32 binary digits, most significant bit first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word(pub u32);

impl Word {
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        Self(bytes_to_le_word(bytes))
    }
}

impl From<u32> for Word {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Word> for u32 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = WORD_BITS)
    }
}
