// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use log::debug;
use std::path::Path;

use crate::word::{Word, WORD_SIZE};
use crate::Error;

/// The raw contents of a firmware file.
///
/// An image is loaded once and only ever grows by zero padding at the end,
/// so a word at a given offset decodes the same before and after padding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} bytes from {}", bytes.len(), path.display());

        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends zero bytes until the image holds at least `word_count` words.
    /// Returns the number of bytes added; longer images are left untouched.
    pub fn pad(&mut self, word_count: usize) -> Result<usize, Error> {
        let needed = byte_len(word_count)?;

        if self.bytes.len() >= needed {
            return Ok(0);
        }

        let added = needed - self.bytes.len();
        debug!("padding image with {} zero bytes", added);
        self.bytes.resize(needed, 0);

        Ok(added)
    }

    /// Yields `word_count` little-endian words in file order. Bytes past the
    /// end of the image read as zero.
    pub fn words(&self, word_count: usize) -> impl Iterator<Item = Word> + '_ {
        (0..word_count).map(move |i| {
            let start = i.saturating_mul(WORD_SIZE).min(self.bytes.len());
            let end = (start + WORD_SIZE).min(self.bytes.len());
            Word::from_le_bytes(&self.bytes[start..end])
        })
    }
}

/// Byte length of `word_count` words. Allocations are capped at
/// `isize::MAX` bytes.
fn byte_len(word_count: usize) -> Result<usize, Error> {
    word_count
        .checked_mul(WORD_SIZE)
        .filter(|len| *len <= isize::MAX as usize)
        .ok_or(Error::WordCountOverflow(word_count))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pad_short_image() {
        let mut image = Image::from_bytes(vec![1, 2, 3]);
        assert_eq!(image.pad(2).unwrap(), 5);
        assert_eq!(image.as_bytes(), &[1, 2, 3, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_pad_never_truncates() {
        let mut image = Image::from_bytes(vec![0xAA; 10]);
        assert_eq!(image.pad(1).unwrap(), 0);
        assert_eq!(image.len(), 10);

        assert_eq!(image.pad(0).unwrap(), 0);
        assert_eq!(image.len(), 10);
    }

    #[test]
    fn test_pad_overflow() {
        let mut image = Image::default();
        assert!(matches!(
            image.pad(usize::MAX),
            Err(Error::WordCountOverflow(usize::MAX))
        ));
        assert!(image.is_empty());
    }

    #[test]
    fn test_pad_beyond_allocation_limit() {
        let word_count = usize::MAX / WORD_SIZE;
        let mut image = Image::default();
        assert!(matches!(
            image.pad(word_count),
            Err(Error::WordCountOverflow(n)) if n == word_count
        ));
        assert!(image.is_empty());

        let word_count = isize::MAX as usize / WORD_SIZE + 1;
        assert!(matches!(
            image.pad(word_count),
            Err(Error::WordCountOverflow(n)) if n == word_count
        ));
    }

    #[test]
    fn test_words_in_file_order() {
        let image = Image::from_bytes(vec![0x78, 0x56, 0x34, 0x12, 0x01, 0x00, 0x00, 0x00]);
        let words: Vec<u32> = image.words(2).map(u32::from).collect();
        assert_eq!(words, vec![0x12345678, 1]);
    }

    #[test]
    fn test_words_past_end_are_zero() {
        let image = Image::from_bytes(vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        let words: Vec<u32> = image.words(4).map(u32::from).collect();
        assert_eq!(words, vec![0xFFFFFFFF, 0x0000FFFF, 0, 0]);
    }

    #[test]
    fn test_words_unchanged_by_padding() {
        let mut image = Image::from_bytes(vec![0x10, 0x20, 0x30, 0x40, 0x50]);
        let before: Vec<Word> = image.words(3).collect();
        image.pad(3).unwrap();
        let after: Vec<Word> = image.words(3).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_zero_words() {
        let image = Image::from_bytes(vec![1, 2, 3, 4]);
        assert_eq!(image.words(0).count(), 0);
    }
}
