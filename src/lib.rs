// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::io::{self, Write};
use std::path::PathBuf;

pub mod cli;
pub mod emit;
pub mod image;
pub mod word;

pub use emit::{convert, emit};
pub use image::Image;
pub use word::{Word, WORD_SIZE};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not create {}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write word listing")]
    Write(#[from] io::Error),
    #[error("{0} words do not fit in memory")]
    WordCountOverflow(usize),
}

pub struct Options<W: Write> {
    pub writer: W,
    pub word_count: usize,
}

impl<W: Write> Options<W> {
    /// Create a new `Options` object writing `word_count` words to `writer`.
    pub fn new(writer: W, word_count: usize) -> Self {
        Self { writer, word_count }
    }
}
