// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use log::info;
use std::io::Write;
use std::path::Path;

use crate::image::Image;
use crate::{Error, Options};

/// Writes `options.word_count` words of `image`, one 32-digit binary line
/// per word, and returns the number of lines written.
pub fn emit<W: Write>(image: &Image, options: &mut Options<W>) -> Result<usize, Error> {
    let mut lines = 0;

    for word in image.words(options.word_count) {
        writeln!(options.writer, "{}", word)?;
        lines += 1;
    }

    options.writer.flush()?;

    Ok(lines)
}

pub fn convert<W: Write>(bin_file: &Path, options: &mut Options<W>) -> Result<usize, Error> {
    let mut image = Image::load(bin_file)?;
    image.pad(options.word_count)?;

    let lines = emit(&image, options)?;
    info!("wrote {} words from {}", lines, bin_file.display());

    Ok(lines)
}
