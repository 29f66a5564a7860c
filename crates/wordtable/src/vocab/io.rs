//! # Vocabulary Text IO
//!
//! Token files hold one token per line:
//! ```terminaloutput
//! token1
//! token2
//! ...
//! ```
//!
//! The vocabulary is built in the order tokens first appear in the file,
//! not by frequency.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::WTResult,
    vocab::{FrequencyCounter, VocabBuild, VocabOptions},
};

/// Read token lines into a [`FrequencyCounter`].
///
/// Trailing whitespace is stripped; blank lines are skipped.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_token_lines<R: BufRead>(reader: R) -> WTResult<FrequencyCounter> {
    let mut counter = FrequencyCounter::new();
    for line in reader.lines() {
        let line = line?;
        let token = line.trim_end();
        if token.is_empty() {
            continue;
        }
        counter.add(token);
    }
    Ok(counter)
}

/// Build a vocabulary from a token-per-line reader.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `options` - the build options.
pub fn vocab_from_reader<R: BufRead>(
    reader: R,
    options: &VocabOptions,
) -> WTResult<VocabBuild> {
    let counter = read_token_lines(reader)?;
    log::info!("read {} distinct tokens", counter.len());
    options.build(counter.into_ordered_by_first_seen())
}

/// Build a vocabulary from a token-per-line file.
///
/// ## Arguments
/// * `path` - the path to the token file.
/// * `options` - the build options.
pub fn load_vocab_path<P: AsRef<Path>>(
    path: P,
    options: &VocabOptions,
) -> WTResult<VocabBuild> {
    let reader = BufReader::new(File::open(path)?);
    vocab_from_reader(reader, options)
}
