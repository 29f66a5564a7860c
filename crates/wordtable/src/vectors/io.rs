//! # Vector Text IO
//!
//! Two line layouts are supported:
//!
//! [`VectorTextFormat::Csv`]:
//! ```terminaloutput
//! token1,num1 num2 num3
//! token2,num4 num5 num6
//! ```
//!
//! [`VectorTextFormat::Whitespace`] (GloVe / fastText `.vec` files):
//! ```terminaloutput
//! token1 num1 num2 num3
//! token2 num4 num5 num6
//! ```
//!
//! Fetching and unpacking pretrained vector files is left to the caller;
//! these readers start from a local file or an open reader.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{WTResult, WordtableError},
    types::WTHashSet,
    vectors::{VectorData, VectorTable},
};

/// Parse whitespace-separated floats.
///
/// ## Returns
/// The values, or [`WordtableError::Parse`] naming the first bad number.
pub fn parse_vector(text: &str) -> WTResult<Vec<f32>> {
    text.split_whitespace()
        .map(|c| {
            c.parse::<f32>()
                .map_err(|e| WordtableError::Parse(format!("{c:?}: {e}")))
        })
        .collect()
}

/// Line layout of a vector text file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VectorTextFormat {
    /// ``token,num num num``
    #[default]
    Csv,

    /// ``token num num num``
    Whitespace,
}

/// What to do when a token appears on more than one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with [`WordtableError::DuplicateKey`].
    #[default]
    Error,

    /// Keep the first line's vector and skip the rest.
    KeepFirst,
}

/// Options for reading vector text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorReadOptions {
    /// The line layout.
    pub format: VectorTextFormat,

    /// Skip a leading ``count dim`` header line.
    pub skip_header: bool,

    /// Duplicate token handling.
    pub duplicates: DuplicatePolicy,
}

impl VectorReadOptions {
    /// Set the line layout.
    pub fn with_format(
        mut self,
        format: VectorTextFormat,
    ) -> Self {
        self.format = format;
        self
    }

    /// Set whether to skip a header line.
    pub fn with_skip_header(
        mut self,
        skip_header: bool,
    ) -> Self {
        self.skip_header = skip_header;
        self
    }

    /// Set the duplicate token handling.
    pub fn with_duplicates(
        mut self,
        duplicates: DuplicatePolicy,
    ) -> Self {
        self.duplicates = duplicates;
        self
    }
}

/// Collects parsed records, applying the duplicate policy.
struct RecordCollector {
    duplicates: DuplicatePolicy,
    seen: WTHashSet<String>,
    records: Vec<(String, Vec<f32>)>,
    skipped: usize,
}

impl RecordCollector {
    fn new(duplicates: DuplicatePolicy) -> Self {
        Self {
            duplicates,
            seen: WTHashSet::default(),
            records: Vec::new(),
            skipped: 0,
        }
    }

    fn push(
        &mut self,
        line_no: u64,
        token: &str,
        values: &str,
    ) -> WTResult<()> {
        if self.seen.contains(token) {
            match self.duplicates {
                DuplicatePolicy::Error => {
                    return Err(WordtableError::DuplicateKey(token.to_string()));
                }
                DuplicatePolicy::KeepFirst => {
                    log::debug!("line {line_no}: skipping duplicate token {token:?}");
                    self.skipped += 1;
                    return Ok(());
                }
            }
        }

        let vector = parse_vector(values).map_err(|e| match e {
            WordtableError::Parse(msg) => WordtableError::Parse(format!("line {line_no}: {msg}")),
            other => other,
        })?;
        self.seen.insert(token.to_string());
        self.records.push((token.to_string(), vector));
        Ok(())
    }

    fn finish(self) -> Vec<(String, Vec<f32>)> {
        if self.skipped > 0 {
            log::info!("skipped {} duplicate vector records", self.skipped);
        }
        self.records
    }
}

/// Read ``(token, vector)`` records from a line reader.
///
/// Blank lines are skipped. [`VectorTextFormat::Csv`] input follows CSV
/// quoting rules; the token is the first field, the numbers the second,
/// and any further fields are ignored.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `options` - the read options.
pub fn read_vector_records<R: BufRead>(
    reader: R,
    options: &VectorReadOptions,
) -> WTResult<Vec<(String, Vec<f32>)>> {
    let mut collector = RecordCollector::new(options.duplicates);
    let mut header_pending = options.skip_header;

    match options.format {
        VectorTextFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(reader);

            for result in csv_reader.records() {
                let record = result?;
                if record.iter().all(|field| field.trim().is_empty()) {
                    continue;
                }
                if header_pending {
                    header_pending = false;
                    continue;
                }

                let line_no = record.position().map_or(0, |pos| pos.line());
                match (record.get(0), record.get(1)) {
                    (Some(token), Some(values)) => collector.push(line_no, token, values)?,
                    _ => {
                        return Err(WordtableError::Parse(format!(
                            "line {line_no}: expected a csv record, found {record:?}"
                        )));
                    }
                }
            }
        }
        VectorTextFormat::Whitespace => {
            for (line_no, line) in (1..).zip(reader.lines()) {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                if header_pending {
                    header_pending = false;
                    continue;
                }

                let (token, values) = line.split_once(char::is_whitespace).ok_or_else(|| {
                    WordtableError::Parse(format!(
                        "line {line_no}: expected a whitespace record, found {line:?}"
                    ))
                })?;
                collector.push(line_no, token, values)?;
            }
        }
    }

    Ok(collector.finish())
}

/// Build a [`VectorTable`] from a line reader.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `options` - the read options.
/// * `unk_vector` - the fallback vector; defaults to zeros.
pub fn vectors_from_reader<R: BufRead>(
    reader: R,
    options: &VectorReadOptions,
    unk_vector: Option<VectorData>,
) -> WTResult<VectorTable> {
    let records = read_vector_records(reader, options)?;
    log::info!("read {} vector records", records.len());
    VectorTable::from_pairs(records, unk_vector)
}

/// Build a [`VectorTable`] from a local vector file.
///
/// ## Arguments
/// * `path` - the path to the vector file.
/// * `options` - the read options.
/// * `unk_vector` - the fallback vector; defaults to zeros.
pub fn load_vectors_path<P: AsRef<Path>>(
    path: P,
    options: &VectorReadOptions,
    unk_vector: Option<VectorData>,
) -> WTResult<VectorTable> {
    let reader = BufReader::new(File::open(path)?);
    vectors_from_reader(reader, options, unk_vector)
}
