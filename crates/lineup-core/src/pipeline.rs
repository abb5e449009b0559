//! Run pipeline - read every territory, fold, then write once
//!
//! Inputs are processed strictly in order, one file at a time. An input
//! with an unsupported extension is skipped with a warning; every other
//! failure aborts the run before the output file is touched.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::output::{self, OutputFormat};
use crate::{parser, ChannelTable, Error, InputSpec, Result, TerritoryCode};

/// Records contributed by one territory
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TerritorySummary {
    pub territory: TerritoryCode,
    pub path: PathBuf,
    pub format: parser::ListingFormat,
    pub records: usize,
}

/// An input left out of the table
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SkippedInput {
    pub territory: TerritoryCode,
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RunReport {
    pub output: PathBuf,
    pub format: OutputFormat,
    pub rows: usize,
    pub territories: Vec<TerritorySummary>,
    pub skipped: Vec<SkippedInput>,
}

/// Table plus per-input bookkeeping, before anything is written
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub table: ChannelTable,
    pub territories: Vec<TerritorySummary>,
    pub skipped: Vec<SkippedInput>,
}

/// Parse and fold every input in order.
pub fn collect(inputs: &[InputSpec]) -> Result<Collected> {
    let mut collected = Collected::default();

    for input in inputs {
        let format = match parser::select_format(input.territory, &input.path) {
            Ok(format) => format,
            Err(err @ Error::UnsupportedFileType(_)) => {
                warn!(territory = %input.territory, "{}", err);
                collected.skipped.push(SkippedInput {
                    territory: input.territory,
                    path: input.path.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
            Err(err) => return Err(err),
        };

        let records = parser::read_listing(format, &input.path)?;
        collected.territories.push(TerritorySummary {
            territory: input.territory,
            path: input.path.clone(),
            format,
            records: records.len(),
        });
        collected.table.fold(input.territory, records);
    }

    Ok(collected)
}

/// Build the lineup table from `inputs` and write it to `out_path`.
///
/// # Errors
/// `UnsupportedOutputFormat` is returned before any input is read. Read
/// failures abort the run and leave `out_path` untouched.
pub fn run(inputs: &[InputSpec], out_path: &Path) -> Result<RunReport> {
    let format = OutputFormat::from_path(out_path)?;
    let Collected {
        table,
        territories,
        skipped,
    } = collect(inputs)?;

    output::write_table(&table, out_path, format)?;
    info!(
        inputs = inputs.len(),
        skipped = skipped.len(),
        rows = table.len(),
        "run complete"
    );

    Ok(RunReport {
        output: out_path.to_path_buf(),
        format,
        rows: table.len(),
        territories,
        skipped,
    })
}
