//! Listing parsers - one text format per territory
//!
//! Every parser is a pure function from listing text to an ordered list of
//! [`ChannelRecord`]s. Lines are trimmed before matching, blank lines are
//! never data, and a line that does not fit the format is skipped.
//!
//! The dispatcher maps a territory to its [`ListingFormat`] through a fixed
//! table and falls back to [`ListingFormat::Numbered`] for territories that
//! use the default `<number> <name>` shape.

pub mod block;
pub mod document;
pub mod numbered;
pub mod unindexed;

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::{ChannelRecord, Error, Result, TerritoryCode};

/// The listing formats understood by the parser set
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingFormat {
    /// `12 Channel One` per line
    Numbered,
    /// `12 Channel One x HD` per line, ` x...` annotation dropped
    NumberedTrimSuffix,
    /// Number line followed by name line
    IndexBlocks,
    /// Number line, optional `+ONLINE` / `channel logo` lines, name line
    IndexBlocksWithMarkers,
    /// Alternating logo and name lines, no numbers
    LogoNamePairs,
    /// One name per line, no numbers
    Names,
}

impl ListingFormat {
    pub fn parse(self, text: &str) -> Vec<ChannelRecord> {
        match self {
            ListingFormat::Numbered => numbered::parse_numbered(text),
            ListingFormat::NumberedTrimSuffix => numbered::parse_numbered_trim_suffix(text),
            ListingFormat::IndexBlocks => block::parse_index_blocks(text),
            ListingFormat::IndexBlocksWithMarkers => block::parse_index_blocks_with_markers(text),
            ListingFormat::LogoNamePairs => unindexed::parse_logo_name_pairs(text),
            ListingFormat::Names => unindexed::parse_names(text),
        }
    }
}

/// Territories whose exports need a dedicated parser
const TERRITORY_FORMATS: [(TerritoryCode, ListingFormat); 6] = [
    (TerritoryCode::Al, ListingFormat::IndexBlocks),
    (TerritoryCode::Cz, ListingFormat::Numbered),
    (TerritoryCode::Ie, ListingFormat::LogoNamePairs),
    (TerritoryCode::Pt, ListingFormat::NumberedTrimSuffix),
    (TerritoryCode::Ro, ListingFormat::IndexBlocksWithMarkers),
    (TerritoryCode::Gr, ListingFormat::Names),
];

/// The dedicated format of a territory, if it has one
pub fn territory_format(territory: TerritoryCode) -> Option<ListingFormat> {
    TERRITORY_FORMATS
        .iter()
        .find(|(t, _)| *t == territory)
        .map(|(_, format)| *format)
}

/// Plain-text exports are recognized by a `.txt` suffix in any case.
pub fn is_plain_text(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".txt")
}

/// Choose the parser for one input
///
/// # Errors
/// Returns `UnsupportedFileType` for anything that is not plain text.
/// Callers skip that input and carry on.
pub fn select_format(territory: TerritoryCode, path: &Path) -> Result<ListingFormat> {
    if !is_plain_text(path) {
        return Err(Error::UnsupportedFileType(path.to_path_buf()));
    }
    Ok(territory_format(territory).unwrap_or(ListingFormat::Numbered))
}

/// Read one territory export and parse it with the selected format.
pub fn parse_file(territory: TerritoryCode, path: &Path) -> Result<Vec<ChannelRecord>> {
    let format = select_format(territory, path)?;
    read_listing(format, path)
}

/// Read a listing file in full, close it, then parse it as `format`.
pub fn read_listing(format: ListingFormat, path: &Path) -> Result<Vec<ChannelRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let records = format.parse(&text);
    debug!(
        ?format,
        path = %path.display(),
        records = records.len(),
        "parsed listing"
    );
    Ok(records)
}

// ── Shared helpers ─────────────────────────────────────────

/// Trimmed, non-blank lines. `\r\n`, `\n` and bare `\r` all end a line.
pub(crate) fn clean_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Drop repeated (index, name) pairs, keeping the first occurrence.
pub(crate) fn dedup_records(records: Vec<ChannelRecord>) -> Vec<ChannelRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}
