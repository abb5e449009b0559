//! Lineup Core - per-territory channel listing parsers and the lineup matrix
//!
//! Each territory exports its channel lineup as loosely structured text in
//! its own format. This crate normalizes every format into
//! `(index, name)` records and folds them into one table that says which
//! territories carry which channel.
//!
//! # Architecture
//!
//! ```text
//! listing text → parser (per territory) → ChannelRecords
//!                                            ↓
//!                                      ChannelTable (presence per territory)
//!                                            ↓
//!                                      sorted rows → CSV / TSV / XLSX
//! ```
//!
//! # Guarantees
//!
//! - **Tolerant**: a malformed line is skipped, never fatal
//! - **Exact**: two records are the same channel only if index and name match exactly
//! - **Deterministic**: row order depends only on the keys, not on input order
//! - **All or nothing**: the table is written only after every input was read

pub mod aggregate;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod territory;

pub use aggregate::{ChannelTable, TableRow};
pub use error::{Error, Result};
pub use output::OutputFormat;
pub use parser::ListingFormat;
pub use pipeline::{RunReport, SkippedInput, TerritorySummary};
pub use territory::{InputSpec, TerritoryCode};

/// One channel as read from a territory listing
///
/// A record is its own identity: two records are the same channel exactly
/// when both index and name are equal. Formats without channel numbers use
/// index 0 for every record. Ordering is by index, then by name.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct ChannelRecord {
    pub index: u64,
    pub name: String,
}

/// Row identity in the lineup table
pub type ChannelKey = ChannelRecord;

impl ChannelRecord {
    pub fn new(index: u64, name: impl Into<String>) -> Self {
        ChannelRecord {
            index,
            name: name.into(),
        }
    }

    /// Record for a format that carries no channel number
    pub fn unindexed(name: impl Into<String>) -> Self {
        Self::new(0, name)
    }
}
