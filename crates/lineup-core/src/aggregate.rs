//! Lineup table - which territory carries which channel
//!
//! Records from every territory are folded into one map keyed by
//! `(index, name)`. A key is only ever added and a presence flag is only
//! ever set, so folding is order-independent and idempotent.
//!
//! # Row order
//!
//! Rows come out sorted by index, then by name in code point order. The
//! map is a `BTreeMap`, so that order is the map's own iteration order.

use std::collections::BTreeMap;

use crate::{ChannelKey, ChannelRecord, TerritoryCode};

/// Presence flags, one per territory in [`TerritoryCode::ALL`] order
pub type Presence = [bool; TerritoryCode::COUNT];

/// Header of the projected table
pub const INDEX_HEADER: &str = "Index";
pub const CHANNEL_HEADER: &str = "Channel";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelTable {
    channels: BTreeMap<ChannelKey, Presence>,
}

impl ChannelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every record as carried by `territory`.
    pub fn fold<I>(&mut self, territory: TerritoryCode, records: I)
    where
        I: IntoIterator<Item = ChannelRecord>,
    {
        let column = territory.column();
        for record in records {
            let presence = self
                .channels
                .entry(record)
                .or_insert([false; TerritoryCode::COUNT]);
            presence[column] = true;
        }
    }

    /// Number of distinct channel keys
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn presence(&self, key: &ChannelKey) -> Option<&Presence> {
        self.channels.get(key)
    }

    /// Number of rows flagged for `territory`
    pub fn carried_by(&self, territory: TerritoryCode) -> usize {
        let column = territory.column();
        self.channels.values().filter(|p| p[column]).count()
    }

    /// Sorted rows, one per key
    pub fn rows(&self) -> Vec<TableRow> {
        self.channels
            .iter()
            .map(|(key, presence)| TableRow {
                index: key.index,
                name: key.name.clone(),
                presence: *presence,
            })
            .collect()
    }

    /// `Index, Channel` followed by the territory codes
    pub fn headers() -> Vec<String> {
        [INDEX_HEADER, CHANNEL_HEADER]
            .into_iter()
            .chain(TerritoryCode::ALL.iter().map(|t| t.as_str()))
            .map(str::to_string)
            .collect()
    }
}

/// One projected row of the lineup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub index: u64,
    pub name: String,
    pub presence: Presence,
}

impl TableRow {
    /// Flag for one territory as written to the table (0 or 1)
    pub fn flag(&self, territory: TerritoryCode) -> u8 {
        u8::from(self.presence[territory.column()])
    }

    /// Cells in header order
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(2 + TerritoryCode::COUNT);
        cells.push(self.index.to_string());
        cells.push(self.name.clone());
        cells.extend(TerritoryCode::ALL.iter().map(|t| self.flag(*t).to_string()));
        cells
    }
}
