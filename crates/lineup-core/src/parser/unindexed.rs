//! Listings without channel numbers; every record gets index 0.

use super::clean_lines;
use crate::ChannelRecord;

/// Alternating logo/name lines: the 2nd, 4th, 6th... lines are names.
///
/// The first line is the leading logo. A final logo with no name after it
/// is dropped.
pub fn parse_logo_name_pairs(text: &str) -> Vec<ChannelRecord> {
    clean_lines(text)
        .skip(1)
        .step_by(2)
        .map(ChannelRecord::unindexed)
        .collect()
}

/// One channel name per non-blank line.
pub fn parse_names(text: &str) -> Vec<ChannelRecord> {
    clean_lines(text).map(ChannelRecord::unindexed).collect()
}
