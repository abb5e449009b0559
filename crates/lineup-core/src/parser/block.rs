//! Block listings where the channel number sits on its own line
//!
//! ```text
//! 101
//! +ONLINE
//! Channel logo
//! TVR 1
//! ```
//!
//! The scan is a single forward pointer: a purely numeric line opens a
//! block, the next usable line closes it as the name, and anything between
//! blocks is ignored. Exports repeat whole sections, so identical
//! `(index, name)` results are collapsed to their first occurrence.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{clean_lines, dedup_records};
use crate::ChannelRecord;

// ASCII digits only, like the numbered parsers.
static INDEX_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?-u:\d)+$").expect("valid index-line regex"));

const ONLINE_MARKER: &str = "+ONLINE";
const LOGO_PLACEHOLDER: &str = "channel logo";

/// Index line immediately followed by the name line.
pub fn parse_index_blocks(text: &str) -> Vec<ChannelRecord> {
    scan_blocks(text, |_| false)
}

/// Index line, then any `+ONLINE` / `channel logo` lines, then the name line.
pub fn parse_index_blocks_with_markers(text: &str) -> Vec<ChannelRecord> {
    scan_blocks(text, is_marker)
}

fn is_marker(line: &str) -> bool {
    line == ONLINE_MARKER || line.to_lowercase() == LOGO_PLACEHOLDER
}

fn index_of(line: &str) -> Option<u64> {
    if INDEX_LINE.is_match(line) {
        line.parse().ok()
    } else {
        None
    }
}

fn scan_blocks(text: &str, skip: impl Fn(&str) -> bool) -> Vec<ChannelRecord> {
    let lines: Vec<&str> = clean_lines(text).collect();
    let mut records = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if let Some(index) = index_of(lines[i]) {
            i += 1;
            while i < lines.len() && skip(lines[i]) {
                i += 1;
            }
            // Taken verbatim, even when it looks like another index.
            if let Some(name) = lines.get(i) {
                records.push(ChannelRecord::new(index, *name));
            }
        }
        i += 1;
    }

    dedup_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_logo_placeholder_skipped() {
        assert_eq!(
            parse_index_blocks_with_markers("7\nchannel logo\nNews HD"),
            vec![ChannelRecord::new(7, "News HD")]
        );
    }

    #[test]
    fn test_markers_any_mix_skipped() {
        let text = "101\n+ONLINE\nChannel Logo\n  CHANNEL LOGO \nTVR 1\n102\nPro TV\n";
        assert_eq!(
            parse_index_blocks_with_markers(text),
            vec![ChannelRecord::new(101, "TVR 1"), ChannelRecord::new(102, "Pro TV")]
        );
    }

    #[test]
    fn test_online_marker_is_case_sensitive() {
        assert_eq!(
            parse_index_blocks_with_markers("5\n+online\nAntena 1"),
            vec![ChannelRecord::new(5, "+online")]
        );
    }

    #[test]
    fn test_markers_duplicates_collapse() {
        let text = "7\nchannel logo\nNews HD\n7\n+ONLINE\nNews HD\n7\nNews HD 2";
        assert_eq!(
            parse_index_blocks_with_markers(text),
            vec![ChannelRecord::new(7, "News HD"), ChannelRecord::new(7, "News HD 2")]
        );
    }

    #[test]
    fn test_markers_trailing_index_without_name() {
        assert_eq!(
            parse_index_blocks_with_markers("1\nDigi 24\n2\n+ONLINE\nchannel logo"),
            vec![ChannelRecord::new(1, "Digi 24")]
        );
    }

    #[test]
    fn test_text_between_blocks_ignored() {
        let text = "Pachet Standard\nTop canale\n3\nKanal D\nnote: HD only\n4\nPrima TV";
        assert_eq!(
            parse_index_blocks_with_markers(text),
            vec![ChannelRecord::new(3, "Kanal D"), ChannelRecord::new(4, "Prima TV")]
        );
    }

    #[test]
    fn test_plain_blocks_name_is_next_line() {
        let text = "\n1\n\n  Top Channel \n2\nKlan\n";
        assert_eq!(
            parse_index_blocks(text),
            vec![ChannelRecord::new(1, "Top Channel"), ChannelRecord::new(2, "Klan")]
        );
    }

    #[test]
    fn test_plain_blocks_do_not_skip_markers() {
        assert_eq!(
            parse_index_blocks("7\nchannel logo\nNews HD"),
            vec![ChannelRecord::new(7, "channel logo")]
        );
    }

    #[test]
    fn test_plain_blocks_numeric_name_consumed() {
        // "2" is taken as the name of block 1 and cannot open its own block
        assert_eq!(
            parse_index_blocks("1\n2\nRTSH"),
            vec![ChannelRecord::new(1, "2")]
        );
    }

    #[test]
    fn test_plain_blocks_dedup_across_sections() {
        let text = "1\nTop Channel\n2\nKlan\n1\nTop Channel\n";
        assert_eq!(
            parse_index_blocks(text),
            vec![ChannelRecord::new(1, "Top Channel"), ChannelRecord::new(2, "Klan")]
        );
    }

    #[test]
    fn test_index_line_must_be_only_digits() {
        assert!(parse_index_blocks("1a\nName\n 1 2\nOther").is_empty());
    }

    #[test]
    fn test_non_ascii_digit_line_does_not_open_block() {
        assert!(parse_index_blocks("٣\nName").is_empty());
        assert_eq!(
            parse_index_blocks_with_markers("٣\nName\n4\nTVR 2"),
            vec![ChannelRecord::new(4, "TVR 2")]
        );
    }
}
