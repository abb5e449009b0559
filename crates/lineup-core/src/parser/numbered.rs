//! Single-line numbered listings: `<number> <name>`

use once_cell::sync::Lazy;
use regex::Regex;

use super::clean_lines;
use crate::ChannelRecord;

// Indexes are ASCII digits only; other Unicode decimal digits are not numbers here.
static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((?-u:\d)+)\s+(.+)$").expect("valid numbered-line regex"));

// Lazy name so the first ` x` ends it; the annotation itself is optional.
static NUMBERED_LINE_WITH_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((?-u:\d)+)\s+(.+?)(?:\s+x.*)?$").expect("valid suffixed-line regex")
});

/// Default parser: every line shaped `12 Channel One` becomes `(12, "Channel One")`.
pub fn parse_numbered(text: &str) -> Vec<ChannelRecord> {
    parse_with(&NUMBERED_LINE, text)
}

/// Like [`parse_numbered`], but drops a trailing ` x...` annotation.
///
/// `5 Sport Channel x HD variant` becomes `(5, "Sport Channel")`. Only a
/// lowercase `x` preceded by whitespace starts the annotation.
pub fn parse_numbered_trim_suffix(text: &str) -> Vec<ChannelRecord> {
    parse_with(&NUMBERED_LINE_WITH_SUFFIX, text)
}

fn parse_with(pattern: &Regex, text: &str) -> Vec<ChannelRecord> {
    clean_lines(text)
        .filter_map(|line| {
            let caps = pattern.captures(line)?;
            // Digit runs that overflow the index type are malformed lines.
            let index = caps[1].parse::<u64>().ok()?;
            let name = caps[2].trim();
            (!name.is_empty()).then(|| ChannelRecord::new(index, name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_line() {
        assert_eq!(
            parse_numbered("12 Channel One"),
            vec![ChannelRecord::new(12, "Channel One")]
        );
    }

    #[test]
    fn test_numbered_skips_lines_without_leading_digits() {
        let text = "Channel list\n1 BBC One\n  \nHD channels:\n  2\tITV  \nBBC Two 3\n";
        assert_eq!(
            parse_numbered(text),
            vec![ChannelRecord::new(1, "BBC One"), ChannelRecord::new(2, "ITV")]
        );
    }

    #[test]
    fn test_numbered_requires_whitespace_and_name() {
        // No separator, or a bare number, is not a channel line
        assert!(parse_numbered("12Channel\n13\n14 ").is_empty());
    }

    #[test]
    fn test_numbered_keeps_inner_spacing_and_x() {
        assert_eq!(
            parse_numbered("007 Nova  Sport x HD"),
            vec![ChannelRecord::new(7, "Nova  Sport x HD")]
        );
    }

    #[test]
    fn test_numbered_skips_overflowing_index() {
        let text = "99999999999999999999999 Huge\n4 Fine";
        assert_eq!(parse_numbered(text), vec![ChannelRecord::new(4, "Fine")]);
    }

    #[test]
    fn test_suffix_trimmed() {
        assert_eq!(
            parse_numbered_trim_suffix("5 Sport Channel x HD variant"),
            vec![ChannelRecord::new(5, "Sport Channel")]
        );
    }

    #[test]
    fn test_suffix_absent_keeps_whole_name() {
        assert_eq!(
            parse_numbered_trim_suffix("6 RTP Internacional"),
            vec![ChannelRecord::new(6, "RTP Internacional")]
        );
    }

    #[test]
    fn test_suffix_cut_at_first_x_word() {
        assert_eq!(
            parse_numbered_trim_suffix("8 SIC Radical x2 x HD"),
            vec![ChannelRecord::new(8, "SIC Radical")]
        );
    }

    #[test]
    fn test_suffix_requires_lowercase_x_after_whitespace() {
        let text = "9 Fox Life\n10 Box X Music\n11 Maxx";
        assert_eq!(
            parse_numbered_trim_suffix(text),
            vec![
                ChannelRecord::new(9, "Fox Life"),
                ChannelRecord::new(10, "Box X Music"),
                ChannelRecord::new(11, "Maxx"),
            ]
        );
    }

    #[test]
    fn test_suffix_parser_skips_malformed_lines() {
        let text = "Canais\n1 RTP1 x 1080i\nx\n2 RTP2";
        assert_eq!(
            parse_numbered_trim_suffix(text),
            vec![ChannelRecord::new(1, "RTP1"), ChannelRecord::new(2, "RTP2")]
        );
    }

    #[test]
    fn test_non_ascii_digits_are_not_indexes() {
        // Arabic-Indic and fullwidth digits
        let text = "١٢ Channel\n１ Wide\n3 Kept";
        assert_eq!(parse_numbered(text), vec![ChannelRecord::new(3, "Kept")]);
        assert_eq!(
            parse_numbered_trim_suffix("٥ Sport x HD\n5 Sport x HD"),
            vec![ChannelRecord::new(5, "Sport")]
        );
    }
}
