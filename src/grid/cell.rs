//! Grid cells and score entry parsing.

use serde::{Deserialize, Serialize};

use crate::rules::bidding;

/// One (round, player) entry of the score grid.
///
/// Which of the annotation fields are meaningful depends on the variant;
/// the grid itself stores all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Points for the round. `None` until entered.
    pub score: Option<i64>,

    /// Tricks bid, for bidding variants.
    pub bid: Option<i64>,

    /// The player went out this round.
    pub went_out: bool,

    /// The player holds the penalty card this round.
    pub penalty_holder: bool,
}

impl Cell {
    /// True when nothing has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Did the player make their bid?
    #[must_use]
    pub fn bid_succeeded(&self) -> bool {
        bidding::bid_succeeded(self.score, self.bid)
    }
}

/// Parse typed score or bid text.
///
/// Leading whitespace and a sign are accepted, then the longest run of
/// digits is read: `"12abc"` is 12 and `"3.7"` is 3. Text with no leading
/// digits, empty text and values outside `i64` all yield `None`, which the
/// grid stores as an unset cell.
#[must_use]
pub fn parse_entry(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let sign_len = usize::from(matches!(text.as_bytes().first(), Some(b'-' | b'+')));

    let digits = &text[sign_len..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    text[..sign_len + end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_entry("42"), Some(42));
        assert_eq!(parse_entry("0"), Some(0));
        assert_eq!(parse_entry("-15"), Some(-15));
        assert_eq!(parse_entry("+7"), Some(7));
        assert_eq!(parse_entry("  8"), Some(8));
    }

    #[test]
    fn test_parse_digit_prefix() {
        assert_eq!(parse_entry("12abc"), Some(12));
        assert_eq!(parse_entry("3.7"), Some(3));
        assert_eq!(parse_entry("5 "), Some(5));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_entry(""), None);
        assert_eq!(parse_entry("   "), None);
        assert_eq!(parse_entry("abc"), None);
        assert_eq!(parse_entry("-"), None);
        assert_eq!(parse_entry("--3"), None);
        assert_eq!(parse_entry(".5"), None);
    }

    #[test]
    fn test_parse_overflow_is_unset() {
        assert_eq!(parse_entry("99999999999999999999"), None);
        assert_eq!(parse_entry("-9223372036854775809"), None);
    }

    #[test]
    fn test_parse_i64_extremes() {
        assert_eq!(parse_entry("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_entry("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_entry(&i64::MIN.to_string()), Some(i64::MIN));
    }

    #[test]
    fn test_cell_empty() {
        let mut cell = Cell::default();
        assert!(cell.is_empty());

        cell.went_out = true;
        assert!(!cell.is_empty());
    }

    #[test]
    fn test_cell_bid_succeeded() {
        let cell = Cell {
            score: Some(12),
            bid: Some(2),
            ..Cell::default()
        };
        assert!(cell.bid_succeeded());
    }
}
