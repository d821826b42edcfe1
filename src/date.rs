//! Date extraction from screenshot file names.

use regex::Regex;
use std::sync::LazyLock;

/// An 8-digit token delimited by underscores, e.g. `scores_20230901_x.webp`
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([0-9]{8})_").expect("date token pattern is valid"));

/// Extract a `YYYY-MM-DD` date from a file name containing `_YYYYMMDD_`.
///
/// The digits are not checked against the calendar: `_20241399_` yields
/// `2024-13-99`. Returns `None` when no token is present.
pub fn parse_filename_date(filename: &str) -> Option<String> {
    let digits = DATE_TOKEN.captures(filename)?.get(1)?.as_str();
    Some(format!(
        "{}-{}-{}",
        &digits[..4],
        &digits[4..6],
        &digits[6..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_delimited_token() {
        assert_eq!(
            parse_filename_date("match_20240115_final.webp"),
            Some("2024-01-15".to_string())
        );
    }

    #[test]
    fn test_missing_token_is_none() {
        assert_eq!(parse_filename_date("match_final.webp"), None);
    }

    #[test]
    fn test_token_requires_both_underscores() {
        assert_eq!(parse_filename_date("match20240115_final.webp"), None);
        assert_eq!(parse_filename_date("match_20240115.webp"), None);
    }

    #[test]
    fn test_wrong_digit_count_is_none() {
        assert_eq!(parse_filename_date("match_2024011_final.webp"), None);
        assert_eq!(parse_filename_date("match_202401155_final.webp"), None);
    }

    #[test]
    fn test_first_token_wins() {
        assert_eq!(
            parse_filename_date("a_20230901_b_20231002_c.webp"),
            Some("2023-09-01".to_string())
        );
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(
            parse_filename_date("x_20241399_y.webp"),
            Some("2024-13-99".to_string())
        );
    }

    #[test]
    fn test_non_ascii_digits_do_not_match() {
        assert_eq!(parse_filename_date("x_２０２４０１１５_y.webp"), None);
    }
}
