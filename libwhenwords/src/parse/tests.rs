use super::*;
use crate::duration::{DurationOptions, duration};

#[test]
fn test_compact_forms() {
    assert_eq!(parse_duration("2h30m").unwrap(), 9000);
    assert_eq!(parse_duration("2h 30m").unwrap(), 9000);
    assert_eq!(parse_duration("2h, 30m").unwrap(), 9000);
    assert_eq!(parse_duration("1d 2h 30m").unwrap(), 95400);
}

#[test]
fn test_verbose_forms() {
    assert_eq!(parse_duration("2 hours 30 minutes").unwrap(), 9000);
    assert_eq!(parse_duration("2 hours and 30 minutes").unwrap(), 9000);
    assert_eq!(parse_duration("2 hours, and 30 minutes").unwrap(), 9000);
    assert_eq!(parse_duration("1 day, 2 hours, and 30 minutes").unwrap(), 95400);
}

#[test]
fn test_decimals() {
    assert_eq!(parse_duration("2.5 hours").unwrap(), 9000);
    assert_eq!(parse_duration("1.5h").unwrap(), 5400);
}

#[test]
fn test_spellings() {
    assert_eq!(parse_duration("90 minutes").unwrap(), 5400);
    assert_eq!(parse_duration("90m").unwrap(), 5400);
    assert_eq!(parse_duration("90min").unwrap(), 5400);
    assert_eq!(parse_duration("30mins").unwrap(), 1800);
    assert_eq!(parse_duration("2hr").unwrap(), 7200);
    assert_eq!(parse_duration("2hrs").unwrap(), 7200);
    assert_eq!(parse_duration("45 seconds").unwrap(), 45);
    assert_eq!(parse_duration("45s").unwrap(), 45);
    assert_eq!(parse_duration("45sec").unwrap(), 45);
    assert_eq!(parse_duration("45 secs").unwrap(), 45);
    assert_eq!(parse_duration("2 days").unwrap(), 172800);
    assert_eq!(parse_duration("2d").unwrap(), 172800);
}

#[test]
fn test_weeks() {
    assert_eq!(parse_duration("1 week").unwrap(), 604800);
    assert_eq!(parse_duration("1w").unwrap(), 604800);
    assert_eq!(parse_duration("2wks").unwrap(), 1209600);
    assert_eq!(parse_duration("1w2d").unwrap(), 604800 + 172800);
}

#[test]
fn test_months_and_years() {
    assert_eq!(parse_duration("1mo").unwrap(), 2592000);
    assert_eq!(parse_duration("2 months").unwrap(), 5184000);
    assert_eq!(parse_duration("1y 2mo").unwrap(), 36720000);
    assert_eq!(parse_duration("1 year").unwrap(), 31536000);
    assert_eq!(parse_duration("3yrs").unwrap(), 94608000);
}

#[test]
fn test_colon_notation() {
    assert_eq!(parse_duration("2:30").unwrap(), 9000);
    assert_eq!(parse_duration("1:30:00").unwrap(), 5400);
    assert_eq!(parse_duration("0:05:30").unwrap(), 330);
    assert_eq!(parse_duration("100:00").unwrap(), 360000);
}

#[test]
fn test_case_and_whitespace() {
    assert_eq!(parse_duration("2H 30M").unwrap(), 9000);
    assert_eq!(parse_duration("  2 hours   30 minutes  ").unwrap(), 9000);
    assert_eq!(parse_duration(" 2:30 ").unwrap(), 9000);
}

#[test]
fn test_unit_followed_by_letters_is_not_a_unit() {
    // "m" followed by "x" is not a minute token
    assert!(parse_duration("5mx").is_err());
    assert_eq!(parse_duration("5mx 2h").unwrap(), 7200);
}

#[test]
fn test_unit_followed_by_non_ascii_letters_is_not_a_unit() {
    assert!(parse_duration("5hé").is_err());
    assert_eq!(parse_duration("5 hörs 2m").unwrap(), 120);
    assert_eq!(parse_duration("5h, 2m").unwrap(), 18120);
}

#[test]
fn test_rounds_half_away_from_zero() {
    assert_eq!(parse_duration("0.5s").unwrap(), 1);
    assert_eq!(parse_duration("0.4s").unwrap(), 0);
    assert_eq!(parse_duration("0.01m").unwrap(), 1);
}

#[test]
fn test_empty_is_error() {
    let err = parse_duration("").unwrap_err();
    assert!(matches!(err, WhenError::Parse { .. }));
    assert!(parse_duration("   ").is_err());
}

#[test]
fn test_negative_is_error() {
    let err = parse_duration("-5 hours").unwrap_err();
    assert!(err.to_string().contains("Negative"));
    assert!(parse_duration("  -1:00").is_err());
}

#[test]
fn test_no_units_is_error() {
    let err = parse_duration("hello world").unwrap_err();
    assert!(err.to_string().contains("hello world"));
    assert!(parse_duration("42").is_err());
    assert!(parse_duration("1:2:3:4").is_err());
}

#[test]
fn test_colon_overflow_is_error() {
    assert!(parse_duration("99999999999999999999:00").is_err());
}

#[test]
fn test_round_trips_through_compact_duration() {
    let all_units = DurationOptions::default().compact(true).max_units(6);
    for seconds in [1, 59, 61, 3599, 3661, 86399, 93661, 2_592_000, 36_720_000, 40_000_000, 123_456_789] {
        let text = duration(seconds, all_units).unwrap();
        assert_eq!(parse_duration(&text).unwrap(), seconds, "{text}");
    }
}

#[test]
fn test_round_trips_through_verbose_duration() {
    let all_units = DurationOptions::default().max_units(6);
    for seconds in [1, 90, 3661, 93661, 36_720_000, 98_765_432] {
        let text = duration(seconds, all_units).unwrap();
        assert_eq!(parse_duration(&text).unwrap(), seconds, "{text}");
    }
}
