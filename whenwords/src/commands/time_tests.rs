use super::*;

const MONDAY: i64 = 1705276800;

#[test]
fn test_relative_with_reference() {
    let out = relative(Timestamp::from(MONDAY - 7200), Some(Timestamp::from(MONDAY))).unwrap();
    assert_eq!(
        out,
        RelativeOutput {
            timestamp: MONDAY - 7200,
            reference: MONDAY,
            text: "2 hours ago".to_string(),
        }
    );
}

#[test]
fn test_relative_defaults_to_now() {
    let out = relative(Timestamp::from(chrono::Utc::now()), None).unwrap();
    assert_eq!(out.text, "just now");
}

#[test]
fn test_calendar_with_iso_input() {
    let ts: Timestamp = "2024-01-13T09:30:00Z".parse().unwrap();
    let out = calendar(ts, Some(Timestamp::from(MONDAY))).unwrap();
    assert_eq!(out.text, "Last Saturday");
}

#[test]
fn test_range_orders_endpoints() {
    let out = range(Timestamp::from(1705881600), Timestamp::from(MONDAY)).unwrap();
    assert_eq!(out.start, MONDAY);
    assert_eq!(out.end, 1705881600);
    assert_eq!(out.format_pretty(), "January 15–22, 2024");
}

#[test]
fn test_bad_timestamp_is_error() {
    assert!(relative(Timestamp::from("garbage"), None).is_err());
}
