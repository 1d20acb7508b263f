use super::*;

#[test]
fn test_duration_units_descend() {
    for pair in DURATION_UNITS.windows(2) {
        assert!(pair[0].seconds > pair[1].seconds, "{:?} before {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_duration_units_exclude_week() {
    assert!(!DURATION_UNITS.contains(&WEEK));
}

#[test]
fn test_fixed_width_lengths() {
    assert_eq!(MONTH.seconds, 30 * DAY.seconds);
    assert_eq!(YEAR.seconds, 365 * DAY.seconds);
    assert_eq!(WEEK.seconds, 7 * DAY.seconds);
}

#[test]
fn test_label_pluralizes() {
    assert_eq!(HOUR.label(1), "hour");
    assert_eq!(HOUR.label(0), "hours");
    assert_eq!(HOUR.label(2), "hours");
}
