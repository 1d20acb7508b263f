use super::*;
use crate::format::format_output;

#[test]
fn test_pretty_lists_both_crates() {
    let output = VersionOutput::current().format_pretty();
    let mut lines = output.lines();

    assert_eq!(
        lines.next(),
        Some(format!("whenwords {}", env!("CARGO_PKG_VERSION")).as_str())
    );
    assert!(lines.next().unwrap().starts_with("libwhenwords "));
}

#[test]
fn test_json_has_one_field_per_crate() {
    let json = format_output(&VersionOutput::current(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["whenwords"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["libwhenwords"], libwhenwords::version());
}
