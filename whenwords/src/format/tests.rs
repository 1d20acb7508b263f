use super::*;
use crate::context::VerbosityLevel;
use libwhenwords::{Config, Timestamp};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
struct TestData {
    name: String,
    value: i32,
}

impl Formattable for TestData {
    fn format_pretty(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

fn ctx_with_color(color: ColorChoice) -> AppContext {
    let mut config = Config::default();
    config.output.color = color;
    AppContext {
        config,
        verbosity: VerbosityLevel::Normal,
    }
}

fn ctx_with_verbosity(verbosity: VerbosityLevel) -> AppContext {
    AppContext {
        config: Config::default(),
        verbosity,
    }
}

fn sample() -> TestData {
    TestData {
        name: "test".to_string(),
        value: 42,
    }
}

#[test]
fn test_format_pretty() {
    let result = format_output(&sample(), OutputFormat::Pretty);
    assert_eq!(result.unwrap(), "test: 42");
}

#[test]
fn test_format_json() {
    let result = format_output(&sample(), OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(json["name"], "test");
    assert_eq!(json["value"], 42);
}

#[test]
fn test_format_yaml() {
    let result = format_output(&sample(), OutputFormat::Yaml).unwrap();
    assert!(result.contains("name: test"));
    assert!(result.contains("value: 42"));
}

#[test]
fn test_color_never() {
    let ctx = ctx_with_color(ColorChoice::Never);
    assert!(!should_color(&ctx));
    assert_eq!(error_mark(&ctx), "✗");
    assert_eq!(checkmark(&ctx), "✓");
}

#[test]
fn test_color_always() {
    let ctx = ctx_with_color(ColorChoice::Always);
    assert!(should_color(&ctx));
    assert!(error_mark(&ctx).contains("\u{1b}["));
}

#[test]
fn test_auto_color_follows_terminal() {
    assert!(!color_enabled(ColorChoice::Auto, false));
    assert!(color_enabled(ColorChoice::Always, false));
    assert!(!color_enabled(ColorChoice::Never, true));
}

#[test]
fn test_error_report_hides_causes_by_default() {
    let err = Timestamp::from("15/01/2024").to_unix().unwrap_err();

    let lines = error_report(&ctx_with_verbosity(VerbosityLevel::Normal), &err);
    assert_eq!(lines, vec!["Invalid timestamp format: 15/01/2024".to_string()]);
}

#[test]
fn test_error_report_shows_causes_when_verbose() {
    let err = Timestamp::from("15/01/2024").to_unix().unwrap_err();

    let lines = error_report(&ctx_with_verbosity(VerbosityLevel::Verbose), &err);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("  caused by: "));
}
