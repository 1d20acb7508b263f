use super::*;

#[test]
fn test_verbosity_from_count() {
    assert_eq!(VerbosityLevel::from_count(0), VerbosityLevel::Normal);
    assert_eq!(VerbosityLevel::from_count(1), VerbosityLevel::Verbose);
    assert_eq!(VerbosityLevel::from_count(2), VerbosityLevel::Debug);
    assert_eq!(VerbosityLevel::from_count(9), VerbosityLevel::Trace);
}

#[test]
fn test_verbosity_log_filter() {
    assert_eq!(VerbosityLevel::Normal.log_filter(), log::LevelFilter::Warn);
    assert_eq!(VerbosityLevel::Trace.log_filter(), log::LevelFilter::Trace);
}

#[test]
fn test_cli_color_overrides_everything() {
    let ctx = AppContext::build(Some(ColorChoice::Never), VerbosityLevel::Normal);
    assert_eq!(ctx.config.output.color, ColorChoice::Never);
}

#[test]
fn test_output_format_flag_wins() {
    let ctx = AppContext {
        config: Config::default(),
        verbosity: VerbosityLevel::Normal,
    };
    assert_eq!(ctx.output_format(Some("json")), OutputFormat::Json);
    assert_eq!(ctx.output_format(None), OutputFormat::Pretty);
}
