use super::*;

#[test]
fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_ago_with_reference() {
    let cli = Cli::try_parse_from(["whenwords", "ago", "1705269600", "-r", "2024-01-15T00:00:00Z"])
        .unwrap();
    match cli.command {
        Commands::Ago {
            timestamp,
            reference,
            ..
        } => {
            assert_eq!(timestamp, Timestamp::Seconds(1705269600));
            assert_eq!(reference.unwrap().to_unix().unwrap(), 1705276800);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_negative_timestamp() {
    let cli = Cli::try_parse_from(["whenwords", "date", "-86400"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Date {
            timestamp: Timestamp::Seconds(-86400),
            ..
        }
    ));
}

#[test]
fn test_parse_range_with_unix_seconds() {
    let cli = Cli::try_parse_from(["whenwords", "range", "1705881600", "1705276800.5"]).unwrap();
    match cli.command {
        Commands::Range { start, end, .. } => {
            assert_eq!(start, Timestamp::Seconds(1705881600));
            assert_eq!(end, Timestamp::Float(1705276800.5));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_iso_argument_is_parsed_eagerly() {
    let cli = Cli::try_parse_from(["whenwords", "date", "2024-01-15"]).unwrap();
    match cli.command {
        Commands::Date { timestamp, .. } => {
            assert!(matches!(timestamp, Timestamp::DateTime(_)));
            assert_eq!(timestamp.to_unix().unwrap(), 1705276800);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_invalid_timestamp_rejected_by_clap() {
    let result = Cli::try_parse_from(["whenwords", "ago", "not-a-time"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_duration_flags() {
    let cli = Cli::try_parse_from(["whenwords", "-vv", "duration", "93661", "--compact", "-m", "3"])
        .unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Duration {
            seconds,
            compact,
            max_units,
            ..
        } => {
            assert_eq!(seconds, 93661.0);
            assert!(compact);
            assert_eq!(max_units, Some(3));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_no_compact_flag() {
    let cli = Cli::try_parse_from(["whenwords", "duration", "90", "--no-compact"]).unwrap();
    match cli.command {
        Commands::Duration {
            compact,
            no_compact,
            ..
        } => assert_eq!(compact_flag(compact, no_compact), Some(false)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_last_compact_flag_wins() {
    let cli = Cli::try_parse_from(["whenwords", "duration", "90", "--no-compact", "-c"]).unwrap();
    match cli.command {
        Commands::Duration {
            compact,
            no_compact,
            ..
        } => assert_eq!(compact_flag(compact, no_compact), Some(true)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_compact_flag_absent_defers_to_config() {
    assert_eq!(compact_flag(false, false), None);
}
