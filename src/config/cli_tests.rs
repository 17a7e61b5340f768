//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command, PollModeArg};

fn parse(args: &[&str]) -> Cli {
    let mut full_args = vec!["notipoll"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

#[test]
fn no_args_parses_with_all_options_unset() {
    let cli = parse(&[]);

    assert!(cli.command.is_none());
    assert!(cli.url.is_none());
    assert!(cli.bearer.is_none());
    assert!(cli.headers.is_empty());
    assert!(cli.interval.is_none());
    assert!(cli.limit.is_none());
    assert!(cli.mode.is_none());
    assert!(cli.timeout.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.verbose);
}

#[test]
fn run_options_parse() {
    let cli = parse(&[
        "--url",
        "https://queue.example.com/api/v1",
        "--bearer",
        "token-123",
        "--interval",
        "15",
        "--limit",
        "250",
        "--timeout",
        "5",
        "--verbose",
    ]);

    assert_eq!(cli.url.as_deref(), Some("https://queue.example.com/api/v1"));
    assert_eq!(cli.bearer.as_deref(), Some("token-123"));
    assert_eq!(cli.interval, Some(15));
    assert_eq!(cli.limit, Some(250));
    assert_eq!(cli.timeout, Some(5));
    assert!(cli.verbose);
}

#[test]
fn mode_values_parse() {
    assert_eq!(parse(&["--mode", "single"]).mode, Some(PollModeArg::Single));
    assert_eq!(parse(&["--mode", "batch"]).mode, Some(PollModeArg::Batch));
}

#[test]
fn repeated_headers_accumulate_in_order() {
    let cli = parse(&["--header", "X-One=1", "--header", "X-Two: 2"]);

    assert_eq!(cli.headers, vec!["X-One=1", "X-Two: 2"]);
}

#[test]
fn config_path_parses() {
    let cli = parse(&["--config", "/etc/notipoll.toml"]);

    assert_eq!(cli.config, Some(PathBuf::from("/etc/notipoll.toml")));
}

#[test]
fn init_subcommand_with_default_output() {
    let cli = parse(&["init"]);

    assert!(cli.is_init());
    match cli.command {
        Some(Command::Init { output }) => {
            assert_eq!(output, PathBuf::from("notipoll.toml"));
        }
        other => panic!("expected init command, got {other:?}"),
    }
}

#[test]
fn init_subcommand_with_custom_output() {
    let cli = parse(&["init", "--output", "custom.toml"]);

    match cli.command {
        Some(Command::Init { output }) => {
            assert_eq!(output, PathBuf::from("custom.toml"));
        }
        other => panic!("expected init command, got {other:?}"),
    }
}

#[test]
fn is_init_is_false_without_subcommand() {
    assert!(!parse(&["--url", "https://example.com"]).is_init());
}
