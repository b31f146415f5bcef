//! Tests for CLI subcommand parsing.

use clap::Parser;
use federation_scrape::config::{
    Cli, Command, DEFAULT_FEDERATIONS_URL, DEFAULT_RESULTS_URL, DEFAULT_USER_AGENT,
};
use federation_scrape::{Job, Locale, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_federations_defaults() {
    let cli = Cli::try_parse_from(["federation_scrape", "federations"]).unwrap();
    assert_eq!(cli.command.job(), Job::Federations);

    let config = cli.command.into_config();
    assert_eq!(config.listing_url, DEFAULT_FEDERATIONS_URL);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.timeout_seconds, 15);
    assert_eq!(config.max_concurrency, 1);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.locale, Locale::En);
    assert!(config.output.is_none());
}

#[test]
fn test_medals_defaults_to_csv() {
    let cli = Cli::try_parse_from(["federation_scrape", "medals"]).unwrap();
    assert!(matches!(cli.command, Command::Medals(_)));

    let config = cli.command.into_config();
    assert_eq!(config.listing_url, DEFAULT_RESULTS_URL);
    assert_eq!(config.format, OutputFormat::Csv);
}

#[test]
fn test_all_options() {
    let cli = Cli::try_parse_from([
        "federation_scrape",
        "federations",
        "--listing-url",
        "http://localhost:8080/ru/federations",
        "-o",
        "out.jsonl",
        "--format",
        "jsonl",
        "--timeout-seconds",
        "30",
        "--user-agent",
        "test-agent",
        "--max-concurrency",
        "4",
        "--locale",
        "ru",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();

    let config = cli.command.into_config();
    assert_eq!(config.listing_url, "http://localhost:8080/ru/federations");
    assert_eq!(config.output, Some(PathBuf::from("out.jsonl")));
    assert_eq!(config.format, OutputFormat::Jsonl);
    assert_eq!(config.timeout_seconds, 30);
    assert_eq!(config.user_agent, "test-agent");
    assert_eq!(config.max_concurrency, 4);
    assert_eq!(config.locale, Locale::Ru);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
}

#[test]
fn test_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["federation_scrape", "federations", "--format", "xml"]).is_err());
}

#[test]
fn test_requires_subcommand() {
    assert!(Cli::try_parse_from(["federation_scrape"]).is_err());
}
