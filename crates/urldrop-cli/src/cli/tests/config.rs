//! Tests for config, completions and man.

use super::parse;
use crate::cli::{Cli, CliCommand, ConfigAction};
use clap::Parser;

#[test]
fn cli_parse_config_show() {
    match parse(&["urldrop", "config", "show"]) {
        CliCommand::Config { action } => assert_eq!(action, ConfigAction::Show),
        _ => panic!("expected Config show"),
    }
}

#[test]
fn cli_parse_config_path() {
    match parse(&["urldrop", "config", "path"]) {
        CliCommand::Config { action } => assert_eq!(action, ConfigAction::Path),
        _ => panic!("expected Config path"),
    }
}

#[test]
fn cli_parse_config_set() {
    match parse(&["urldrop", "config", "set", "width", "600"]) {
        CliCommand::Config { action } => assert_eq!(
            action,
            ConfigAction::Set {
                key: "width".to_string(),
                value: "600".to_string(),
            }
        ),
        _ => panic!("expected Config set"),
    }
}

#[test]
fn cli_parse_config_set_requires_value() {
    assert!(Cli::try_parse_from(["urldrop", "config", "set", "width"]).is_err());
}

#[test]
fn cli_parse_config_reset() {
    match parse(&["urldrop", "config", "reset"]) {
        CliCommand::Config { action } => assert_eq!(action, ConfigAction::Reset),
        _ => panic!("expected Config reset"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["urldrop", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["urldrop", "man"]), CliCommand::Man));
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
