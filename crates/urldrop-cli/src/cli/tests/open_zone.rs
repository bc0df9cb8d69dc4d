//! Tests for open and zone subcommands.

use super::parse;
use crate::cli::{auto_close_override, Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_open_paths() {
    match parse(&["urldrop", "open", "a.url", "/tmp/My Site.URL"]) {
        CliCommand::Open { paths, print } => {
            assert_eq!(
                paths,
                vec![PathBuf::from("a.url"), PathBuf::from("/tmp/My Site.URL")]
            );
            assert!(!print);
        }
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_open_without_paths() {
    match parse(&["urldrop", "open"]) {
        CliCommand::Open { paths, .. } => assert!(paths.is_empty()),
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_open_print() {
    match parse(&["urldrop", "open", "--print", "a.url"]) {
        CliCommand::Open { paths, print } => {
            assert_eq!(paths.len(), 1);
            assert!(print);
        }
        _ => panic!("expected Open with --print"),
    }
}

#[test]
fn cli_parse_zone_defaults() {
    match parse(&["urldrop", "zone"]) {
        CliCommand::Zone {
            auto_close,
            no_auto_close,
            print,
        } => {
            assert!(!auto_close);
            assert!(!no_auto_close);
            assert!(!print);
            assert_eq!(auto_close_override(auto_close, no_auto_close), None);
        }
        _ => panic!("expected Zone"),
    }
}

#[test]
fn cli_parse_zone_auto_close() {
    match parse(&["urldrop", "zone", "--auto-close"]) {
        CliCommand::Zone {
            auto_close,
            no_auto_close,
            ..
        } => assert_eq!(auto_close_override(auto_close, no_auto_close), Some(true)),
        _ => panic!("expected Zone with --auto-close"),
    }
}

#[test]
fn cli_parse_zone_no_auto_close() {
    match parse(&["urldrop", "zone", "--no-auto-close"]) {
        CliCommand::Zone {
            auto_close,
            no_auto_close,
            ..
        } => assert_eq!(auto_close_override(auto_close, no_auto_close), Some(false)),
        _ => panic!("expected Zone with --no-auto-close"),
    }
}

#[test]
fn cli_zone_auto_close_flags_conflict() {
    assert!(Cli::try_parse_from(["urldrop", "zone", "--auto-close", "--no-auto-close"]).is_err());
}
