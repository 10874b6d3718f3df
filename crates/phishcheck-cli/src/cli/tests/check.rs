//! Tests for `check`.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_check_defaults() {
    match parse(&["phishcheck", "check", "example.com"]) {
        CliCommand::Check {
            url,
            json,
            model,
            no_model,
        } => {
            assert_eq!(url, "example.com");
            assert!(!json);
            assert!(model.is_none());
            assert!(!no_model);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_json_and_model() {
    match parse(&[
        "phishcheck",
        "check",
        "https://bit.ly/xyz",
        "--json",
        "--model",
        "/tmp/model.json",
    ]) {
        CliCommand::Check {
            url, json, model, ..
        } => {
            assert_eq!(url, "https://bit.ly/xyz");
            assert!(json);
            assert_eq!(model, Some(PathBuf::from("/tmp/model.json")));
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_no_model() {
    match parse(&["phishcheck", "check", "x.com", "--no-model"]) {
        CliCommand::Check { no_model, .. } => assert!(no_model),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_rejects_model_with_no_model() {
    let res = Cli::try_parse_from([
        "phishcheck",
        "check",
        "x.com",
        "--no-model",
        "--model",
        "m.json",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_check_requires_url() {
    assert!(Cli::try_parse_from(["phishcheck", "check"]).is_err());
}
