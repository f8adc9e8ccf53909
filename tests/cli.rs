//! Integration tests for the `replay` binary.

mod common;

use std::io::Write;
use std::process::{Command, Output};

use common::fixtures::{expected_response, fixtures_dir};
use replay::UNMARSHALLING_STORE_FAILED;

const ENV_VARS: &[&str] = &[
    "REPLAY_CORE_NAME",
    "REPLAY_STORE_FIELD",
    "REPLAY_SCORE_FIELD",
    "REPLAY_DEFAULT_FIELD_LIST",
    "REPLAY_ROOT_ELEMENT",
    "REPLAY_REQUIRED_ATTRIBUTES",
    "REPLAY_REQUIRE_SCORE",
];

fn replay(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_replay"));
    for var in ENV_VARS {
        command.env_remove(var);
    }
    command.args(args).output().expect("failed to run replay")
}

#[test]
fn test_cli_replays_fixture() {
    let store = fixtures_dir().join("artist.xml");
    let store = store.to_str().unwrap();

    let xml = replay(&["replay-xml", store]);
    assert!(xml.status.success());
    assert_eq!(String::from_utf8(xml.stdout).unwrap(), expected_response("artist", "xml"));

    let json = replay(&["replay-json", store]);
    assert!(json.status.success());
    assert_eq!(String::from_utf8(json.stdout).unwrap(), expected_response("artist", "json"));
}

#[test]
fn test_cli_reports_invalid_store_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "invalid").unwrap();

    let output = replay(&["replay-xml", "--fl=score", file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("{}invalid", UNMARSHALLING_STORE_FAILED)));
}

#[test]
fn test_cli_requires_format() {
    let output = replay(&[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: replay"));
}
