#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Translation requests go to a local mock server; nothing here touches the
//! real translation service.

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;

const ENGLISH_TO_FRENCH: &str =
    r#"[[["Bonjour","Hello",null,null,10]],null,"en",null,null,null,1.0,[],[["en"],null,[1.0],["en"]]]"#;

const VIETNAMESE_ECHO: &str =
    r#"[[["Tiếng Việt","Tiếng Việt",null,null,10]],null,"vi",null,null,null,1.0,[],[["vi"],null,[1.0],["vi"]]]"#;

#[allow(deprecated)]
fn tieq() -> Command {
    let mut cmd = Command::cargo_bin("tieq").unwrap();
    cmd.env_remove("TIEQ_ENDPOINT").arg("--no-color");
    cmd
}

#[test]
fn test_help_displays_usage() {
    tieq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[from>to]"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--languages"));
}

#[test]
fn test_version_displays_version() {
    tieq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    tieq()
        .arg("--languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("vi"))
        .stdout(predicate::str::contains("Vietnamese"))
        .stdout(predicate::str::contains("English"));
}

#[test]
fn test_directive_only_is_empty_input() {
    tieq()
        .args(["-e", "http://127.0.0.1:9", "[en>fr]"])
        .assert()
        .code(exitcode::DATAERR)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please enter something to translate"));
}

#[test]
fn test_empty_stdin_is_empty_input() {
    tieq()
        .args(["-e", "http://127.0.0.1:9"])
        .write_stdin("")
        .assert()
        .code(exitcode::DATAERR)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please enter something to translate"));
}

#[test]
fn test_service_error_is_reported() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_status(503)
        .create();

    tieq()
        .args(["-e", &server.url(), "hello [en>fr]"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot get the translation"));
}

#[test]
fn test_unsupported_language_is_reported() {
    tieq()
        .args(["-e", "http://127.0.0.1:9", "hello [en>klingon]"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot get the translation"));
}

#[test]
fn test_translation_prints_json() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sl".into(), "en".into()),
            Matcher::UrlEncoded("tl".into(), "fr".into()),
            Matcher::UrlEncoded("q".into(), "Hello".into()),
        ]))
        .with_body(ENGLISH_TO_FRENCH)
        .create();

    tieq()
        .args(["-q", "-e", &server.url(), "Hello", "[en>fr]"])
        .assert()
        .success()
        .stdout("{\"text\":\"Bonjour\",\"from\":\"English\",\"to\":\"French\"}\n");

    mock.assert();
}

#[test]
fn test_text_from_stdin() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::UrlEncoded("q".into(), "Hello".into()))
        .with_body(ENGLISH_TO_FRENCH)
        .create();

    tieq()
        .args(["-q", "-e", &server.url()])
        .write_stdin("Hello [en>fr]\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\":\"Bonjour\""));

    mock.assert();
}

#[test]
fn test_vietnamese_to_vietnamese_is_respelled() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/translate_a/single")
        .match_query(Matcher::Any)
        .with_body(VIETNAMESE_ECHO)
        .create();

    tieq()
        .args(["-q", "-e", &server.url(), "Tiếng Việt [vi>vi]"])
        .assert()
        .success()
        .stdout("{\"text\":\"Tiếq Việt\",\"from\":\"Vietnamese\",\"to\":\"Tiếq Việt\"}\n");
}
