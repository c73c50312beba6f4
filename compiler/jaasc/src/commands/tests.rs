use std::io::Write;

use super::*;
use jaas_config::LoginType;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_check_options_defaults() {
    let options = parse_check_options(&args(&["config.txt"])).unwrap();
    assert_eq!(options, CheckOptions::default());
    assert_eq!(options.login_type, LoginType::Client);
}

#[test]
fn test_parse_check_options_flags() {
    let options =
        parse_check_options(&args(&["--login-type=server", "f", "--context=ctxA"])).unwrap();
    assert_eq!(options.login_type, LoginType::Server);
    assert_eq!(options.context.as_deref(), Some("ctxA"));
}

#[test]
fn test_parse_check_options_rejects_unknown() {
    assert!(parse_check_options(&args(&["--login-type=broker"])).is_err());
    assert!(parse_check_options(&args(&["--verbose"])).is_err());
    assert!(parse_check_options(&args(&["--context="])).is_err());
}

#[test]
fn test_render_tokens_hides_word_text() {
    let lines = render_tokens("mod required password=\"hunter2\";");
    assert_eq!(
        lines,
        vec![
            "  Word(3 bytes) @ 0..3",
            "  Word(8 bytes) @ 4..12",
            "  Word(8 bytes) @ 13..21",
            "  Symbol('=') @ 21..22",
            "  Word(7 bytes) @ 22..31",
            "  Symbol(';') @ 31..32",
            "  EndOfInput @ 32..32",
        ]
    );
    assert!(lines.iter().all(|line| !line.contains("hunter2")));
}

#[test]
fn test_check_file_summarizes_entries() {
    let file = temp_config("a.Mod required user=alice password=hunter2;\nb.Mod optional;");
    let path = file.path().to_str().unwrap();

    let lines = check_file(path, &CheckOptions::default()).unwrap();

    assert_eq!(
        lines,
        vec![
            "Login context 'KafkaClient' (2 entries):",
            "  a.Mod required [password, user]",
            "  b.Mod optional",
        ]
    );
}

#[test]
fn test_check_file_uses_explicit_context() {
    let file = temp_config("a.Mod sufficient;");
    let options = CheckOptions {
        context: Some("ctxA".to_owned()),
        login_type: LoginType::Server,
    };

    let lines = check_file(file.path().to_str().unwrap(), &options).unwrap();

    assert_eq!(lines[0], "Login context 'ctxA' (1 entries):");
}

#[test]
fn test_check_file_reports_grammar_error() {
    let file = temp_config("a.Mod bogus;");
    let err = check_file(file.path().to_str().unwrap(), &CheckOptions::default()).unwrap_err();
    assert!(matches!(err, JaasError::InvalidControlFlag(ref raw) if raw == "bogus"));
}

#[test]
fn test_missing_file_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.conf");
    let err = lex_file(missing.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, JaasError::UnderlyingIo(_)));
    assert!(!err.is_grammar_error());
}
