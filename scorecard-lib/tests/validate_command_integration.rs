//! Integration tests for the `init`, `validate`, `inspect` and `tokens` commands.
//!
//! None of these touch report data. They exercise configuration handling and the
//! template and registry listings through `scorecard_lib::run`.

use scorecard_lib::Host;
use std::fs;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

/// Validate without `--config`. The package directory has no `scorecard.toml`, so the
/// built-in defaults are used.
#[test]
fn test_validate_without_explicit_config() {
    let mut host = TestHost::new();
    let result = scorecard_lib::run(&mut host, ["scorecard", "validate"]);

    assert!(result.is_ok(), "validate without --config should succeed: {result:?}");

    let output = host.output_str();
    assert!(output.contains("Configuration file is valid"), "got: {output}");
    assert!(output.contains("default configuration"), "should mention default configuration, got: {output}");
    assert!(output.contains("Date format: %B %-d, %Y"), "got: {output}");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_init_then_validate() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("scorecard.toml");
    let config = config.to_str().unwrap();

    let mut host = TestHost::new();
    scorecard_lib::run(&mut host, ["scorecard", "init", config]).unwrap();
    assert!(host.output_str().contains("Generated default configuration file"));

    let mut host = TestHost::new();
    scorecard_lib::run(&mut host, ["scorecard", "validate", "--config", config]).unwrap();
    assert!(host.output_str().contains(&format!("Config file: {config}")));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_validate_rejects_unknown_escaped_field() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("scorecard.toml");
    fs::write(&config, "escaped_fields = [\"UserInformation.ShoeSize\"]\n").unwrap();

    let mut host = TestHost::new();
    let result = scorecard_lib::run(&mut host, ["scorecard", "validate", "--config", config.to_str().unwrap()]);

    assert!(result.is_err());
    assert!(host.error_str().contains("❌ Configuration validation failed"));
    assert_eq!(host.exit_code, Some(1));
}

#[test]
fn test_inspect_bundled_template() {
    let mut host = TestHost::new();
    scorecard_lib::run(&mut host, ["scorecard", "inspect", "--color", "never"]).unwrap();

    let output = host.output_str();
    assert!(output.contains("UserInformation.CompanyName"));
    assert!(output.contains("qaContent"));
    assert!(!output.contains("unrecognized"));
    assert!(output.contains("Dynamic section blocks: 1"));
    assert!(output.contains("[Client Company Name] phrases: 2"));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_inspect_flags_problems() {
    let tmp = tempfile::tempdir().unwrap();
    let template = tmp.path().join("template.html");
    fs::write(&template, "{{CompanyName}} {{#each dynamicSections}}<h2>{{title}}</h2>").unwrap();

    let mut host = TestHost::new();
    scorecard_lib::run(&mut host, ["scorecard", "inspect", template.to_str().unwrap(), "--color", "never"]).unwrap();

    let output = host.output_str();
    assert!(output.contains("CompanyName"));
    assert!(output.contains("unrecognized"));
    assert!(output.contains("unterminated {{#each dynamicSections}} block"));
}

#[test]
fn test_tokens_lists_registry() {
    let mut host = TestHost::new();
    scorecard_lib::run(&mut host, ["scorecard", "tokens"]).unwrap();

    let output = host.output_str();
    assert!(output.starts_with("TOKEN"));
    assert!(output.contains("{{UserInformation.CompanyName}}"));
    assert!(output.contains("Company Not Provided"));
    assert!(output.contains("{{qaContent}}"));
}
