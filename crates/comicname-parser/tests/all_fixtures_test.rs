//! Fixture tests for comicname-parser.
//!
//! Each case in `tests/fixtures/comics.json` names an input, optional parser
//! flags, and the fields it is expected to produce. Fields a case does not
//! mention are not checked.

use std::collections::BTreeMap;
use std::fs;

use comicname_parser::config::ParserConfig;
use comicname_parser::{FilenameInfo, Parser};
use serde::Deserialize;
use serde_json::Value;

/// A single test case from a fixture file.
#[derive(Debug, Deserialize)]
struct TestCase {
    input: String,
    /// Turn on all three `remove_*` options.
    #[serde(default)]
    remove_all: bool,
    #[serde(default)]
    first_token_is_alternate_number: bool,
    expected: BTreeMap<String, Value>,
}

impl TestCase {
    fn config(&self) -> ParserConfig {
        ParserConfig::builder()
            .remove_c2c(self.remove_all)
            .remove_fcbd(self.remove_all)
            .remove_publisher(self.remove_all)
            .first_token_is_alternate_number(self.first_token_is_alternate_number)
            .build()
    }
}

/// Result from running fixture tests.
struct FixtureResult {
    passed: usize,
    failed: usize,
    failures: Vec<String>,
}

fn check_case(case: &TestCase, info: &FilenameInfo) -> Vec<String> {
    let actual: BTreeMap<&str, String> = info.fields().into_iter().collect();
    let mut failures = Vec::new();

    for (field, expected) in &case.expected {
        let expected = match expected {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        match actual.get(field.as_str()) {
            Some(value) if *value == expected => {}
            Some(value) => failures.push(format!(
                "{field}: expected {expected:?}, got {value:?}"
            )),
            None => failures.push(format!("{field}: no such field")),
        }
    }
    failures
}

fn run_fixture_file(path: &str) -> FixtureResult {
    let content = fs::read_to_string(path).unwrap();
    let cases: Vec<TestCase> = serde_json::from_str(&content).unwrap();

    let mut passed = 0;
    let mut failed = 0;
    let mut failures = Vec::new();

    for case in cases {
        let parser = Parser::new(case.config());
        let case_failures = match parser.parse(&case.input) {
            Ok(info) => check_case(&case, &info),
            Err(e) => vec![format!("error: {e}")],
        };

        if case_failures.is_empty() {
            passed += 1;
        } else {
            failed += 1;
            failures.push(format!(
                "FAIL: {}\n  {}",
                case.input,
                case_failures.join("\n  ")
            ));
        }
    }

    FixtureResult {
        passed,
        failed,
        failures,
    }
}

#[test]
fn test_comic_fixtures() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/comics.json");
    let result = run_fixture_file(path);

    println!("\n=== Comic Fixtures ===");
    println!("{} passed, {} failed", result.passed, result.failed);
    for f in &result.failures {
        println!("{}", f);
    }

    assert!(result.passed > 0);
    assert_eq!(result.failed, 0, "{}", result.failures.join("\n"));
}

#[test]
fn test_unbalanced_brackets_fail() {
    for input in ["Batman (2021.cbz", "Batman [2021.cbz", "Batman 2021).cbz", "Batman }.cbz"] {
        let result = Parser::default().parse(input);
        assert!(result.is_err(), "{input} should not parse");
    }
}

#[test]
fn test_tokens_reproduce_input() {
    let content = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/comics.json"
    ))
    .unwrap();
    let cases: Vec<TestCase> = serde_json::from_str(&content).unwrap();

    for case in cases {
        let rebuilt: String = comicname_parser::tokenize(&case.input)
            .iter()
            .map(|t| &*t.text)
            .collect();
        assert_eq!(rebuilt, case.input);
    }
}

#[test]
fn test_fragment_combinations() {
    let fragments = [
        "Batman", " ", "#3", "v2", "(2019)", "-", "of", "12", "[c2c]", ".cbz", "Annual", "Marvel",
        "--", "Jan", "'89", "Mr.", ": ", "book", "1.5",
    ];
    let parsers = [
        Parser::default(),
        Parser::new(
            ParserConfig::builder()
                .remove_c2c(true)
                .remove_fcbd(true)
                .remove_publisher(true)
                .first_token_is_alternate_number(true)
                .build(),
        ),
    ];

    for a in fragments {
        for b in fragments {
            for c in fragments {
                let input = format!("{a}{b}{c}");
                let rebuilt: String = comicname_parser::tokenize(&input)
                    .iter()
                    .map(|t| &*t.text)
                    .collect();
                assert_eq!(rebuilt, input);

                for parser in &parsers {
                    let info = parser.parse(&input).unwrap();
                    assert_eq!(parser.parse(&input).unwrap(), info, "{input:?}");
                    for field in [&info.issue, &info.volume, &info.volume_count, &info.issue_count] {
                        assert!(!field.starts_with('#'), "{input:?} -> {info:?}");
                    }
                }
            }
        }
    }
}
