//! Conformance fixture runner
//!
//! Loads YAML fixtures and runs them against fluent-keys.
//!
//! A fixture names a predicate (as a [`KeyMatchSpec`]) and a list of events
//! with the expected outcome. A fixture may instead declare `expect_error`,
//! in which case compiling the predicate must fail with a message containing
//! that text.

use crate::Recorder;
use fluent_keys::{KeyEvent, KeyMatchSpec};
use serde::Deserialize;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    pub predicate: KeyMatchSpec,
    #[serde(default)]
    pub cases: Vec<TestCase>,
    /// Substring of the expected compile error, for fixtures that must fail.
    #[serde(default)]
    pub expect_error: Option<String>,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub event: KeyEvent,
    /// Whether the handler's action should run.
    pub expect: bool,
}

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: bool,
    pub actual: bool,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results.
    ///
    /// Each case gets a fresh handler bound to a [`Recorder`]; the case
    /// passes when the action ran exactly once (`expect: true`) or not at
    /// all (`expect: false`).
    ///
    /// # Errors
    ///
    /// Returns the compile error message if the predicate fails to compile.
    pub fn run(&self) -> Result<Vec<CaseResult>, String> {
        let predicate = self.predicate.compile().map_err(|e| e.to_string())?;
        let results = self
            .cases
            .iter()
            .map(|case| {
                let recorder = Recorder::new();
                predicate.then(recorder.action()).handle(&case.event);
                let fired = recorder.count();
                CaseResult {
                    case_name: case.name.clone(),
                    passed: fired == usize::from(case.expect),
                    expected: case.expect,
                    actual: fired > 0,
                }
            })
            .collect();
        Ok(results)
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        match (&self.expect_error, self.run()) {
            (Some(expected), Err(actual)) => assert!(
                actual.contains(expected.as_str()),
                "Fixture '{}' failed with '{actual}', expected an error containing '{expected}'",
                self.name
            ),
            (Some(expected), Ok(_)) => panic!(
                "Fixture '{}' compiled, expected an error containing '{expected}'",
                self.name
            ),
            (None, Err(actual)) => panic!("Fixture '{}' failed to compile: {actual}", self.name),
            (None, Ok(results)) => {
                for result in results {
                    assert!(
                        result.passed,
                        "Fixture '{}' case '{}' failed: expected {}, got {}",
                        self.name, result.case_name, result.expected, result.actual
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
name: ctrl_o
description: ctrl guard around a literal key
predicate:
  type: ctrl
  predicate:
    type: matches
    keys: ["o"]
cases:
  - name: held
    event: { key: "o", ctrlKey: true }
    expect: true
  - name: not held
    event: { key: "o" }
    expect: false
"#;

    #[test]
    fn parse_and_run_single() {
        let fixture = Fixture::from_yaml(YAML).unwrap();
        assert_eq!(fixture.name, "ctrl_o");
        assert_eq!(fixture.cases.len(), 2);

        let results = fixture.run().unwrap();
        assert!(results.iter().all(|r| r.passed));
        fixture.run_and_assert();
    }

    #[test]
    fn parse_multi_document() {
        let yaml = format!("{YAML}---\n{YAML}");
        let fixtures = Fixture::from_yaml_multi(&yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
    }

    #[test]
    fn failing_case_is_reported() {
        let yaml = r#"
name: wrong
description: expects a miss that is really a hit
predicate: { type: matches, keys: ["Enter"] }
cases:
  - name: enter
    event: { key: "Enter" }
    expect: false
"#;
        let results = Fixture::from_yaml(yaml).unwrap().run().unwrap();
        assert!(!results[0].passed);
        assert!(results[0].actual);
    }

    #[test]
    fn expected_error_fixture() {
        let yaml = r#"
name: bad_pattern
description: unclosed class
predicate: { type: meets, pattern: "[a-" }
expect_error: invalid pattern
"#;
        Fixture::from_yaml(yaml).unwrap().run_and_assert();
    }
}
