//! Conformance tests that run YAML fixtures against fluent-keys
//!
//! Run with: cargo test -p fluent-keys-test --test conformance --features fixtures

#![cfg(feature = "fixtures")]

use fluent_keys_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run all fixtures in a directory
fn run_fixtures_in_dir(dir: &Path) {
    assert!(
        dir.exists(),
        "Fixtures directory does not exist: {}",
        dir.display()
    );

    let mut ran = 0;
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();

        if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            println!("Running fixture: {}", path.display());

            let yaml = fs::read_to_string(&path).expect("read yaml");

            // Parse potentially multiple fixtures (separated by ---)
            let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
                panic!("Failed to parse {}: {}", path.display(), e);
            });

            for fixture in fixtures {
                println!("  Running: {}", fixture.name);
                fixture.run_and_assert();
                ran += 1;
            }
        }
    }

    assert!(ran > 0, "no fixtures found in {}", dir.display());
}

#[test]
fn test_leaf_matchers() {
    run_fixtures_in_dir(&fixtures_dir().join("01_leaf_matchers"));
}

#[test]
fn test_guards() {
    run_fixtures_in_dir(&fixtures_dir().join("02_guards"));
}

#[test]
fn test_named() {
    run_fixtures_in_dir(&fixtures_dir().join("03_named"));
}

#[test]
fn test_invalid() {
    run_fixtures_in_dir(&fixtures_dir().join("04_invalid"));
}
