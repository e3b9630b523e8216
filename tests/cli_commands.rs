// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[path = "common/mod.rs"]
mod common;

use assert_cmd::Command;
use common::TestHomeGuard;
use common::fixtures::create_fake_jdk;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

/// A `jdkscout` invocation isolated from the caller's JDK environment.
fn jdkscout(guard: &TestHomeGuard) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jdkscout"));
    cmd.env("JDKSCOUT_HOME", guard.scout_home())
        .env("HOME", guard.path())
        .env("USERPROFILE", guard.path())
        .env_remove("JAVA_HOME")
        .env_remove("JDK_HOME")
        .env_remove("GRADLE_USER_HOME")
        .env_remove("JDKSCOUT_DISCOVERY__EXCLUDED_PATHS")
        .env_remove("RUST_LOG");
    cmd
}

fn setup_jdks(guard: &TestHomeGuard) -> PathBuf {
    let jdks = guard.path().join("jdks");
    create_fake_jdk(&jdks, "temurin-17", "17.0.9");
    create_fake_jdk(&jdks, "temurin-21", "21.0.2");
    guard.write_config(&format!(
        "[discovery]\nscan_paths = [{}]\n",
        TestHomeGuard::toml_path(&jdks)
    ));
    jdks
}

fn listed_names(output: &[u8]) -> Vec<String> {
    let json: serde_json::Value = serde_json::from_slice(output).unwrap();
    json.as_array()
        .unwrap()
        .iter()
        .map(|jdk| jdk["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_json_includes_scanned_jdks() {
    let guard = TestHomeGuard::new();
    setup_jdks(&guard);

    let output = jdkscout(&guard)
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let names = listed_names(&output.stdout);
    assert!(names.contains(&"temurin-17".to_string()));
    assert!(names.contains(&"temurin-21".to_string()));
}

#[test]
fn test_list_table_output() {
    let guard = TestHomeGuard::new();
    setup_jdks(&guard);

    jdkscout(&guard)
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("temurin-21")
                .and(predicate::str::contains("21.0.2"))
                .and(predicate::str::contains("Test Vendor")),
        );
}

#[test]
fn test_list_version_filters() {
    let guard = TestHomeGuard::new();
    setup_jdks(&guard);

    let output = jdkscout(&guard)
        .args(["list", "--json", "--min", "21"])
        .output()
        .unwrap();
    let names = listed_names(&output.stdout);
    assert!(names.contains(&"temurin-21".to_string()));
    assert!(!names.contains(&"temurin-17".to_string()));

    let output = jdkscout(&guard)
        .args(["list", "--json", "--pattern", "17"])
        .output()
        .unwrap();
    let names = listed_names(&output.stdout);
    assert!(names.contains(&"temurin-17".to_string()));
    assert!(!names.contains(&"temurin-21".to_string()));
}

#[test]
fn test_inverted_range_exits_with_usage_error() {
    let guard = TestHomeGuard::new();

    jdkscout(&guard)
        .args(["list", "--min", "21", "--max", "11"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid version range"));
}

#[test]
fn test_malformed_bound_exits_with_usage_error() {
    let guard = TestHomeGuard::new();

    jdkscout(&guard)
        .args(["list", "--min", "seventeen"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid version format"));
}

#[test]
fn test_env_exclusion_override() {
    let guard = TestHomeGuard::new();
    let jdks = setup_jdks(&guard);

    let output = jdkscout(&guard)
        .env(
            "JDKSCOUT_DISCOVERY__EXCLUDED_PATHS",
            jdks.join("temurin-17"),
        )
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let names = listed_names(&output.stdout);
    assert!(!names.contains(&"temurin-17".to_string()));
    assert!(names.contains(&"temurin-21".to_string()));
}

#[test]
fn test_invalid_config_exits_with_config_error() {
    let guard = TestHomeGuard::new();
    guard.write_config("[discovery\nscan_paths = 1");

    jdkscout(&guard)
        .arg("list")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_paths_lists_candidates() {
    let guard = TestHomeGuard::new();
    let jdks = setup_jdks(&guard);
    let missing = guard.path().join("not-there");
    guard.write_config(&format!(
        "[discovery]\nscan_paths = [{}, {}]\n",
        TestHomeGuard::toml_path(&jdks),
        TestHomeGuard::toml_path(&missing)
    ));

    jdkscout(&guard)
        .arg("paths")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Candidate directories")
                .and(predicate::str::contains(file_name(&jdks)))
                .and(predicate::str::contains("(missing)")),
        );
}

#[test]
fn test_verbose_flag_is_global() {
    let guard = TestHomeGuard::new();

    jdkscout(&guard).args(["paths", "-vv"]).assert().success();
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}
