/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn catalog_path() -> PathBuf {
    fixtures_path().join("catalog.json")
}

/// Copy a fixture build into a scratch directory and return its new path.
fn copy_build(dir: &Path, fixture: &str) -> PathBuf {
    let target = dir.join("build.yml");
    fs::copy(fixtures_path().join(fixture), &target).unwrap();
    target
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn parse_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format_and_currency() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build.yml");
        write_config(
            &dir.path().join("pc-configurator.config.yml"),
            "format: json\ncurrency_symbol: \"€\"\n",
        );

        let output = cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .output()
            .unwrap();

        assert!(output.status.success());
        let report = parse_json(&output.stdout);
        assert_eq!(report["currencySymbol"], "€");
    }

    #[test]
    fn test_auto_discovery_applies_fail_on_critical() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build-mismatch.yml");
        write_config(
            &dir.path().join("pc-configurator.config.yml"),
            "fail_on_critical: true\n",
        );

        cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .assert()
            .code(1);
    }

    #[test]
    fn test_auto_discovery_applies_eligible_and_placeholder() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build.yml");
        write_config(
            &dir.path().join("pc-configurator.config.yml"),
            r#"
format: json
eligible: [psu]
placeholder_images:
  - /static/no-image.webp
"#,
        );

        let output = cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .output()
            .unwrap();

        assert!(output.status.success());
        let report = parse_json(&output.stdout);
        assert_eq!(report["eligible"][0]["category"], "psu");
        let cpu = report["lineItems"]
            .as_array()
            .unwrap()
            .iter()
            .find(|item| item["id"] == "ryzen-7600")
            .unwrap();
        assert_eq!(cpu["images"][0], "/static/no-image.webp");
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build.yml");

        cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# PC Build Report"))
            .stdout(predicate::str::contains("£"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build.yml");
        write_config(
            &dir.path().join("pc-configurator.config.yml"),
            "format: json\n",
        );

        cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .args(["-f", "markdown"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# PC Build Report"));
    }

    #[test]
    fn test_cli_eligible_overrides_config() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build.yml");
        write_config(
            &dir.path().join("pc-configurator.config.yml"),
            "format: json\neligible: [psu]\n",
        );

        let output = cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .args(["-e", "gpu"])
            .output()
            .unwrap();

        let report = parse_json(&output.stdout);
        let eligible = report["eligible"].as_array().unwrap();
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0]["category"], "gpu");
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("shop.yml");
        write_config(&config, "format: json\n");

        let output = cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(fixtures_path().join("build.yml"))
            .arg("--config")
            .arg(&config)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(parse_json(&output.stdout)["lineItems"].is_array());
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build.yml");
        write_config(
            &dir.path().join("pc-configurator.config.yml"),
            "theme: dark\n",
        );

        cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown config field 'theme'"));
    }

    #[test]
    fn test_empty_placeholder_entry_is_error() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build.yml");
        write_config(
            &dir.path().join("pc-configurator.config.yml"),
            "placeholder_images: [\"\"]\n",
        );

        cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("must not be empty"));
    }

    #[test]
    fn test_invalid_config_category_is_error() {
        let dir = TempDir::new().unwrap();
        let build = copy_build(dir.path(), "build.yml");
        write_config(
            &dir.path().join("pc-configurator.config.yml"),
            "eligible: [toaster]\n",
        );

        cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(&build)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid category: toaster"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        cargo_bin_cmd!("pc-configurator")
            .arg("-c")
            .arg(catalog_path())
            .arg("-b")
            .arg(fixtures_path().join("build.yml"))
            .args(["--config", "/nonexistent/config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}
