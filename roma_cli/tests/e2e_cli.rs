//! End-to-End CLI Tests for roma

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the roma binary
fn roma() -> Command {
    cargo_bin_cmd!("roma")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        roma()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        roma()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_theme() {
        roma()
            .args(["build", "--theme", "neon"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("neon"));
    }
}

// ============================================
// build
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_index_with_every_section() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");

        roma()
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        for id in ["features", "target-audience", "franchises", "franchise-cta", "contact"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
        assert!(html.contains("leaflet.js"));
        assert!(out.join("boot.js").exists());
    }

    #[test]
    fn cream_theme_without_map_assets() {
        let dir = TempDir::new().unwrap();

        roma()
            .args(["build", "--theme", "cream", "--no-map-assets", "--out"])
            .arg(dir.path())
            .assert()
            .success();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"data-theme="cream""#));
        assert!(!html.contains("leaflet.js"));
        // the marker list is still there for the static page
        assert_eq!(html.matches(r#"class="map-marker""#).count(), 3);
    }

    #[test]
    fn custom_wasm_glue_lands_in_boot_module() {
        let dir = TempDir::new().unwrap();

        roma()
            .args(["build", "--wasm-glue", "./assets/runtime.js", "--out"])
            .arg(dir.path())
            .assert()
            .success();

        let boot = std::fs::read_to_string(dir.path().join("boot.js")).unwrap();
        assert!(boot.contains("./assets/runtime.js"));
    }

    #[test]
    fn existing_index_needs_force() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "old").unwrap();

        roma()
            .args(["build", "--out"])
            .arg(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));

        roma()
            .args(["build", "--force", "--out"])
            .arg(dir.path())
            .assert()
            .success();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}

// ============================================
// check
// ============================================

mod check {
    use super::*;

    #[test]
    fn bundled_content_passes() {
        roma()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("Content: no violations"))
            .stdout(predicate::str::contains("OK"));
    }

    #[test]
    fn json_report() {
        let output = roma().args(["check", "--json"]).output().unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["ok"], true);
        assert_eq!(report["violations"].as_array().unwrap().len(), 0);
        let anchors = report["anchors"].as_array().unwrap();
        assert_eq!(anchors.len(), 8);
        assert!(anchors.iter().all(|check| check["matches"] == 1));
    }

    #[test]
    fn logs_go_to_stderr() {
        roma()
            .env_remove("RUST_LOG")
            .args(["check", "--json", "--log-level", "info"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{"))
            .stderr(predicate::str::contains("content checked"));
    }
}
