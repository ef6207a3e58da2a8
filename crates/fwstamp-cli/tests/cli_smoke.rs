use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn fwstamp(project: &Path, args: &[&str]) -> Output {
    Command::new(PathBuf::from(env!("CARGO_BIN_EXE_fwstamp")))
        .current_dir(project)
        .env_remove("FWSTAMP_CONFIG")
        .env("GIT_CEILING_DIRECTORIES", project.parent().unwrap_or(project))
        .args(args)
        .output()
        .unwrap()
}

fn project_with_src() -> TempDir {
    let project = TempDir::new().unwrap();
    std::fs::create_dir(project.path().join("src")).unwrap();
    project
}

#[test]
fn cli_generate_writes_header_with_version_override() {
    let project = project_with_src();

    let output = fwstamp(project.path(), &["generate", "--build-version", "2.3.0"]);
    assert!(output.status.success(), "{output:?}");

    let text = std::fs::read_to_string(project.path().join("src/build_info.h")).unwrap();
    assert!(text.starts_with("// Auto-generated build info\n#pragma once\n"));
    assert!(text.contains("#define BUILD_VERSION \"2.3.0\"\n"));
    assert!(text.contains("#define BUILD_COMMIT \"unknown\"\n"));
}

#[test]
fn cli_hook_reads_config_file() {
    let project = project_with_src();
    std::fs::write(
        project.path().join("fwstamp.toml"),
        "version = \"7.1.0\"\nhook_target = \"firmware\"\n",
    )
    .unwrap();

    let output = fwstamp(project.path(), &["hook", "firmware"]);
    assert!(output.status.success(), "{output:?}");

    let text = std::fs::read_to_string(project.path().join("src/build_info.h")).unwrap();
    assert!(text.contains("#define BUILD_VERSION \"7.1.0\"\n"));
}

#[test]
fn cli_hook_ignores_other_targets() {
    let project = project_with_src();

    let output = fwstamp(project.path(), &["hook", "upload"]);
    assert!(output.status.success(), "{output:?}");
    assert!(!project.path().join("src/build_info.h").exists());

    let output = fwstamp(project.path(), &["hook", "buildprog"]);
    assert!(output.status.success(), "{output:?}");
    assert!(project.path().join("src/build_info.h").exists());
}

#[test]
fn cli_show_json_does_not_write() {
    let project = project_with_src();

    let output = fwstamp(project.path(), &["show", "--format", "json"]);
    assert!(output.status.success(), "{output:?}");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"], "0.1.1");
    assert_eq!(value["commit"], "unknown");
    assert!(value["build_time"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(!project.path().join("src/build_info.h").exists());
}

#[test]
fn cli_write_failure_exits_non_zero() {
    let project = TempDir::new().unwrap();

    let output = fwstamp(project.path(), &["generate", "--src-dir", "missing/src"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pre-build step failed"));
}

#[test]
fn cli_invalid_config_exits_non_zero() {
    let project = project_with_src();
    let config = project.path().join("custom.toml");
    std::fs::write(&config, "header_name = \"../escape.h\"\n").unwrap();

    let output = fwstamp(
        project.path(),
        &["--config", config.to_str().unwrap(), "generate"],
    );
    assert!(!output.status.success());
    assert!(!project.path().join("escape.h").exists());
}

#[test]
fn cli_init_writes_config_used_by_generate() {
    let project = project_with_src();

    let output = fwstamp(project.path(), &["init", "--build-version", "3.4.5"]);
    assert!(output.status.success(), "{output:?}");

    let saved = std::fs::read_to_string(project.path().join("fwstamp.toml")).unwrap();
    assert!(saved.contains("version = \"3.4.5\""));

    let output = fwstamp(project.path(), &["generate"]);
    assert!(output.status.success(), "{output:?}");
    let text = std::fs::read_to_string(project.path().join("src/build_info.h")).unwrap();
    assert!(text.contains("#define BUILD_VERSION \"3.4.5\"\n"));
}

#[test]
fn cli_init_refuses_to_overwrite_without_force() {
    let project = project_with_src();
    let config = project.path().join("fwstamp.toml");
    std::fs::write(&config, "version = \"9.9.9\"\n").unwrap();

    let output = fwstamp(project.path(), &["init"]);
    assert!(!output.status.success());
    assert_eq!(std::fs::read_to_string(&config).unwrap(), "version = \"9.9.9\"\n");

    let output = fwstamp(project.path(), &["init", "--force"]);
    assert!(output.status.success(), "{output:?}");
    assert!(!std::fs::read_to_string(&config).unwrap().contains("9.9.9"));
}
