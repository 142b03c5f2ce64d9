use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("# download_dir ="));
    assert!(contents.contains("# api_base ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_set_dir_persists_path() {
    let home = tempdir().unwrap();
    let downloads = tempdir().unwrap();

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .args(["config", "set-dir", downloads.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Download Directory set to"));

    let contents = fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(contents.contains("download_dir = "));
    assert!(contents.contains(downloads.path().to_str().unwrap()));
}

#[test]
fn test_config_set_dir_rejects_missing_path() {
    let home = tempdir().unwrap();

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .args(["config", "set-dir", "/no/such/directory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid path. Directory does not exist"));

    assert!(!home.path().join("config.toml").exists());
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("ttdl")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set-dir"));
}
