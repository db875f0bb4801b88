//! End-to-end tests for the keymapper-cli binary.
//!
//! Every test runs against files in a private temp directory and fake
//! external programs, never against a real daemon.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("keymapper-cli").expect("binary builds")
}

fn write_legacy(dir: &TempDir, records: &str) -> std::path::PathBuf {
    let path = dir.path().join("keymapper_config.json");
    std::fs::write(&path, records).unwrap();
    path
}

#[test]
fn export_appends_to_a_fresh_config() {
    let dir = TempDir::new().unwrap();
    let json = write_legacy(&dir, r#"[{"from": "capslock", "to": "esc"}]"#);
    let conf = dir.path().join("keymapper.conf");

    cli()
        .args(["--config-path", conf.to_str().unwrap(), "export"])
        .args(["--json", json.to_str().unwrap()])
        .args(["--context", "device=kbd1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appended 1 mapping"));

    assert_eq!(
        std::fs::read_to_string(&conf).unwrap(),
        "[device = kbd1]\ncapslock >> esc\n"
    );
}

#[test]
fn export_separates_blocks_with_a_blank_line() {
    let dir = TempDir::new().unwrap();
    let json = write_legacy(&dir, r#"[{"from": "a", "to": "b"}]"#);
    let conf = dir.path().join("keymapper.conf");
    std::fs::write(&conf, "capslock >> esc\n").unwrap();

    cli()
        .args(["--config-path", conf.to_str().unwrap(), "export"])
        .args(["--json", json.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&conf).unwrap(),
        "capslock >> esc\n\na >> b\n"
    );
}

#[test]
fn export_with_missing_json_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("keymapper.conf");

    cli()
        .args(["--config-path", conf.to_str().unwrap(), "export"])
        .args(["--json", dir.path().join("absent.json").to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn export_rejects_unknown_context_kind() {
    let dir = TempDir::new().unwrap();
    let json = write_legacy(&dir, r#"[{"from": "a", "to": "b"}]"#);
    let conf = dir.path().join("keymapper.conf");

    cli()
        .args(["--config-path", conf.to_str().unwrap(), "export"])
        .args(["--json", json.to_str().unwrap()])
        .args(["--context", "window=foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown context kind"));
}

#[test]
fn import_prints_legacy_json() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("keymapper.conf");
    std::fs::write(&conf, "[device = kbd1]\ncapslock >> esc\n").unwrap();

    cli()
        .args(["--config-path", conf.to_str().unwrap(), "import"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"from\": \"capslock\""))
        .stdout(predicate::str::contains("\"to\": \"esc\""));
}

#[test]
fn import_missing_config_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("absent.conf");

    cli()
        .args(["--config-path", conf.to_str().unwrap(), "import"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn check_passes_a_clean_config() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("keymapper.conf");
    std::fs::write(&conf, "[system]\nshift{a} >> \"A\"\n").unwrap();

    cli()
        .args(["--config-path", conf.to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 mapping OK"));
}

#[test]
fn check_rejects_garbage_with_validation_code() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("keymapper.conf");
    std::fs::write(&conf, "this is not a mapping\n").unwrap();

    cli()
        .args(["--config-path", conf.to_str().unwrap(), "check"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn apply_invokes_the_mapping_command_per_entry() {
    let dir = TempDir::new().unwrap();
    let json = write_legacy(
        &dir,
        r#"[{"from": "capslock", "to": "esc"}, {"from": "a", "to": "b"}]"#,
    );

    cli()
        .args(["--map-command", "true", "apply"])
        .args(["--json", json.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 mappings applied"));
}

#[test]
fn apply_failure_exits_command_failed() {
    let dir = TempDir::new().unwrap();
    let json = write_legacy(
        &dir,
        r#"[{"from": "capslock", "to": "esc"}, {"from": "a", "to": "b"}]"#,
    );

    cli()
        .args(["--map-command", "false", "apply"])
        .args(["--json", json.to_str().unwrap()])
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::contains("failed: false map capslock esc"))
        .stdout(predicate::str::contains("skipped: entry 2"));
}

#[test]
fn apply_keep_going_reports_every_failure() {
    let dir = TempDir::new().unwrap();
    let json = write_legacy(
        &dir,
        r#"[{"from": "capslock", "to": "esc"}, {"from": "a", "to": "b"}]"#,
    );

    cli()
        .args(["--map-command", "false", "apply"])
        .args(["--json", json.to_str().unwrap(), "--keep-going"])
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::contains("failed: false map capslock esc"))
        .stdout(predicate::str::contains("failed: false map a b"));
}

#[test]
fn restart_reports_success() {
    cli()
        .args(["--restart-command", "true", "restart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keymapperd restarted"));
}

#[test]
fn restart_failure_exits_command_failed() {
    cli()
        .args(["--restart-command", "false", "restart"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("restart"));
}
