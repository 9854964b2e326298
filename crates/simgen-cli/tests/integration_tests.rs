//! Integration tests for simgen-cli: the real binary against real
//! temporary directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Base command with stable, color-free output.
fn simgen() -> Command {
    let mut cmd = Command::cargo_bin("simgen").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn scaffold_project(dir: &Path, name: &str) {
    simgen()
        .current_dir(dir)
        .args(["create", "project", name])
        .assert()
        .success();
}

// ── global surface ────────────────────────────────────────────────────────────

#[test]
fn help_mentions_create() {
    simgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"));
}

#[test]
fn version_flag_reports_cargo_version() {
    simgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_bash_generates_script() {
    simgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("simgen"));
}

// ── create project ────────────────────────────────────────────────────────────

#[test]
fn create_project_builds_the_full_layout() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");

    let root = temp.path().join("sim1");
    for dir in [
        "agents/src",
        "agents/include",
        "events/src",
        "events/include",
        "states/src",
        "states/include",
        "temp",
    ] {
        assert!(root.join(dir).is_dir(), "missing {dir}");
    }

    let main = fs::read_to_string(root.join("sim1_main.cpp")).unwrap();
    assert!(main.contains("int main(int argc, char* argv[])"));
}

#[test]
fn create_project_twice_exits_4() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");

    simgen()
        .current_dir(temp.path())
        .args(["create", "project", "sim1"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn create_project_without_name_exits_2() {
    let temp = TempDir::new().unwrap();
    simgen()
        .current_dir(temp.path())
        .args(["create", "project"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("project name"));
}

#[test]
fn parent_dir_flag_overrides_cwd() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    simgen()
        .current_dir(temp.path())
        .args(["create", "project", "sim1", "--parent-dir"])
        .arg(elsewhere.path())
        .assert()
        .success();

    assert!(elsewhere.path().join("sim1/agents/src").is_dir());
    assert!(!temp.path().join("sim1").exists());
}

#[test]
fn quiet_suppresses_stdout() {
    let temp = TempDir::new().unwrap();
    simgen()
        .current_dir(temp.path())
        .args(["-q", "create", "project", "sim1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── create agent / state / event ──────────────────────────────────────────────

#[test]
fn create_agent_generates_substituted_pair() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    let root = temp.path().join("sim1");

    simgen()
        .current_dir(&root)
        .args(["create", "agent", "Predator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let header = fs::read_to_string(root.join("agents/include/Predator.h")).unwrap();
    let source = fs::read_to_string(root.join("agents/src/Predator.cpp")).unwrap();
    assert!(header.contains("class Predator : public Agent"));
    assert!(source.contains("#include \"Predator.h\""));
    assert!(!header.contains("AGENT_NAME_HERE"));
    assert!(!source.contains("AGENT_NAME_HERE"));
}

#[test]
fn repeating_create_agent_skips_and_preserves_files() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    let root = temp.path().join("sim1");

    simgen()
        .current_dir(&root)
        .args(["create", "agent", "Predator"])
        .assert()
        .success();
    let before = fs::read_to_string(root.join("agents/include/Predator.h")).unwrap();

    simgen()
        .current_dir(&root)
        .args(["create", "agent", "Predator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no action taken"));

    let after = fs::read_to_string(root.join("agents/include/Predator.h")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn create_state_and_event_target_their_subsystems() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    let root = temp.path().join("sim1");

    simgen()
        .current_dir(&root)
        .args(["create", "state", "PredatorState"])
        .assert()
        .success();
    simgen()
        .current_dir(&root)
        .args(["create", "event", "MoveEvent"])
        .assert()
        .success();

    assert!(root.join("states/include/PredatorState.h").is_file());
    assert!(root.join("states/src/PredatorState.cpp").is_file());
    assert!(root.join("events/include/MoveEvent.h").is_file());
    assert!(root.join("events/src/MoveEvent.cpp").is_file());
}

#[test]
fn batch_creates_every_name() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    let root = temp.path().join("sim1");

    simgen()
        .current_dir(&root)
        .args(["create", "agent", "Wolf", "Deer", "Grass"])
        .assert()
        .success();

    for name in ["Wolf", "Deer", "Grass"] {
        assert!(root.join(format!("agents/include/{name}.h")).is_file());
        assert!(root.join(format!("agents/src/{name}.cpp")).is_file());
    }
}

#[test]
fn create_agent_outside_project_exits_5() {
    let temp = TempDir::new().unwrap();
    simgen()
        .current_dir(temp.path())
        .args(["create", "agent", "X"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("missing project directory"));

    // Nothing was written.
    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn create_agent_without_names_exits_2() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    simgen()
        .current_dir(temp.path().join("sim1"))
        .args(["create", "agent"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_kind_exits_3() {
    let temp = TempDir::new().unwrap();
    simgen()
        .current_dir(temp.path())
        .args(["create", "widget", "X"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not a recognized entity kind"));
}

// ── create buildfile ──────────────────────────────────────────────────────────

#[test]
fn buildfile_lists_sources_and_library_root() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    let root = temp.path().join("sim1");
    simgen()
        .current_dir(&root)
        .args(["create", "agent", "Predator"])
        .assert()
        .success();

    simgen()
        .current_dir(&root)
        .args(["create", "buildfile", "/opt/simlib"])
        .assert()
        .success();

    let descriptor = fs::read_to_string(root.join("Makefile")).unwrap();
    assert!(descriptor.contains("-I/opt/simlib/include"));
    assert!(descriptor.contains("bin_PROGRAMS = sim1exec"));
    assert!(descriptor.contains("agents/src/Predator.cpp"));
    assert!(descriptor.contains("sim1_main.cpp"));
    assert!(!descriptor.contains("_HERE"));
}

#[test]
fn buildfile_is_regenerated_not_merged() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    let root = temp.path().join("sim1");

    simgen()
        .current_dir(&root)
        .args(["create", "buildfile", "/first"])
        .assert()
        .success();
    simgen()
        .current_dir(&root)
        .args(["create", "buildfile", "/second"])
        .assert()
        .success();

    let descriptor = fs::read_to_string(root.join("Makefile")).unwrap();
    assert!(descriptor.contains("/second"));
    assert!(!descriptor.contains("/first"));
}

#[test]
fn buildfile_without_path_or_config_exits_2() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    simgen()
        .current_dir(temp.path().join("sim1"))
        .args(["create", "buildfile"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("library path"));
}

#[test]
fn buildfile_falls_back_to_configured_library_root() {
    let temp = TempDir::new().unwrap();
    scaffold_project(temp.path(), "sim1");
    let root = temp.path().join("sim1");

    let config = temp.path().join("simgen.toml");
    fs::write(&config, "[defaults]\nlibrary_root = \"/opt/configured\"\n").unwrap();

    simgen()
        .current_dir(&root)
        .arg("--config")
        .arg(&config)
        .args(["create", "buildfile"])
        .assert()
        .success();

    let descriptor = fs::read_to_string(root.join("Makefile")).unwrap();
    assert!(descriptor.contains("/opt/configured"));
}

#[test]
fn unreadable_config_exits_6() {
    let temp = TempDir::new().unwrap();
    simgen()
        .current_dir(temp.path())
        .args(["--config", "/definitely/not/here.toml", "create", "project", "x"])
        .assert()
        .failure()
        .code(6);
}
