//! Integration tests driving the binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn launcher(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("capture-launcher"));
    cmd.current_dir(project.path());
    cmd.env_remove("CAPTURE_LAUNCHER_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A project whose installer and application are small shell scripts.
///
/// The installer creates `.venv/bin/python`; the application records the
/// `VIRTUAL_ENV` it was started with.
#[cfg(unix)]
fn scripted_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("launcher.yml"),
        r#"
app_name: Test Capture
installer:
  program: sh
  args: [install.sh]
application:
  program: sh
  args: [app.sh]
"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("install.sh"),
        "mkdir -p .venv/bin\nprintf '#!/bin/sh\\n' > .venv/bin/python\nchmod +x .venv/bin/python\necho installer ran\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("app.sh"),
        "printf '%s' \"$VIRTUAL_ENV\" > launched.txt\necho app ran\n",
    )
    .unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Provision and launch"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn menu_quit_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.write_stdin("q\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Geforce Hybrid Capture"))
        .stdout(predicate::str::contains("1. Launch application"))
        .stdout(predicate::str::contains("Environment: not installed"));
    assert!(!temp.path().join(".venv").exists());
    Ok(())
}

#[test]
fn menu_end_of_input_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.arg("menu").write_stdin("");
    cmd.assert().success();
    Ok(())
}

#[test]
fn invalid_choice_then_launch_without_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.write_stdin("x\n1\n");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Invalid choice 'x'"))
        .stderr(predicate::str::contains("Run install first"));
    assert!(!temp.path().join(".venv").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_then_launch_from_menu() -> Result<(), Box<dyn std::error::Error>> {
    let temp = scripted_project();
    let mut cmd = launcher(&temp);
    cmd.write_stdin("2\n1\nq\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("installer ran"))
        .stdout(predicate::str::contains("app ran"))
        .stdout(predicate::str::contains("Environment: ready"));

    assert!(temp.path().join(".venv/bin/python").is_file());
    let virtual_env = fs::read_to_string(temp.path().join("launched.txt"))?;
    assert!(virtual_env.ends_with(".venv"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn reinstall_wipes_previous_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = scripted_project();
    let stale = temp.path().join(".venv/stale.txt");
    fs::create_dir_all(temp.path().join(".venv"))?;
    fs::write(&stale, "old")?;

    let mut cmd = launcher(&temp);
    cmd.write_stdin("2\n2\nq\n");
    cmd.assert().success();

    assert!(!stale.exists());
    assert!(temp.path().join(".venv/bin/python").is_file());
    Ok(())
}

#[test]
fn launch_subcommand_without_environment_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.arg("launch");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Run install first"));
    Ok(())
}

/// Ctrl-C reaches the whole foreground process group; the launcher must
/// outlive it and return to the menu.
#[cfg(unix)]
#[test]
fn interrupted_application_returns_to_menu() -> Result<(), Box<dyn std::error::Error>> {
    let setsid_available = std::process::Command::new("setsid")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !setsid_available {
        return Ok(());
    }

    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("launcher.yml"),
        r#"
app_name: Test Capture
application:
  program: sh
  args: ["-c", "kill -INT 0; sleep 1"]
"#,
    )?;
    fs::create_dir_all(temp.path().join(".venv/bin"))?;
    fs::write(temp.path().join(".venv/bin/python"), "#!/bin/sh\n")?;

    // A fresh session makes the launcher the leader of its own process group.
    let mut cmd = Command::new("setsid");
    cmd.arg("--wait")
        .arg(cargo_bin("capture-launcher"))
        .current_dir(temp.path())
        .env_remove("CAPTURE_LAUNCHER_CONFIG")
        .env_remove("RUST_LOG")
        .write_stdin("1\nq\n");

    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("1. Launch application").count(), 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("terminated by signal"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_subcommand_passes_installer_exit_code()-> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("launcher.yml"),
        "installer:\n  program: sh\n  args: [\"-c\", \"exit 3\"]\n",
    )?;
    let mut cmd = launcher(&temp);
    cmd.arg("install");
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("Installer exited with exit code 3"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_subcommand_creates_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = scripted_project();
    let mut cmd = launcher(&temp);
    cmd.arg("install");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Environment installed"));
    assert!(temp.path().join(".venv/bin/python").is_file());
    Ok(())
}

#[test]
fn missing_installer_program_keeps_menu_running() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("launcher.yml"),
        "installer:\n  program: definitely-not-a-real-installer\n",
    )?;
    let mut cmd = launcher(&temp);
    cmd.write_stdin("2\nq\n");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Install failed"));
    Ok(())
}

#[test]
fn status_json_reports_absent_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.args(["status", "--json"]);
    let output = cmd.output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["status"], "absent");
    assert!(value["environment"].as_str().unwrap().ends_with(".venv"));
    Ok(())
}

#[test]
fn quiet_does_not_suppress_machine_readable_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let output = launcher(&temp)
        .args(["--quiet", "status", "--json"])
        .output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["status"], "absent");

    let output = launcher(&temp)
        .args(["--quiet", "config", "--json"])
        .output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(value.get("environment").is_some());
    Ok(())
}

#[test]
fn invalid_environment_path_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("launcher.yml"), "environment:\n  path: ../outside\n")?;
    let mut cmd = launcher(&temp);
    cmd.arg("status");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn explicit_config_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.args(["--config", "missing.yml", "status"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn config_env_var_selects_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("custom.yml");
    fs::write(&config, "app_name: From Env\n")?;
    let mut cmd = launcher(&temp);
    cmd.env("CAPTURE_LAUNCHER_CONFIG", &config);
    cmd.args(["status"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("From Env - Status"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = launcher(&temp);
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("capture-launcher"));
    Ok(())
}
