//! Library integration tests.

use capture_launcher::LauncherError;

#[test]
fn error_types_are_public() {
    let err = LauncherError::EnvironmentMissing {
        path: ".venv".into(),
    };
    assert!(err.to_string().contains("Run install first"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> capture_launcher::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use capture_launcher::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["capture-launcher", "status", "--json"]);

    if let Some(Commands::Status(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Status command");
    }
}

#[test]
fn dispatcher_drives_menu_with_recording_spawner() {
    use capture_launcher::cli::{Cli, CommandDispatcher};
    use capture_launcher::shell::RecordingSpawner;
    use capture_launcher::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    let temp = TempDir::new().unwrap();
    let mut dispatcher = CommandDispatcher::with_spawner(
        temp.path().to_path_buf(),
        Box::new(RecordingSpawner::new()),
    );
    let cli = Cli::parse_from(["capture-launcher", "menu"]);
    let mut ui = MockUI::new();
    ui.queue_inputs(vec!["2", "q"]);

    let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

    assert!(result.success);
    // The recording installer creates nothing, so the user is warned.
    assert!(ui.has_warning("was not created"));
}

#[test]
fn environment_lifecycle_through_public_api() {
    use capture_launcher::environment::{Environment, EnvironmentProbe, EnvironmentProvisioner};
    use capture_launcher::shell::{CommandSpec, RecordingSpawner};
    use capture_launcher::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    let temp = TempDir::new().unwrap();
    let env = Environment::new(temp.path().join(".venv"));
    let installer = CommandSpec::new("python3", ["installer.py"]);

    let hook_env = env.clone();
    let mut spawner = RecordingSpawner::new();
    spawner.on_run(move |_, _| {
        fs::create_dir_all(hook_env.bin_dir()).unwrap();
        fs::write(hook_env.interpreter(), "").unwrap();
    });
    let mut ui = MockUI::new();

    assert!(!EnvironmentProbe::new(&env).exists());
    let report = EnvironmentProvisioner::new(&env, &installer, temp.path())
        .provision(&mut spawner, &mut ui)
        .unwrap();
    assert!(report.ready);
    assert!(EnvironmentProbe::new(&env).exists());
}
