mod common;

use common::{run_vetta, TestEnv};

#[test]
fn vetta_help_shows_usage() {
    let output = run_vetta(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(
        !stderr.contains("No config file found"),
        "--help should not log config fallback noise\nstderr:\n{}",
        stderr
    );
}

#[test]
fn vetta_version_shows_version() {
    let output = run_vetta(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("vetta "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_vetta(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("vetta"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_works() {
    let output = run_vetta(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[general]"));
    assert!(stdout.contains("[api]"));
    assert!(stdout.contains("base_url"));
    assert!(stdout.contains("require_recording_to_advance"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_vetta(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config path should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_writes_file_and_refuses_overwrite() {
    let env = TestEnv::new();

    let output = env.run(&["config", "init"]);
    assert!(
        output.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(env.config_path().exists());

    let output = env.run(&["config", "init"]);
    assert!(
        !output.status.success(),
        "config init without --force should refuse to overwrite"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"), "stderr:\n{}", stderr);

    let output = env.run(&["config", "init", "--force"]);
    assert!(output.status.success());
}

#[test]
fn config_file_overrides_are_honored() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[api]
base_url = "http://interview.example.test:9000"
"#,
    );

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("http://interview.example.test:9000"),
        "expected config override in output\nstdout:\n{}",
        stdout
    );
}

#[test]
fn upload_with_missing_resume_fails_locally() {
    let output = run_vetta(&[
        "upload",
        "--name",
        "Jane Doe",
        "--email",
        "jane@example.test",
        "--resume",
        "/nonexistent/resume.pdf",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Resume file not found"),
        "stderr:\n{}",
        stderr
    );
}

#[test]
fn results_without_prior_interview_explains_missing_id() {
    let output = run_vetta(&["results"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("No completed interview found"),
        "stderr:\n{}",
        stderr
    );
}
