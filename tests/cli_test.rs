use std::process::Command;

fn chirp() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chirp"))
}

#[test]
fn test_version_flag() {
    let output = chirp()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "Version flag should exit with code 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("chirp {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_short_version_flag() {
    let output = chirp().arg("-V").output().expect("Failed to execute binary");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("chirp "));
}

#[test]
fn test_help_flag_lists_environment() {
    let output = chirp().arg("--help").output().expect("Failed to execute binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USAGE"));
    for var in ["CHIRP_THEME", "CHIRP_LOG", "CHIRP_LOG_FILE"] {
        assert!(stdout.contains(var), "help should mention {}", var);
    }
}

#[test]
fn test_flags_win_over_bad_environment() {
    let output = chirp()
        .arg("--version")
        .env("CHIRP_THEME", "neon")
        .output()
        .expect("Failed to execute binary");
    assert!(output.status.success());
}

#[test]
fn test_invalid_theme_fails_before_terminal_setup() {
    let output = chirp()
        .env("CHIRP_THEME", "neon")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CHIRP_THEME must be one of: dark, light"));
    assert!(stderr.contains("hint: Check the CHIRP_* environment variables"));
}
