// Exercise the binary surface without a TTY: help/version parse and exit
// before the terminal is touched, and a piped stdin is rejected cleanly.

use std::process::{Command, Stdio};

fn wodrank() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin("wodrank"))
}

#[test]
fn help_describes_the_tool() {
    let out = wodrank().arg("--help").output().expect("run --help");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("percentile"));
    assert!(stdout.contains("--server"));
    assert!(stdout.contains("--gender"));
}

#[test]
fn version_flag_works() {
    let out = wodrank().arg("--version").output().expect("run --version");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("wodrank"));
}

#[test]
fn unknown_flag_is_rejected() {
    let out = wodrank().arg("--bogus").output().expect("run --bogus");
    assert!(!out.status.success());
}

#[test]
fn piped_stdin_is_rejected() {
    let out = wodrank()
        .stdin(Stdio::piped())
        .output()
        .expect("run with piped stdin");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("stdin must be a tty"));
}
