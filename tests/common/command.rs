use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_dit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dit").expect("Failed to find dit binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Writes the two sides of a comparison as `old.txt` and `new.txt`.
pub fn write_pair(dir: &Path, old: &str, new: &str) {
    write_file(FileSpec::new(dir.join("old.txt"), old.to_string()));
    write_file(FileSpec::new(dir.join("new.txt"), new.to_string()));
}

pub fn command_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_dit_command(dir, args).assert().success();
    let stdout = output.get_output().stdout.clone();
    String::from_utf8(stdout).expect("Command output was not valid UTF-8")
}

#[fixture]
pub fn relocated_old() -> String {
    "alpha();\nbeta();\ngamma();\none\ntwo\nthree\nfour\n".to_string()
}

#[fixture]
pub fn relocated_new() -> String {
    "one\ntwo\nthree\nfour\nalpha();\nbeta();\ngamma();\n".to_string()
}
