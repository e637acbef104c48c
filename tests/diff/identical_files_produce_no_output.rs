use crate::common::command::{command_stdout, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn identical_files_produce_no_output(workspace_dir: TempDir) {
    let content = "same\nlines\neverywhere\n";
    write_pair(workspace_dir.path(), content, content);

    let actual = command_stdout(workspace_dir.path(), &["diff", "old.txt", "new.txt"]);

    pretty_assertions::assert_eq!(actual, "");
}
