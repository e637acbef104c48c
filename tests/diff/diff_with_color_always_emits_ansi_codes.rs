use crate::common::command::{command_stdout, relocated_new, relocated_old, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn diff_with_color_always_emits_ansi_codes(
    workspace_dir: TempDir,
    relocated_old: String,
    relocated_new: String,
) {
    write_pair(workspace_dir.path(), &relocated_old, &relocated_new);

    let actual = command_stdout(
        workspace_dir.path(),
        &[
            "diff",
            "old.txt",
            "new.txt",
            "--color-moved",
            "--color=always",
        ],
    );

    // moved removals render magenta, moved additions cyan, headers bold
    assert!(actual.contains("\u{1b}[35m"), "expected magenta moved removals");
    assert!(actual.contains("\u{1b}[36m"), "expected cyan moved additions");
    assert!(actual.contains("\u{1b}[1m"), "expected bold file headers");
}
