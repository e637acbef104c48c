use crate::common::command::{command_stdout, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn respaced_block_matches_with_ignore_space_change(workspace_dir: TempDir) {
    let old = "\
alpha  beta();
gamma   delta();
k1
k2
k3
";
    let new = "\
k1
k2
k3
alpha beta();
gamma delta();
";
    write_pair(workspace_dir.path(), old, new);

    let expected = "\
-m alpha  beta();
-m gamma   delta();
 . k1
 . k2
 . k3
+m alpha beta();
+m gamma delta();
";
    let actual = command_stdout(
        workspace_dir.path(),
        &[
            "annotate",
            "old.txt",
            "new.txt",
            "--color-moved-ws=ignore-space-change",
        ],
    );

    pretty_assertions::assert_eq!(actual, expected);
}
