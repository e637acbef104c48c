use crate::common::command::{command_stdout, relocated_new, relocated_old, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn moved_block_is_flagged_on_both_sides(
    workspace_dir: TempDir,
    relocated_old: String,
    relocated_new: String,
) {
    write_pair(workspace_dir.path(), &relocated_old, &relocated_new);

    let expected = "\
-m alpha();
-m beta();
-m gamma();
 . one
 . two
 . three
 . four
+m alpha();
+m beta();
+m gamma();
";
    let actual = command_stdout(workspace_dir.path(), &["annotate", "old.txt", "new.txt"]);

    pretty_assertions::assert_eq!(actual, expected);
}
