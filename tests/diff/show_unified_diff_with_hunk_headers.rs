use crate::common::command::{command_stdout, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_unified_diff_with_hunk_headers(workspace_dir: TempDir) {
    let old = "\
l1
l2
l3
l4
middle old
l6
l7
l8
l9
";
    let new = "\
l1
l2
l3
l4
middle new
l6
l7
l8
l9
";
    write_pair(workspace_dir.path(), old, new);

    let expected = "\
diff --dit a/old.txt b/new.txt
--- a/old.txt
+++ b/new.txt
@@ -2,7 +2,7 @@
 l2
 l3
 l4
-middle old
+middle new
 l6
 l7
 l8
";
    let actual = command_stdout(workspace_dir.path(), &["diff", "old.txt", "new.txt"]);

    pretty_assertions::assert_eq!(actual, expected);
}
