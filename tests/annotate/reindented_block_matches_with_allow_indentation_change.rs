use crate::common::command::{command_stdout, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn reindented_block_matches_with_allow_indentation_change(workspace_dir: TempDir) {
    let old = "\
    foo();
    bar();
c1
c2
c3
";
    let new = "\
c1
c2
c3
  foo();
  bar();
";
    write_pair(workspace_dir.path(), old, new);

    let expected = "\
-m     foo();
-m     bar();
 . c1
 . c2
 . c3
+m   foo();
+m   bar();
";
    let actual = command_stdout(
        workspace_dir.path(),
        &[
            "annotate",
            "old.txt",
            "new.txt",
            "--color-moved-ws=allow-indentation-change",
        ],
    );

    pretty_assertions::assert_eq!(actual, expected);
}
