use crate::common::command::{command_stdout, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn adjacent_blocks_alternate_stripe_classes(workspace_dir: TempDir) {
    // three unrelated blocks land back to back on the added side: their
    // stripe classes must alternate, while separated blocks stay on the
    // base class
    let old = "\
r1();
r2();
c1
c2
c3
c4
b1();
b2();
c5
c6
c7
g1();
g2();
";
    let new = "\
c1
c2
r1();
r2();
b1();
b2();
g1();
g2();
c3
c4
c5
c6
c7
";
    write_pair(workspace_dir.path(), old, new);

    let expected = "\
-m r1();
-m r2();
 . c1
 . c2
+m r1();
+m r2();
+M b1();
+M b2();
+m g1();
+m g2();
 . c3
 . c4
-m b1();
-m b2();
 . c5
 . c6
 . c7
-m g1();
-m g2();
";
    let actual = command_stdout(workspace_dir.path(), &["annotate", "old.txt", "new.txt"]);

    pretty_assertions::assert_eq!(actual, expected);
}
