use crate::common::command::{command_stdout, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn rewound_false_start_prefers_the_longer_block(workspace_dir: TempDir) {
    // the added "wren();" first aligns with the removed one that is followed
    // by "quail();"; only the rewind lets xerus/yak/zorse form a full block
    let old = "\
wren();
quail();
c1
c2
c3
c4
xerus();
yak();
zorse();
d1
d2
d3
d4
";
    let new = "\
c1
c2
c3
c4
d1
d2
d3
d4
wren();
xerus();
yak();
zorse();
";
    write_pair(workspace_dir.path(), old, new);

    let expected = "\
-m wren();
-. quail();
 . c1
 . c2
 . c3
 . c4
-m xerus();
-m yak();
-m zorse();
 . d1
 . d2
 . d3
 . d4
+m wren();
+M xerus();
+M yak();
+M zorse();
";
    let actual = command_stdout(workspace_dir.path(), &["annotate", "old.txt", "new.txt"]);

    pretty_assertions::assert_eq!(actual, expected);
}
