use crate::common::command::{command_stdout, workspace_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn plain_mode_flags_every_matched_line(workspace_dir: TempDir) {
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

    let actual = command_stdout(
        workspace_dir.path(),
        &["annotate", "old.txt", "new.txt", "--color-moved=plain"],
    );

    for line in actual.lines() {
        let class = line.chars().nth(1);
        if line.starts_with(' ') {
            assert_eq!(class, Some('.'), "context line must stay unflagged: {line}");
        } else {
            assert_eq!(class, Some('m'), "changed line must be flagged plain: {line}");
        }
    }
}
