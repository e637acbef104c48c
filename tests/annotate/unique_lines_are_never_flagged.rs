use crate::common::command::{command_stdout, workspace_dir, write_pair};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use rstest::rstest;

#[rstest]
fn unique_lines_are_never_flagged(workspace_dir: TempDir) {
    // distinct prefixes guarantee no added line ever equals a removed one
    let old: String = (0..8)
        .map(|index| format!("old-{index}-{}\n", Word().fake::<String>()))
        .collect();
    let new: String = (0..8)
        .map(|index| format!("new-{index}-{}\n", Word().fake::<String>()))
        .collect();
    write_pair(workspace_dir.path(), &old, &new);

    let actual = command_stdout(workspace_dir.path(), &["annotate", "old.txt", "new.txt"]);

    for line in actual.lines() {
        assert_eq!(
            line.chars().nth(1),
            Some('.'),
            "line should not be flagged as moved: {line}"
        );
    }
}
