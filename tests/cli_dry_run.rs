mod common;

use assert_cmd::prelude::*;
use common::{resfilter_cmd, TestTree};
use predicates::prelude::*;

#[test]
fn test_dry_run_lists_planned_files() -> Result<(), Box<dyn std::error::Error>> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/b.txt", b"b");
    tree.file("src/a/c.txt", b"c");
    tree.file("src/skip.log", b"l");

    resfilter_cmd()
        .arg(&src)
        .arg("-o")
        .arg(tree.path("target"))
        .args(["-x", "*.log", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--- Dry Run: Files that would be copied ---",
        ))
        .stdout(predicate::str::is_match(r"(?s)- a/c\.txt \(from .*\)\n- b\.txt \(from .*\)")?)
        .stdout(predicate::str::contains("skip.log").not())
        .stdout(predicate::str::contains("--- End Dry Run ---"));

    assert!(!tree.path("target").exists());
    Ok(())
}

#[test]
fn test_dry_run_with_nothing_to_copy() -> Result<(), Box<dyn std::error::Error>> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file_at("src/a.txt", b"a", 1_000);
    tree.file_at("target/a.txt", b"a", 2_000);

    resfilter_cmd()
        .arg(&src)
        .arg("-o")
        .arg(tree.path("target"))
        .arg("-n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(from").not())
        .stdout(predicate::str::contains("--- End Dry Run ---"));

    Ok(())
}
