// tests/library_api.rs

mod common;

use common::{mtime, set_mtime, TestTree};
use resfilter::errors::{ConfigError, Error};
use resfilter::mapping::{Callback, MappingArgument, PlaceholderSyntax, Table};
use resfilter::{filter, Filter, RebuildHook};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

fn table(pairs: &[(&str, &str)]) -> Table {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// --- Selection ---

#[test]
fn test_include_selects_only_matching_files() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/a.txt", b"A");
    tree.file("src/b.png", b"B");

    assert!(filter([&src]).into(tree.path("target")).include(["*.txt"]).run()?);

    assert_eq!(tree.read("target/a.txt"), "A");
    assert!(!tree.path("target/b.png").exists());
    Ok(())
}

#[test]
fn test_exclude_wins_over_include() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/keep.txt", b"k");
    tree.file("src/drop.txt", b"d");
    tree.file("src/conf/app.xml", b"x");
    tree.file("src/conf/local.xml", b"l");

    filter([&src])
        .into(tree.path("target"))
        .include(["*.txt", "conf/*.xml"])
        .exclude(["drop.*", "**/local.xml"])
        .run()?;

    assert!(tree.path("target/keep.txt").exists());
    assert!(tree.path("target/conf/app.xml").exists());
    assert!(!tree.path("target/drop.txt").exists());
    assert!(!tree.path("target/conf/local.xml").exists());
    Ok(())
}

#[test]
fn test_patterns_apply_relative_to_each_source() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let one = tree.dir("one");
    let two = tree.dir("nested/deeper/two");
    tree.file("one/a.txt", b"1");
    tree.file("nested/deeper/two/b.txt", b"2");
    tree.file("nested/deeper/two/sub/c.txt", b"3");

    filter([&one, &two])
        .into(tree.path("target"))
        .include(["*.txt"])
        .run()?;

    assert!(tree.path("target/a.txt").exists());
    assert!(tree.path("target/b.txt").exists());
    assert!(!tree.path("target/sub/c.txt").exists());
    Ok(())
}

#[test]
fn test_nested_structure_is_reproduced() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/a/b/c/deep.txt", b"deep");
    tree.dir("src/empty");

    filter([&src]).into(tree.path("target")).run()?;

    assert_eq!(tree.read("target/a/b/c/deep.txt"), "deep");
    assert!(tree.path("target/empty").is_dir());
    Ok(())
}

#[test]
fn test_empty_directory_reproduced_and_then_up_to_date() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.dir("src/empty");
    tree.file("src/a.txt", b"a");
    let target = tree.path("target");

    let f = filter([&src]).into(&target);
    assert!(f.run()?);
    assert!(target.join("empty").is_dir());
    assert!(!f.run()?);
    Ok(())
}

#[test]
fn test_directories_are_subject_to_patterns() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.dir("src/empty");
    tree.dir("src/cache");
    tree.file("src/a.txt", b"a");

    filter([&src])
        .into(tree.path("only-txt"))
        .include(["*.txt"])
        .run()?;
    filter([&src])
        .into(tree.path("no-cache"))
        .exclude(["cache"])
        .run()?;

    assert!(!tree.path("only-txt/empty").exists());
    assert!(tree.path("no-cache/empty").is_dir());
    assert!(!tree.path("no-cache/cache").exists());
    Ok(())
}

#[test]
fn test_wildcards_do_not_select_dotfiles() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/.hidden", b"h");
    tree.file("src/sub/.hidden", b"h");
    tree.file("src/visible.txt", b"v");

    filter([&src]).into(tree.path("star")).include(["*", "**/*"]).run()?;
    filter([&src]).into(tree.path("dot")).include([".*", "**/.*"]).run()?;
    filter([&src]).into(tree.path("all")).run()?;

    assert!(tree.path("star/visible.txt").exists());
    assert!(!tree.path("star/.hidden").exists());
    assert!(!tree.path("star/sub/.hidden").exists());
    assert!(tree.path("dot/.hidden").exists());
    assert!(tree.path("dot/sub/.hidden").exists());
    assert!(!tree.path("dot/visible.txt").exists());
    assert!(tree.path("all/.hidden").exists());
    assert!(tree.path("all/sub/.hidden").exists());
    Ok(())
}

// --- Incremental copy ---

#[test]
fn test_second_run_does_nothing() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file_at("src/a.txt", b"A", 1_000);
    tree.file_at("src/sub/b.txt", b"B", 1_000);
    let target = tree.path("target");

    let f = filter([&src]).into(&target);
    assert!(f.run()?);

    set_mtime(&target.join("a.txt"), 2_000);
    set_mtime(&target.join("sub/b.txt"), 2_000);
    assert!(!f.run()?);
    assert_eq!(mtime(&target.join("a.txt")).unix_seconds(), 2_000);
    assert_eq!(mtime(&target.join("sub/b.txt")).unix_seconds(), 2_000);
    Ok(())
}

#[test]
fn test_equal_mtime_is_up_to_date() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file_at("src/a.txt", b"new", 1_000);
    tree.file_at("target/a.txt", b"old", 1_000);

    assert!(!filter([&src]).into(tree.path("target")).run()?);
    assert_eq!(tree.read("target/a.txt"), "old");
    Ok(())
}

#[test]
fn test_newer_source_is_recopied() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file_at("src/a.txt", b"new", 2_000);
    tree.file_at("src/b.txt", b"same", 500);
    tree.file_at("target/a.txt", b"old", 1_000);
    tree.file_at("target/b.txt", b"kept", 1_000);

    assert!(filter([&src]).into(tree.path("target")).run()?);
    assert_eq!(tree.read("target/a.txt"), "new");
    assert_eq!(tree.read("target/b.txt"), "kept");
    Ok(())
}

#[test]
fn test_empty_plan_leaves_target_untouched() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file_at("src/a.txt", b"a", 1_000);
    tree.file_at("target/a.txt", b"a", 2_000);
    let target = tree.path("target");
    set_mtime(&target, 3_000);

    assert!(!filter([&src]).into(&target).run()?);
    assert_eq!(mtime(&target).unix_seconds(), 3_000);
    Ok(())
}

#[test]
fn test_non_empty_plan_touches_target() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/a.txt", b"a");
    let target = tree.dir("target");
    set_mtime(&target, 1_000);

    assert!(filter([&src]).into(&target).run()?);
    assert!(mtime(&target).unix_seconds() > 1_000);
    Ok(())
}

#[test]
fn test_empty_source_returns_false() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    assert!(!filter([&src]).into(tree.path("target")).run()?);
    assert!(!tree.path("target").exists());
    Ok(())
}

// --- Multiple sources ---

#[test]
fn test_later_source_overrides_earlier() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let one = tree.dir("one");
    let two = tree.dir("two");
    tree.file_at("one/x.txt", b"from one", 1_000);
    tree.file_at("two/x.txt", b"from two", 1_000);
    tree.file("one/only-one.txt", b"1");

    filter([&one]).from([&two]).into(tree.path("target")).run()?;

    assert_eq!(tree.read("target/x.txt"), "from two");
    assert_eq!(tree.read("target/only-one.txt"), "1");
    Ok(())
}

#[test]
fn test_only_stale_copy_is_used() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let one = tree.dir("one");
    let two = tree.dir("two");
    tree.file_at("one/x.txt", b"from one", 3_000);
    tree.file_at("two/x.txt", b"from two", 1_000);
    tree.file_at("target/x.txt", b"old", 2_000);

    filter([&one, &two]).into(tree.path("target")).run()?;

    assert_eq!(tree.read("target/x.txt"), "from one");
    Ok(())
}

#[test]
fn test_repeated_source_is_registered_once() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let one = tree.dir("one");
    let two = tree.dir("two");
    tree.file_at("one/x.txt", b"from one", 1_000);
    tree.file_at("two/x.txt", b"from two", 1_000);

    // Re-adding `one` keeps its original position, so `two` still wins.
    let f = filter([&one, &two]).from([&one]).into(tree.path("target"));
    assert_eq!(f.sources().len(), 2);
    f.run()?;
    assert_eq!(tree.read("target/x.txt"), "from two");
    Ok(())
}

// --- Mapping ---

#[test]
fn test_no_mapping_copies_bytes_exactly() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    let bytes: Vec<u8> = (0..=255u8).chain(b"${version}".iter().copied()).collect();
    tree.file("src/blob.bin", &bytes);

    filter([&src]).into(tree.path("target")).run()?;

    assert_eq!(fs::read(tree.path("target/blob.bin"))?, bytes);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(tree.path("target/blob.bin"))?.permissions().mode();
        assert_eq!(mode & 0o777, resfilter::constants::TARGET_FILE_MODE);
    }
    Ok(())
}

#[test]
fn test_unresolved_placeholders_pass_through() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/info.txt", b"Version: ${version}, Build: ${build}");

    filter([&src])
        .into(tree.path("target"))
        .using(table(&[("version", "1.2")]))?
        .run()?;

    assert_eq!(tree.read("target/info.txt"), "Version: 1.2, Build: ${build}");
    Ok(())
}

#[test]
fn test_syntaxes_do_not_cross() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/mixed.txt", b"maven=${version} ant=@version@ ruby=#{version}");
    let values = table(&[("version", "1.2")]);

    filter([&src])
        .into(tree.path("ant"))
        .using(("ant", values.clone()))?
        .run()?;
    filter([&src])
        .into(tree.path("maven"))
        .using(("maven", values.clone()))?
        .run()?;
    filter([&src])
        .into(tree.path("ruby"))
        .using((PlaceholderSyntax::Ruby, values))?
        .run()?;

    assert_eq!(tree.read("ant/mixed.txt"), "maven=${version} ant=1.2 ruby=#{version}");
    assert_eq!(tree.read("maven/mixed.txt"), "maven=1.2 ant=@version@ ruby=#{version}");
    assert_eq!(tree.read("ruby/mixed.txt"), "maven=${version} ant=@version@ ruby=1.2");
    Ok(())
}

#[test]
fn test_custom_regex_mapping() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/db.conf", b"host=[[db.host]] port=[[db.port]]");

    filter([&src])
        .into(tree.path("target"))
        .using(MappingArgument::Pattern(
            r"\[\[(\w+)\.(\w+)\]\]".to_string(),
            table(&[("dbhost", "localhost")]),
        ))?
        .run()?;

    assert_eq!(tree.read("target/db.conf"), "host=localhost port=[[db.port]]");
    Ok(())
}

#[test]
fn test_callback_mapping_sees_relative_paths() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/a.txt", b"alpha");
    tree.file("src/sub/b.txt", b"beta");

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_callback = Arc::clone(&seen);
    filter([&src])
        .into(tree.path("target"))
        .using(Callback::new(move |path, content| {
            seen_in_callback
                .lock()
                .unwrap()
                .push(path.to_string_lossy().replace('\\', "/"));
            Ok(content.to_ascii_uppercase())
        }))?
        .run()?;

    assert_eq!(tree.read("target/a.txt"), "ALPHA");
    assert_eq!(tree.read("target/sub/b.txt"), "BETA");
    assert_eq!(*seen.lock().unwrap(), vec!["a.txt", "sub/b.txt"]);
    Ok(())
}

#[test]
fn test_failing_callback_aborts_run() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/a.txt", b"a");

    let result = filter([&src])
        .into(tree.path("target"))
        .using(Callback::new(|_, _| Err(anyhow::anyhow!("refused"))))?
        .run();

    match result {
        Err(Error::Transform { path, source }) => {
            assert_eq!(path, "a.txt");
            assert_eq!(source.to_string(), "refused");
        }
        other => panic!("Expected Error::Transform, got {:?}", other),
    }
    Ok(())
}

// --- Validation ---

#[test]
fn test_validation_errors() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");

    assert!(matches!(
        Filter::new().into(tree.path("t")).run(),
        Err(Error::Config(ConfigError::NoSources))
    ));
    assert!(matches!(
        Filter::new().from([&src]).run(),
        Err(Error::Config(ConfigError::NoTarget))
    ));
    assert!(matches!(
        Filter::new()
            .from([tree.path("absent")])
            .into(tree.path("t"))
            .run(),
        Err(Error::MissingSource { .. })
    ));
    assert!(matches!(
        Filter::new().using(MappingArgument::Pattern("no-group".to_string(), Table::new())),
        Err(Error::Config(ConfigError::InvalidMappingArgument { .. }))
    ));
    Ok(())
}

// --- Rebuild hook ---

#[test]
fn test_rebuild_hook_runs_for_own_target() -> anyhow::Result<()> {
    let tree = TestTree::new();
    let src = tree.dir("src");
    tree.file("src/a.txt", b"a");
    let target = tree.path("target");

    let f = filter([&src]).into(&target);
    assert!(!f.on_rebuilt(Path::new(&tree.path("other")))?);
    assert!(f.on_rebuilt(&target)?);
    assert!(target.join("a.txt").exists());
    Ok(())
}
