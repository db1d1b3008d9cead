//! End-to-end tests for the append operation against a real document
//! on disk, including cross-invocation lock contention.

use chrono::{NaiveDate, NaiveDateTime};
use hrlog_core::{append_entry, AppendRequest, Error};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, 0)
        .unwrap()
}

fn append(
    document: &Path,
    description: &str,
    current_dir: &Path,
    home_dir: &Path,
    now: NaiveDateTime,
) -> hrlog_core::Result<String> {
    append_entry(&AppendRequest::new(
        document,
        description,
        current_dir,
        home_dir,
        now,
    ))
}

#[test]
fn test_first_entry_creates_full_hierarchy() {
    let home = TempDir::new().unwrap();
    let cwd = home.path().join("projects/foo");
    fs::create_dir_all(&cwd).unwrap();
    let document = home.path().join(".hrloginfo");

    let display = append(
        &document,
        "fix bug",
        &cwd,
        home.path(),
        at(2025, 1, 1, 9, 30),
    )
    .unwrap();
    assert_eq!(display, "~/projects/foo");

    let text = fs::read_to_string(&document).unwrap();
    assert_eq!(
        text,
        "------------------------\n\
         # projects\n\
         > ~/projects\n\
         \n\
         ------------------------\n\
         ## foo\n\
         > ~/projects/foo\n\
         - 20250101.0930: fix bug\n"
    );
}

#[test]
fn test_second_entry_same_path_lands_first() {
    let home = TempDir::new().unwrap();
    let cwd = home.path().join("projects/foo");
    fs::create_dir_all(&cwd).unwrap();
    let document = home.path().join(".hrloginfo");

    append(&document, "fix bug", &cwd, home.path(), at(2025, 1, 1, 9, 30)).unwrap();
    append(&document, "add tests", &cwd, home.path(), at(2025, 1, 1, 14, 5)).unwrap();

    let text = fs::read_to_string(&document).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    let path_idx = lines
        .iter()
        .position(|l| *l == "> ~/projects/foo")
        .unwrap();
    assert_eq!(lines[path_idx + 1], "- 20250101.1405: add tests");
    assert_eq!(lines[path_idx + 2], "- 20250101.0930: fix bug");
}

#[test]
fn test_sibling_directory_inserts_between_existing_blocks() {
    let home = TempDir::new().unwrap();
    let foo = home.path().join("projects/foo");
    let bar = home.path().join("projects/bar");
    let docs = home.path().join("docs");
    fs::create_dir_all(&foo).unwrap();
    fs::create_dir_all(&bar).unwrap();
    fs::create_dir_all(&docs).unwrap();
    let document = home.path().join(".hrloginfo");

    append(&document, "a", &foo, home.path(), at(2025, 1, 1, 9, 0)).unwrap();
    append(&document, "b", &docs, home.path(), at(2025, 1, 1, 9, 10)).unwrap();
    append(&document, "c", &bar, home.path(), at(2025, 1, 1, 9, 20)).unwrap();

    let text = fs::read_to_string(&document).unwrap();
    let headers: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with('#'))
        .collect();
    // "## bar" splices in under "# projects", ahead of the later
    // "# docs" block, without duplicating "# projects".
    assert_eq!(headers, vec!["# projects", "## bar", "## foo", "# docs"]);
    assert_eq!(text.matches("# projects").count(), 1);
}

#[test]
fn test_logging_from_home_fails_and_leaves_document_untouched() {
    let home = TempDir::new().unwrap();
    let document = home.path().join(".hrloginfo");
    fs::write(&document, "------------------------\n# projects\n> ~/projects\n").unwrap();
    let before = fs::read_to_string(&document).unwrap();

    let err = append(
        &document,
        "nope",
        home.path(),
        home.path(),
        at(2025, 1, 1, 9, 30),
    )
    .unwrap_err();
    assert!(matches!(err, Error::PathResolution(_)));

    assert_eq!(fs::read_to_string(&document).unwrap(), before);
}

#[test]
fn test_repeated_runs_do_not_accumulate_whitespace() {
    let home = TempDir::new().unwrap();
    let cwd = home.path().join("projects/foo");
    fs::create_dir_all(&cwd).unwrap();
    let document = home.path().join(".hrloginfo");

    for minute in 0..5 {
        append(
            &document,
            "tick",
            &cwd,
            home.path(),
            at(2025, 1, 1, 10, minute),
        )
        .unwrap();
    }

    let text = fs::read_to_string(&document).unwrap();
    assert!(!text.contains("\n\n\n"));
    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
    assert_eq!(text.matches("- 2025").count(), 5);
}

#[test]
fn test_lock_sentinel_removed_after_run() {
    let home = TempDir::new().unwrap();
    let cwd = home.path().join("projects");
    fs::create_dir_all(&cwd).unwrap();
    let document = home.path().join(".hrloginfo");

    append(&document, "x", &cwd, home.path(), at(2025, 1, 1, 9, 30)).unwrap();
    assert!(!home.path().join(".hrloginfo.lock").exists());
}

#[test]
fn test_concurrent_invocations_both_land() {
    let home = TempDir::new().unwrap();
    let cwd = home.path().join("projects/foo");
    fs::create_dir_all(&cwd).unwrap();
    let document = home.path().join(".hrloginfo");

    std::thread::scope(|scope| {
        for worker in 0..4u32 {
            let document = document.clone();
            let cwd = cwd.clone();
            let home = home.path().to_path_buf();
            scope.spawn(move || {
                append(
                    &document,
                    &format!("note {worker}"),
                    &cwd,
                    &home,
                    at(2025, 1, 1, 9, worker),
                )
                .unwrap();
            });
        }
    });

    let text = fs::read_to_string(&document).unwrap();
    for worker in 0..4 {
        assert_eq!(text.matches(&format!("note {worker}")).count(), 1);
    }
    // Exactly one section chain, never truncated or duplicated.
    assert_eq!(text.matches("## foo").count(), 1);
    assert_eq!(text.matches("# projects").count(), 1);
    assert!(text.ends_with('\n'));
}
