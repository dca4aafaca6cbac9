use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn smartbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("smartbook").unwrap();
    cmd.env_remove("SMARTBOOK_DEBUG_LOG")
        .args(["--data-dir", data_dir.to_str().unwrap()]);
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_str(&String::from_utf8_lossy(output)).expect("Failed to parse JSON output")
}

fn run(data_dir: &Path, args: &[&str]) -> Value {
    let output = smartbook(data_dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

/// Three chapters; the first spans two pages at the default font size.
fn write_book(dir: &TempDir) -> PathBuf {
    let book = json!({
        "title": "Field Notes",
        "chapters": [
            { "title": "Morning", "content": "Birdsong at dawn.\n".repeat(300) },
            { "title": "Noon", "content": "" },
            { "title": "Evening", "content": "The light fades. 夜幕降临。" }
        ]
    });
    let path = dir.path().join("field-notes.json");
    fs::write(&path, serde_json::to_vec(&book).unwrap()).unwrap();
    path
}

mod paginate_tests {
    use super::*;

    #[test]
    fn test_paginate_default_font() {
        let dir = tempdir().unwrap();
        let book = write_book(&dir);

        let json = run(dir.path(), &["paginate", book.to_str().unwrap()]);
        assert_eq!(json["data"]["title"], "Field Notes");
        assert_eq!(json["data"]["chars_per_page"], 3000);
        assert_eq!(json["data"]["page_count"], 4);
        assert_eq!(json["data"]["pages"][2]["chapter_title"], "Noon");
        assert_eq!(json["data"]["pages"][2]["content"], "");
    }

    #[test]
    fn test_paginate_font_override() {
        let dir = tempdir().unwrap();
        let book = write_book(&dir);

        let json = run(
            dir.path(),
            &["paginate", book.to_str().unwrap(), "--font-size", "28"],
        );
        assert_eq!(json["data"]["font_size"], 28);
        assert_eq!(json["data"]["chars_per_page"], 1928);
        assert_eq!(json["data"]["page_count"], 5);
    }

    #[test]
    fn test_paginate_missing_book_fails() {
        let dir = tempdir().unwrap();

        smartbook(dir.path())
            .args(["paginate", dir.path().join("nope.json").to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Book content unavailable"));
    }
}

mod read_tests {
    use super::*;

    #[test]
    fn test_read_opens_at_first_page() {
        let dir = tempdir().unwrap();
        let book = write_book(&dir);

        let json = run(dir.path(), &["read", book.to_str().unwrap()]);
        assert_eq!(json["data"]["book_id"], "field-notes");
        assert_eq!(json["data"]["status"], "ready");
        assert_eq!(json["data"]["page_index"], 0);
        assert_eq!(json["data"]["page_count"], 4);
        assert_eq!(json["data"]["chapter_title"], "Morning");
        assert_eq!(json["data"]["chapters"].as_array().unwrap().len(), 3);
        assert_eq!(json["data"]["colors"]["background"], "#FFFFFF");
    }

    #[test]
    fn test_navigation_resumes_from_saved_progress() {
        let dir = tempdir().unwrap();
        let book = write_book(&dir);
        let book = book.to_str().unwrap();

        let json = run(dir.path(), &["read", book, "--action", "next"]);
        assert_eq!(json["data"]["moved"], true);
        assert_eq!(json["data"]["page_index"], 1);

        let json = run(dir.path(), &["read", book, "--action", "next-chapter"]);
        assert_eq!(json["data"]["chapter_title"], "Noon");
        assert_eq!(json["data"]["page_index"], 2);

        let json = run(dir.path(), &["read", book]);
        assert_eq!(json["data"]["page_index"], 2);
        assert_eq!(json["data"]["moved"], false);

        let json = run(dir.path(), &["progress", "show", "--book-id", "field-notes"]);
        assert_eq!(json["data"]["chapter_index"], 1);
        assert_eq!(json["data"]["page_index"], 2);
    }

    #[test]
    fn test_go_to_chapter_out_of_bounds_is_noop() {
        let dir = tempdir().unwrap();
        let book = write_book(&dir);
        let book = book.to_str().unwrap();

        run(dir.path(), &["read", book, "--chapter", "2"]);
        let json = run(dir.path(), &["read", book, "--chapter", "99"]);
        assert_eq!(json["data"]["moved"], false);
        assert_eq!(json["data"]["chapter_index"], 2);
        assert_eq!(json["data"]["progress"], 1.0);
    }

    #[test]
    fn test_read_with_explicit_book_id() {
        let dir = tempdir().unwrap();
        let book = write_book(&dir);

        run(
            dir.path(),
            &["read", book.to_str().unwrap(), "--book-id", "notes", "--page", "3"],
        );
        let json = run(dir.path(), &["progress", "show", "--book-id", "notes"]);
        assert_eq!(json["data"]["page_index"], 3);
    }

    #[test]
    fn test_read_missing_book_fails() {
        let dir = tempdir().unwrap();

        smartbook(dir.path())
            .args(["read", dir.path().join("gone.json").to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Book content unavailable"));
    }
}

mod progress_tests {
    use super::*;

    #[test]
    fn test_progress_show_unknown_book_fails() {
        let dir = tempdir().unwrap();

        smartbook(dir.path())
            .args(["progress", "show", "--book-id", "unknown"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No progress saved"));
    }

    #[test]
    fn test_progress_list_and_clear() {
        let dir = tempdir().unwrap();
        let book = write_book(&dir);
        let book = book.to_str().unwrap();

        run(dir.path(), &["read", book]);
        run(dir.path(), &["read", book, "--book-id", "second"]);

        let json = run(dir.path(), &["progress", "list"]);
        assert_eq!(json["data"]["count"], 2);

        let json = run(dir.path(), &["progress", "clear", "--book-id", "second"]);
        assert_eq!(json["data"]["removed"], true);

        let json = run(dir.path(), &["progress", "list"]);
        assert_eq!(json["data"]["count"], 1);
    }
}

mod settings_tests {
    use super::*;

    #[test]
    fn test_settings_show_defaults() {
        let dir = tempdir().unwrap();

        let json = run(dir.path(), &["settings", "show"]);
        assert_eq!(json["data"]["font_size"], 18);
        assert_eq!(json["data"]["font_family"], "System");
        assert_eq!(json["data"]["page_turn_style"], "slide");
    }

    #[test]
    fn test_settings_set_persists_and_affects_pagination() {
        let dir = tempdir().unwrap();
        let book = write_book(&dir);

        let json = run(
            dir.path(),
            &[
                "settings",
                "set",
                "--font-size",
                "40",
                "--theme",
                "sepia",
                "--font-family",
                "georgia",
                "--page-turn",
                "curl",
            ],
        );
        assert_eq!(json["data"]["font_size"], 28);
        assert_eq!(json["data"]["background_theme"], "sepia");
        assert_eq!(json["data"]["font_family"], "Georgia");
        assert_eq!(json["data"]["colors"]["background"], "#F4ECD8");

        let json = run(dir.path(), &["settings", "show"]);
        assert_eq!(json["data"]["page_turn_style"], "curl");

        let json = run(dir.path(), &["paginate", book.to_str().unwrap()]);
        assert_eq!(json["data"]["chars_per_page"], 1928);
    }

    #[test]
    fn test_settings_line_spacing_snaps() {
        let dir = tempdir().unwrap();

        let json = run(dir.path(), &["settings", "set", "--line-spacing", "11"]);
        assert_eq!(json["data"]["line_spacing"], 10);
    }

    #[test]
    fn test_settings_unknown_font_family_fails() {
        let dir = tempdir().unwrap();

        smartbook(dir.path())
            .args(["settings", "set", "--font-family", "Comic Sans"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown font family"));
    }
}

#[test]
fn test_completions() {
    let dir = tempdir().unwrap();

    smartbook(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smartbook"));
}
