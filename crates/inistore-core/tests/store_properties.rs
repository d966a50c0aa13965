//! Integration tests for the INI store.
//!
//! These tests exercise the public API end-to-end (parse, locate, mutate,
//! export, save and reload) against a realistic settings file.

use inistore_core::{Document, IniFile, Node};
use uuid::Uuid;

const SETTINGS: &str = "\
; RZL blink flextime settings
[Genaral]
FirstRunThisDay=

[Flextime] ; all values in minutes
MinutesToWork=468
#Offset=0
Offset=15
;DaylyGrow=15
DaylyGrow=30

[Blink]
Enabled=ja
";

fn scratch_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("inistore_it_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("temp dir must be creatable");
    dir.join(name)
}

// ── Round-trip ────────────────────────────────────────────────────────────────

#[test]
fn test_text_round_trip_preserves_captions_and_entries() {
    // Arrange
    let original = Document::parse(SETTINGS);

    // Act
    let reloaded = Document::parse(&original.to_text());

    // Assert
    assert_eq!(original.list_captions(), reloaded.list_captions());
    for caption in original.list_captions() {
        assert_eq!(
            original.list_entries(&caption, true),
            reloaded.list_entries(&caption, true),
            "entries of [{caption}] must survive the round trip"
        );
    }
    assert_eq!(original, reloaded);
}

#[test]
fn test_file_round_trip_preserves_comments_verbatim() {
    // Arrange
    let path = scratch_path("Settings.ini");
    std::fs::write(&path, SETTINGS).unwrap();

    // Act
    let mut file = IniFile::open(&path).unwrap();
    file.document_mut().set("Genaral", "FirstRunThisDay", "06.05.2024 07:31:12");
    file.save().unwrap();
    let reloaded = IniFile::open(&path).unwrap();

    // Assert: only the edited line differs.
    let before: Vec<&str> = SETTINGS.lines().collect();
    let after: Vec<&str> = reloaded.document().lines().iter().collect();
    assert_eq!(before.len(), after.len());
    let changed: Vec<usize> = (0..before.len()).filter(|&i| before[i] != after[i]).collect();
    assert_eq!(changed, vec![2]);
    assert_eq!(after[2], "FirstRunThisDay=06.05.2024 07:31:12");

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

// ── First-match determinism ───────────────────────────────────────────────────

#[test]
fn test_duplicate_section_always_resolves_to_first() {
    let doc = Document::parse("[A]\nk=1\n[B]\n[A]\nk=2\n");

    for _ in 0..5 {
        assert_eq!(doc.find_caption_line("A", true), Some(0));
        assert_eq!(doc.find_caption_line("a", false), Some(0));
    }
    assert_eq!(doc.get_value("A", "k", true), "1");
}

// ── Set-then-get ──────────────────────────────────────────────────────────────

#[test]
fn test_set_then_get_returns_value() {
    let cases = [
        ("Genaral", "FirstRunThisDay", "06.05.2024 07:31:12"),
        ("Flextime", "Offset", "20"),
        ("Flextime", "NewKey", "new value"),
        ("Blink", "Enabled", "nein"),
        ("Brand New", "Key", "V"),
    ];
    for case_sensitive in [true, false] {
        for search_comments in [true, false] {
            let mut doc = Document::parse(SETTINGS);
            for (section, key, value) in cases {
                assert!(doc.set_value(section, key, value, case_sensitive, search_comments));
                assert_eq!(
                    doc.get_value(section, key, case_sensitive),
                    value,
                    "[{section}] {key} (case_sensitive={case_sensitive}, search_comments={search_comments})"
                );
            }
        }
    }
}

// ── Comment revival ───────────────────────────────────────────────────────────

#[test]
fn test_set_value_revives_commented_entry_in_place() {
    // Arrange
    let mut doc = Document::parse("[S]\nother=1\n#Key=V\n");
    let count = doc.line_count();

    // Act
    doc.set_value("S", "Key", "V", false, true);

    // Assert
    assert_eq!(doc.line_count(), count);
    assert_eq!(doc.lines().get(2), Some("Key=V"));
    assert_eq!(doc.get_value("S", "Key", false), "V");
}

#[test]
fn test_live_entry_wins_over_matching_commented_entry() {
    let mut doc = Document::parse(SETTINGS);
    doc.set_value("Flextime", "DaylyGrow", "15", false, true);
    // DaylyGrow=30 is live, so it is replaced rather than reviving ";DaylyGrow=15".
    assert_eq!(doc.lines().get(8), Some(";DaylyGrow=15"));
    assert_eq!(doc.lines().get(9), Some("DaylyGrow=15"));
}

// ── New-section creation ──────────────────────────────────────────────────────

#[test]
fn test_set_value_for_missing_section_appends_two_lines() {
    // Arrange
    let mut doc = Document::parse(SETTINGS);
    let count = doc.line_count();
    assert!(!doc.section_exists("NewSec", false));

    // Act
    doc.set_value("NewSec", "K", "V", false, false);

    // Assert
    assert_eq!(doc.line_count(), count + 2);
    assert_eq!(doc.lines().get(count), Some("[NewSec]"));
    assert_eq!(doc.lines().get(count + 1), Some("K=V"));
    assert!(doc.section_exists("NewSec", false));
}

// ── Delete-then-absent ────────────────────────────────────────────────────────

#[test]
fn test_delete_then_entry_is_absent() {
    let mut doc = Document::parse(SETTINGS);

    assert!(doc.delete_value("Flextime", "Offset", true));

    assert!(!doc.entry_exists("Flextime", "Offset", true));
    assert_eq!(doc.get_value("Flextime", "Offset", true), "");
    // The commented-out sibling is untouched.
    assert!(doc.lines().iter().any(|line| line == "#Offset=0"));
}

#[test]
fn test_comment_then_entry_is_absent() {
    let mut doc = Document::parse(SETTINGS);

    assert!(doc.comment_value("Blink", "enabled", false));

    assert!(!doc.get_bool_value("Blink", "Enabled"));
    assert!(doc.lines().iter().any(|line| line == "#Enabled=ja"));
}

// ── Boolean coercion ──────────────────────────────────────────────────────────

#[test]
fn test_bool_coercion_table() {
    let truthy = ["true", "TRUE", "True", "1", "ja", "JA", "j", "J", "y", "Y"];
    let falsy = ["", "false", "0", "yes", "no", "nein", "n", "on", "2", "ja!"];

    for value in truthy {
        let mut doc = Document::new();
        doc.set("Blink", "Enabled", value);
        assert!(doc.get_bool_value("Blink", "Enabled"), "{value:?} must be true");
    }
    for value in falsy {
        let mut doc = Document::new();
        doc.set("Blink", "Enabled", value);
        assert!(!doc.get_bool_value("Blink", "Enabled"), "{value:?} must be false");
    }
    assert!(!Document::new().get_bool_value("Blink", "Enabled"));
}

// ── Tree export ───────────────────────────────────────────────────────────────

#[test]
fn test_export_tree_mirrors_live_entries() {
    let path = scratch_path("Settings.ini");
    std::fs::write(&path, SETTINGS).unwrap();

    let tree = IniFile::open(&path).unwrap().export_tree();

    assert_eq!(tree.name, "Settings");
    let flextime = tree.child("Flextime").expect("Flextime section");
    assert_eq!(
        flextime.children,
        vec![
            Node::leaf("MinutesToWork", "468"),
            Node::leaf("Offset", "15"),
            Node::leaf("DaylyGrow", "30"),
        ]
    );
    // `FirstRunThisDay=` has no value and is not a pattern entry.
    assert!(tree.child("Genaral").unwrap().children.is_empty());

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}
