//! Unit tests for the theme module
//!
//! Tests the INI document model, category/selection types, and report
//! rendering. No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::path::Path;

use crate::services::theme::{
    ApplyReport, CategoryStatus, IniDocument, ThemeCategory, ThemeError, ThemeSelection,
};

fn parse(content: &str) -> IniDocument {
    IniDocument::parse(content, Path::new("test.ini")).unwrap()
}

#[test]
fn ini_parse_sections_and_keys() {
    let doc = parse("[Settings]\ngtk-theme-name=Adwaita\n\n[Other]\nkey = spaced value\n");

    assert_eq!(doc.get("Settings", "gtk-theme-name"), Some("Adwaita"));
    assert_eq!(doc.get("Other", "key"), Some("spaced value"));
}

#[test]
fn ini_get_missing_section_or_key() {
    let doc = parse("[Settings]\ngtk-theme-name=Adwaita\n");

    assert_eq!(doc.get("Settings", "absent-key"), None);
    assert_eq!(doc.get("Absent", "gtk-theme-name"), None);
}

#[test]
fn ini_sections_and_keys_are_case_sensitive() {
    let doc = parse("[Icons]\nTheme=Papirus\n");

    assert_eq!(doc.get("Icons", "Theme"), Some("Papirus"));
    assert_eq!(doc.get("icons", "Theme"), None);
    assert_eq!(doc.get("Icons", "theme"), None);
}

#[test]
fn ini_roundtrip_is_byte_identical() {
    let content = "# leading comment\n\n[Settings]\ngtk-theme-name = Adwaita\n; note\n\n[Other]\nkeep=me\n";

    let doc = parse(content);

    assert_eq!(doc.to_string(), content);
}

#[test]
fn ini_preserves_a_missing_final_newline() {
    let content = "[Settings]\ngtk-theme-name=Adwaita";

    let mut doc = parse(content);
    assert_eq!(doc.to_string(), content);

    doc.set("Settings", "gtk-theme-name", "Breeze");
    assert_eq!(doc.to_string(), "[Settings]\ngtk-theme-name=Breeze");
}

#[test]
fn ini_fresh_documents_end_with_a_newline() {
    let mut doc = IniDocument::default();

    doc.set("Mouse", "cursorTheme", "Bibata");

    assert_eq!(doc.to_string(), "[Mouse]\ncursorTheme=Bibata\n");
}

#[test]
fn ini_set_rewrites_entry_in_place() {
    let mut doc = parse("[Settings]\ngtk-theme-name = Adwaita\nother=kept\n");

    doc.set("Settings", "gtk-theme-name", "Breeze");

    assert_eq!(
        doc.to_string(),
        "[Settings]\ngtk-theme-name=Breeze\nother=kept\n"
    );
}

#[test]
fn ini_set_inserts_after_last_entry() {
    let mut doc = parse("[Settings]\nexisting=1\n\n[Other]\nkeep=me\n");

    doc.set("Settings", "gtk-theme-name", "Breeze");

    assert_eq!(
        doc.to_string(),
        "[Settings]\nexisting=1\ngtk-theme-name=Breeze\n\n[Other]\nkeep=me\n"
    );
}

#[test]
fn ini_set_creates_missing_section() {
    let mut doc = IniDocument::default();

    doc.set("General", "theme", "Ocean");

    assert_eq!(doc.get("General", "theme"), Some("Ocean"));
    assert_eq!(doc.to_string(), "[General]\ntheme=Ocean\n");
}

#[test]
fn ini_set_empty_value() {
    let mut doc = parse("[appearance]\nstyle=fusion\n");

    doc.set("appearance", "color_scheme_path", "");

    assert_eq!(doc.get("appearance", "color_scheme_path"), Some(""));
    assert_eq!(
        doc.to_string(),
        "[appearance]\nstyle=fusion\ncolor_scheme_path=\n"
    );
}

#[test]
fn ini_parse_rejects_garbage_line() {
    let result = IniDocument::parse("[Settings]\nnot an entry\n", Path::new("bad.ini"));

    match result {
        Err(ThemeError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn ini_parse_rejects_entry_before_section() {
    let result = IniDocument::parse("key=value\n", Path::new("bad.ini"));

    assert!(matches!(result, Err(ThemeError::Parse { line: 1, .. })));
}

#[test]
fn ini_empty_content_is_empty_document() {
    let doc = parse("");

    assert!(doc.is_empty());
    assert_eq!(doc.to_string(), "");
}

#[test]
fn category_display_and_parse_roundtrip() {
    for category in ThemeCategory::ALL {
        let parsed: ThemeCategory = category.to_string().parse().unwrap();
        assert_eq!(parsed, category);
    }
}

#[test]
fn category_parse_rejects_unknown_name() {
    assert!("wallpaper".parse::<ThemeCategory>().is_err());
}

#[test]
fn selection_get_and_set_agree() {
    let mut selection = ThemeSelection::default();
    assert!(selection.is_empty());

    selection.set(ThemeCategory::Kvantum, "Ocean");

    assert_eq!(selection.get(ThemeCategory::Kvantum), Some("Ocean"));
    assert_eq!(selection.get(ThemeCategory::Gtk), None);
    assert!(!selection.is_empty());
}

#[test]
fn report_defaults_to_unselected() {
    let report = ApplyReport::default();

    for category in ThemeCategory::ALL {
        assert_eq!(report.status(category), &CategoryStatus::Unselected);
    }
    assert!(!report.any_applied());
}

#[test]
fn report_summary_lists_every_category() {
    let mut report = ApplyReport::default();
    report.set(ThemeCategory::Gtk, CategoryStatus::Applied("Breeze".into()));
    report.set(
        ThemeCategory::Icon,
        CategoryStatus::SkippedInvalid("nope".into()),
    );

    let summary = report.summary();

    assert!(summary.contains("gtk: applied Breeze"));
    assert!(summary.contains("icon: skipped nope (not installed)"));
    assert!(summary.contains("kvantum: no selection"));
    assert!(summary.contains("Restart applications"));
}

#[test]
fn report_summary_without_applied_skips_restart_hint() {
    let mut report = ApplyReport::default();
    report.set(
        ThemeCategory::Gtk,
        CategoryStatus::SkippedInvalid("nope".into()),
    );

    assert!(!report.summary().contains("Restart applications"));
}

#[test]
fn failed_status_carries_reason() {
    let status = CategoryStatus::Failed {
        theme: "Breeze".into(),
        reason: "permission denied".into(),
    };

    let rendered = status.to_string();
    assert!(rendered.contains("Breeze"));
    assert!(rendered.contains("permission denied"));
}
