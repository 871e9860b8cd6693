use std::path::PathBuf;

use research_core::core_api::{Engine, Session};
use research_render::{
    FieldSelection, JsonStyle, TextRenderOptions, TextStyle, render_json_full,
    render_json_selected, render_selected_lines, render_text, render_text_with_options,
};
use serde_json::{Value, json};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn session_from_fixture(name: &str) -> Session {
    let path = workspace_root().join("tests/fixtures").join(name);
    let bytes = std::fs::read(path).expect("fixture should be readable");
    Engine::new()
        .open_bytes(bytes)
        .expect("fixture should decode")
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let session = session_from_fixture("TestChar.plr");
    let value = render_json_full(&session, JsonStyle::CanonicalV1);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "release",
            "version",
            "layout",
            "game_mode",
            "favorite",
            "summary",
            "research"
        ]
    );
    assert_eq!(value["version"], json!("1.4.4.9"));
    assert_eq!(value["game_mode"], json!("Journey"));
    assert_eq!(
        value["summary"],
        json!({"catalog_items": session.research().len(), "sacrificed_items": 3, "researched_items": 2})
    );
}

#[test]
fn full_json_omits_progress_for_unsacrificed_items() {
    let session = session_from_fixture("TestChar.plr");
    let value = render_json_full(&session, JsonStyle::CanonicalV1);
    let research = &value["research"];

    assert_eq!(
        research["IronShortsword"],
        json!({"id": 6, "needed": 1, "has": 1, "researched": true})
    );
    assert_eq!(
        research["Wood"],
        json!({"id": 9, "needed": 100, "has": 40, "researched": false})
    );
    let dirt = research["DirtBlock"].as_object().expect("DirtBlock object");
    assert!(!dirt.contains_key("has"));
    assert!(!dirt.contains_key("researched"));
}

#[test]
fn selected_json_lists_ids_when_requested() {
    let session = session_from_fixture("TestChar-1.4.3.2.plr");
    let fields = FieldSelection {
        researched: true,
        ids: true,
        ..FieldSelection::default()
    };
    let value = render_json_selected(&fields, &session, JsonStyle::CanonicalV1);
    assert_eq!(value, json!({"researched": [1]}));

    let fields = FieldSelection {
        researched: true,
        ..FieldSelection::default()
    };
    let value = render_json_selected(&fields, &session, JsonStyle::CanonicalV1);
    assert_eq!(value, json!({"researched": ["IronPickaxe"]}));
}

#[test]
fn selected_lines_follow_fixed_order() {
    let session = session_from_fixture("TestChar.plr");
    let fields = FieldSelection {
        summary: true,
        researched: true,
        ..FieldSelection::default()
    };
    let lines = render_selected_lines(&fields, &session);
    assert_eq!(&lines[..2], &["researched=2", "sacrificed=3"]);
    assert_eq!(
        &lines[3..],
        &["researched=IronPickaxe", "researched=IronShortsword"]
    );
}

#[test]
fn text_table_lists_sacrificed_items_by_id() {
    let session = session_from_fixture("TestChar.plr");
    let text = render_text(&session, TextStyle::ResearchTable);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("Release 279 (Terraria 1.4.4.9), layout 1.4.4, Journey mode"));
    assert!(lines[1].starts_with("Researched 2 of "));

    let rows: Vec<&str> = lines
        .iter()
        .skip_while(|line| !line.starts_with("Item"))
        .skip(1)
        .copied()
        .collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("IronPickaxe"));
    assert!(rows[0].ends_with("researched"));
    assert!(rows[1].starts_with("IronShortsword"));
    assert!(rows[2].starts_with("Wood"));
    assert!(rows[2].contains("40/100"));
    assert!(rows[2].ends_with("in progress"));
}

#[test]
fn verbose_text_includes_unstarted_items() {
    let session = session_from_fixture("TestChar.plr");
    let text = render_text_with_options(
        &session,
        TextStyle::ResearchTable,
        TextRenderOptions { verbose: true },
    );
    let dirt = text
        .lines()
        .find(|line| line.starts_with("DirtBlock"))
        .expect("DirtBlock row should be listed");
    assert!(dirt.contains("-/100"));
    assert!(dirt.ends_with("not started"));

    let value: Value = render_json_full(&session, JsonStyle::CanonicalV1);
    let row_count = text.lines().skip_while(|l| !l.starts_with("Item")).count() - 1;
    assert_eq!(row_count, value["research"].as_object().map_or(0, |m| m.len()));
}
