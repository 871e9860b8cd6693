use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use research_core::core_api::{CoreErrorCode, Engine};
use research_core::game_mode::GameMode;
use research_core::{decode, query};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture(name: &str) -> Vec<u8> {
    let path = workspace_root().join("tests/fixtures").join(name);
    fs::read(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {}", path, e))
}

fn name_set(names: Vec<String>) -> BTreeSet<String> {
    names.into_iter().collect()
}

#[test]
fn decodes_research_data() {
    let data = decode(fixture("TestChar.plr")).expect("failed to decode TestChar.plr");

    let pickaxe = data.get("IronPickaxe").expect("IronPickaxe missing");
    assert_eq!(pickaxe.id, 1);
    assert_eq!(pickaxe.needed, 1);
    assert_eq!(pickaxe.has, Some(1));
    assert_eq!(pickaxe.researched, Some(true));

    let shortsword = data.get("IronShortsword").expect("IronShortsword missing");
    assert_eq!(shortsword.id, 6);
    assert_eq!(shortsword.needed, 1);
    assert_eq!(shortsword.has, Some(1));
    assert_eq!(shortsword.researched, Some(true));

    let wood = data.get("Wood").expect("Wood missing");
    assert_eq!(wood.has, Some(40));
    assert_eq!(wood.researched, Some(false));

    let dirt = data.get("DirtBlock").expect("DirtBlock missing");
    assert_eq!(dirt.id, 2);
    assert_eq!(dirt.needed, 100);
    assert_eq!(dirt.has, None);
    assert_eq!(dirt.researched, None);
}

#[test]
fn every_catalog_item_is_present() {
    let engine = Engine::new();
    let session = engine
        .open_bytes(fixture("TestChar.plr"))
        .expect("failed to open TestChar.plr");
    assert_eq!(session.research().len(), engine.catalog().len());
    for item in engine.catalog().items() {
        let record = session.research().get(&item.name).expect("catalog item missing");
        assert_eq!(record.id, item.id);
        assert_eq!(record.needed, item.needed);
        assert_eq!(record.has.is_some(), record.researched.is_some());
    }
}

#[test]
fn helper_functions_work() {
    let bytes = fixture("TestChar.plr");

    let researched = query::researched(&bytes).unwrap();
    assert_eq!(
        name_set(researched),
        name_set(vec!["IronPickaxe".into(), "IronShortsword".into()])
    );

    assert_eq!(query::researched_ids(&bytes).unwrap(), vec![1, 6]);

    let not_researched = name_set(query::not_researched(&bytes).unwrap());
    assert!(!not_researched.contains("IronPickaxe"));
    assert!(!not_researched.contains("IronShortsword"));
    assert!(not_researched.contains("GoldPickaxe"));
    assert!(not_researched.contains("LeadShortsword"));
    assert!(not_researched.contains("Wood"));

    let not_researched_ids = query::not_researched_ids(&bytes).unwrap();
    assert!(!not_researched_ids.contains(&1));
    assert!(!not_researched_ids.contains(&6));
    for id in [2, 3, 4, 5, 100] {
        assert!(not_researched_ids.contains(&id), "id {id} should be listed");
    }
}

#[test]
fn handles_files_with_many_spawn_points() {
    let engine = Engine::new();
    let session = engine
        .open_bytes(fixture("ManySpawnPoints.plr"))
        .expect("failed to open ManySpawnPoints.plr");

    let spawn_points = session
        .sections()
        .iter()
        .find(|span| span.name == "spawn points")
        .expect("spawn point section should be recorded");
    assert_eq!(spawn_points.range.len(), 4 + 200 * 16);

    let dirt = session.research().get("DirtBlock").expect("DirtBlock missing");
    assert_eq!(dirt.id, 2);
    assert_eq!(dirt.needed, 100);
    assert_eq!(dirt.has, Some(100));
    assert_eq!(dirt.researched, Some(true));
}

#[test]
fn rejects_invalid_character_files() {
    let err = decode(fixture("InvalidChar.plr")).expect_err("garbage should not decode");
    assert_eq!(err.code, CoreErrorCode::InvalidFile);
    assert!(err.to_string().to_lowercase().contains("invalid"));
}

#[test]
fn rejects_missing_character_data() {
    let err = decode(b"").expect_err("empty input should not decode");
    assert_eq!(err.code, CoreErrorCode::InvalidFile);
    assert!(err.to_string().to_lowercase().contains("invalid"));

    let short = &fixture("TestChar.plr")[..10];
    let err = decode(short).expect_err("truncated header should not decode");
    assert_eq!(err.code, CoreErrorCode::InvalidFile);
}

#[test]
fn rejects_bad_version_files() {
    let err = decode(fixture("BadVersion.plr")).expect_err("1.3 save should not decode");
    assert_eq!(err.code, CoreErrorCode::UnsupportedVersion);
    assert!(err.to_string().to_lowercase().contains("only supports 4."));
}

#[test]
fn rejects_non_journey_characters() {
    let err = decode(fixture("NotJourneyMode.plr")).expect_err("classic save should not decode");
    assert_eq!(err.code, CoreErrorCode::UnsupportedGameMode);
    assert!(
        err.to_string()
            .to_lowercase()
            .contains("only supports journey")
    );
}

#[test]
fn does_not_keep_stale_research_data() {
    let first = query::researched(fixture("TestChar.plr")).unwrap();
    assert_eq!(first.len(), 2);

    let second = query::researched(fixture("TestChar-1.4.2.plr")).unwrap();
    assert_eq!(second, vec!["IronPickaxe".to_string()]);

    let shared = Engine::new();
    let many = shared.open_bytes(fixture("TestChar.plr")).unwrap();
    let one = shared.open_bytes(fixture("TestChar-1.4.2.plr")).unwrap();
    assert_eq!(one.research().get("IronShortsword").and_then(|r| r.has), None);
    assert_eq!(many.research().get("IronShortsword").and_then(|r| r.has), Some(1));
}

#[test]
fn handles_each_sub_version() {
    let cases = [
        ("1.4.2", 235, "1.4.2"),
        ("1.4.2.1", 236, "1.4.2.1"),
        ("1.4.2.2", 237, "1.4.2.1"),
        ("1.4.2.3", 238, "1.4.2.3"),
        ("1.4.3", 242, "1.4.3"),
        ("1.4.3.1", 243, "1.4.3"),
        ("1.4.3.2", 244, "1.4.3.2"),
    ];

    let engine = Engine::new();
    for (version, release, layout) in cases {
        let bytes = fixture(&format!("TestChar-{version}.plr"));
        let session = engine
            .open_bytes(&bytes)
            .unwrap_or_else(|e| panic!("failed to decode {version}: {e}"));

        assert_eq!(session.header().release, release);
        assert_eq!(session.header().version_label(), Some(version));
        assert_eq!(session.header().game_mode, GameMode::Journey);
        assert_eq!(session.layout(), layout);
        assert_eq!(
            session.researched(),
            vec!["IronPickaxe".to_string()],
            "{version}"
        );
        assert_eq!(
            session.research().get("DirtBlock").and_then(|r| r.has),
            Some(5),
            "{version}"
        );
    }
}

#[test]
fn decoding_is_deterministic() {
    let bytes = fixture("TestChar.plr");
    let first = decode(&bytes).unwrap();
    let second = decode(&bytes).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn research_map_serializes_without_absent_fields() {
    let data = decode(fixture("TestChar.plr")).unwrap();
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(
        json["IronPickaxe"],
        serde_json::json!({"id": 1, "needed": 1, "has": 1, "researched": true})
    );
    assert_eq!(
        json["DirtBlock"],
        serde_json::json!({"id": 2, "needed": 100})
    );
}

#[test]
fn snapshot_summarises_the_session() {
    let session = Engine::new()
        .open_bytes(fixture("TestChar.plr"))
        .expect("failed to open TestChar.plr");
    let snapshot = session.snapshot();
    assert_eq!(snapshot.release, 279);
    assert_eq!(snapshot.version.as_deref(), Some("1.4.4.9"));
    assert_eq!(snapshot.layout, "1.4.4");
    assert_eq!(snapshot.game_mode, GameMode::Journey);
    assert!(snapshot.favorite);
    assert_eq!(snapshot.summary.sacrificed_items, 3);
    assert_eq!(snapshot.summary.researched_items, 2);
}
