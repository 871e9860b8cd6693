use std::sync::Arc;
use std::thread;

use research_core::core_api::{CoreErrorCode, Engine, ResearchCatalog, ResearchItem};
use research_core::decode;
use research_core::layout::{CountField, LAYOUT_RULES, PairEncoding, SectionShape};

/// Builds a minimal player file for a release from the layout table, so
/// the writer never drifts from the rules under test.
struct PlayerFileBuilder {
    release: i32,
    mode: u8,
    spawn_points: usize,
    sacrifices: Vec<(i32, i32)>,
}

impl PlayerFileBuilder {
    fn new(release: i32) -> Self {
        Self {
            release,
            mode: 3,
            spawn_points: 1,
            sacrifices: Vec::new(),
        }
    }

    fn sacrifice(mut self, item_id: i32, amount: i32) -> Self {
        self.sacrifices.push((item_id, amount));
        self
    }

    fn spawn_points(mut self, count: usize) -> Self {
        self.spawn_points = count;
        self
    }

    fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.release.to_le_bytes());
        out.extend_from_slice(b"relogic");
        out.push(3);
        out.extend_from_slice(&1u32.to_le_bytes());
        out.extend_from_slice(&0u64.to_le_bytes());
        out.push(self.mode);

        let rule = LAYOUT_RULES
            .iter()
            .find(|rule| (rule.first_release..=rule.last_release).contains(&self.release))
            .expect("release should have a layout rule");

        for section in rule.preamble {
            match section.shape {
                SectionShape::Text => {
                    push_var(&mut out, 4);
                    out.extend_from_slice(b"Test");
                }
                SectionShape::Fixed(width) | SectionShape::Flags(width) => {
                    out.extend(std::iter::repeat_n(0x5A, width));
                }
                SectionShape::List { count, width } => {
                    let n = if section.name == "spawn points" {
                        self.spawn_points
                    } else {
                        1
                    };
                    push_count(&mut out, count, n);
                    out.extend(std::iter::repeat_n(0xC3, n * width));
                }
            }
        }

        push_count(&mut out, rule.sacrifice.count, self.sacrifices.len());
        for &(item_id, amount) in &self.sacrifices {
            match rule.sacrifice.pair {
                PairEncoding::Fixed32 => {
                    out.extend_from_slice(&item_id.to_le_bytes());
                    out.extend_from_slice(&amount.to_le_bytes());
                }
                PairEncoding::VarInt => {
                    push_var(&mut out, item_id as u32);
                    push_var(&mut out, amount as u32);
                }
            }
        }
        out
    }
}

fn push_var(out: &mut Vec<u8>, mut value: u32) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

fn push_count(out: &mut Vec<u8>, field: CountField, n: usize) {
    match field {
        CountField::U8 => out.push(n as u8),
        CountField::I32 => out.extend_from_slice(&(n as i32).to_le_bytes()),
        CountField::VarInt => push_var(out, n as u32),
    }
}

#[test]
fn every_layout_rule_reaches_the_sacrifice_list() {
    for rule in LAYOUT_RULES {
        for release in [rule.first_release, rule.last_release] {
            let bytes = PlayerFileBuilder::new(release)
                .spawn_points(3)
                .sacrifice(1, 1)
                .sacrifice(2, 5)
                .build();
            let session = Engine::new()
                .open_bytes(&bytes)
                .unwrap_or_else(|e| panic!("release {release} failed: {e}"));
            assert_eq!(session.layout(), rule.label);
            assert_eq!(session.researched(), vec!["IronPickaxe".to_string()]);
            assert_eq!(
                session.research().get("DirtBlock").and_then(|r| r.has),
                Some(5)
            );
        }
    }
}

#[test]
fn duplicate_item_ids_are_summed() {
    let bytes = PlayerFileBuilder::new(230)
        .sacrifice(2, 30)
        .sacrifice(2, 70)
        .sacrifice(9, 10)
        .build();
    let data = decode(&bytes).expect("1.4.0 file should decode");
    let dirt = data.get("DirtBlock").expect("DirtBlock missing");
    assert_eq!(dirt.has, Some(100));
    assert_eq!(dirt.researched, Some(true));
    assert_eq!(data.get("Wood").and_then(|r| r.has), Some(10));
}

#[test]
fn large_var_int_ids_decode() {
    let bytes = PlayerFileBuilder::new(279)
        .sacrifice(4956, 1)
        .sacrifice(3521, 1)
        .build();
    let data = decode(&bytes).expect("1.4.4 file should decode");
    assert_eq!(data.researched_ids(), vec![3521, 4956]);
}

#[test]
fn zenith_sacrifice_joins_on_first_journey_release() {
    let bytes = PlayerFileBuilder::new(230).sacrifice(4956, 1).build();
    let data = decode(&bytes).expect("1.4.0 file should decode");
    assert_eq!(data.researched(), vec!["Zenith".to_string()]);
    let zenith = data.get("Zenith").expect("Zenith is catalogued");
    assert_eq!(zenith.id, 4956);
    assert_eq!(zenith.has, Some(1));
}

#[test]
fn truncated_sacrifice_list_fails_without_partial_results() {
    let bytes = PlayerFileBuilder::new(236)
        .sacrifice(1, 1)
        .sacrifice(6, 1)
        .build();
    for cut in 1..=8 {
        let err = decode(&bytes[..bytes.len() - cut]).expect_err("truncated list");
        assert_eq!(err.code, CoreErrorCode::MalformedLayout, "cut {cut}");
    }
}

#[test]
fn truncated_preamble_is_a_layout_error() {
    let bytes = PlayerFileBuilder::new(244).spawn_points(50).build();
    let err = decode(&bytes[..bytes.len() - 100]).expect_err("spawn points cut short");
    assert_eq!(err.code, CoreErrorCode::MalformedLayout);
    assert!(err.message.contains("spawn points"));
}

#[test]
fn releases_newer_than_the_table_are_unsupported() {
    let mut bytes = PlayerFileBuilder::new(279).build();
    bytes[..4].copy_from_slice(&315i32.to_le_bytes());
    let err = decode(&bytes).expect_err("unknown release");
    assert_eq!(err.code, CoreErrorCode::UnsupportedVersion);
    assert!(err.message.contains("only supports 4."));
}

#[test]
fn custom_catalog_is_used_for_the_join() {
    let catalog = ResearchCatalog::from_items(vec![ResearchItem {
        id: 2,
        name: "Dirt".to_string(),
        needed: 5,
    }])
    .expect("catalog should validate");
    let engine = Engine::with_catalog(Arc::new(catalog));

    let bytes = PlayerFileBuilder::new(242)
        .sacrifice(1, 1)
        .sacrifice(2, 5)
        .build();
    let session = engine.open_bytes(&bytes).expect("1.4.3 file should decode");
    assert_eq!(session.research().len(), 1);
    assert_eq!(session.researched(), vec!["Dirt".to_string()]);
    assert!(session.not_researched().is_empty());
}

#[test]
fn concurrent_decodes_share_only_the_catalog() {
    let engine = Engine::new();
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let engine = engine.clone();
            thread::spawn(move || {
                let item = if worker % 2 == 0 { 1 } else { 6 };
                let bytes = PlayerFileBuilder::new(279).sacrifice(item, 1).build();
                let session = engine.open_bytes(&bytes).expect("worker decode");
                (item, session.researched_ids())
            })
        })
        .collect();

    for handle in handles {
        let (item, researched) = handle.join().expect("worker panicked");
        assert_eq!(researched, vec![item]);
    }
}
