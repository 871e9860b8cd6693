use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::sacrifice::SacrificeEntry;

use super::error::{CoreError, CoreErrorCode};
use super::research_items::RESEARCH_ITEMS;
use super::types::{ResearchItem, ResearchMap, ResearchRecord};

static BUILTIN: Lazy<Arc<ResearchCatalog>> = Lazy::new(|| {
    Arc::new(ResearchCatalog {
        items: RESEARCH_ITEMS.iter().map(|def| def.to_item()).collect(),
    })
});

/// Read-only table of researchable items, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchCatalog {
    items: Vec<ResearchItem>,
}

impl ResearchCatalog {
    /// The table shipped with the crate, built on first use and shared for
    /// the rest of the process.
    pub fn builtin() -> Arc<ResearchCatalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_items(items: Vec<ResearchItem>) -> Result<Self, CoreError> {
        if items.is_empty() {
            return Err(CoreError::new(
                CoreErrorCode::Catalog,
                "research catalog has no entries",
            ));
        }

        let mut ids = BTreeSet::new();
        let mut names = BTreeSet::new();
        for item in &items {
            if !ids.insert(item.id) {
                return Err(CoreError::new(
                    CoreErrorCode::Catalog,
                    format!("duplicate item id {} in research catalog", item.id),
                ));
            }
            if !names.insert(item.name.as_str()) {
                return Err(CoreError::new(
                    CoreErrorCode::Catalog,
                    format!("duplicate item name {:?} in research catalog", item.name),
                ));
            }
            if item.needed <= 0 {
                return Err(CoreError::new(
                    CoreErrorCode::Catalog,
                    format!(
                        "item {} ({}) needs {} sacrifices; expected at least 1",
                        item.id, item.name, item.needed
                    ),
                ));
            }
        }

        let mut items = items;
        items.sort_by_key(|item| item.id);
        Ok(Self { items })
    }

    /// Parse a JSON array of `{ "id", "name", "needed" }` objects.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let items: Vec<ResearchItem> = serde_json::from_str(raw).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Catalog,
                format!("failed to parse research catalog JSON: {e}"),
            )
        })?;
        Self::from_items(items)
    }

    /// Read a catalog JSON file. Read failures carry the path and map to
    /// [`CoreErrorCode::Io`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to read research catalog {}: {e}", path.display()),
            )
        })?;
        debug!(path = %path.display(), "loading research catalog");
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ResearchItem] {
        &self.items
    }

    pub fn get(&self, id: i32) -> Option<&ResearchItem> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .map(|index| &self.items[index])
    }

    /// Build a fresh research map from decoded sacrifices. Amounts for a
    /// repeated item id are summed.
    pub fn join(&self, entries: &[SacrificeEntry]) -> ResearchMap {
        let mut sacrificed: BTreeMap<i32, i32> = BTreeMap::new();
        for entry in entries {
            let total = sacrificed.entry(entry.item_id).or_insert(0);
            *total = total.saturating_add(entry.amount);
        }

        let mut records = BTreeMap::new();
        for item in &self.items {
            let has = sacrificed.remove(&item.id);
            records.insert(
                item.name.clone(),
                ResearchRecord::new(item.id, item.needed, has),
            );
        }

        for (item_id, amount) in sacrificed {
            debug!(item_id, amount, "sacrificed item is not in the research catalog");
        }

        ResearchMap::from_entries(records)
    }
}

#[cfg(test)]
mod tests {
    use super::ResearchCatalog;
    use crate::core_api::CoreErrorCode;
    use crate::core_api::types::ResearchItem;
    use crate::sacrifice::SacrificeEntry;

    fn item(id: i32, name: &str, needed: i32) -> ResearchItem {
        ResearchItem {
            id,
            name: name.to_string(),
            needed,
        }
    }

    fn entry(item_id: i32, amount: i32) -> SacrificeEntry {
        SacrificeEntry { item_id, amount }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = ResearchCatalog::builtin();
        let rebuilt = ResearchCatalog::from_items(builtin.items().to_vec())
            .expect("built-in table should pass validation");
        assert_eq!(rebuilt, *builtin);
        assert_eq!(builtin.get(1).map(|i| i.name.as_str()), Some("IronPickaxe"));
        assert_eq!(builtin.get(2).map(|i| i.needed), Some(100));
        assert_eq!(builtin.get(6).map(|i| i.name.as_str()), Some("IronShortsword"));
        assert!(builtin.get(100).is_some());
        assert!(builtin.get(71).is_none());
        assert_eq!(builtin.get(3507).map(|i| i.name.as_str()), Some("CopperShortsword"));
        assert_eq!(builtin.get(3521).map(|i| i.name.as_str()), Some("GoldPickaxe"));
        assert_eq!(builtin.get(4956).map(|i| i.name.as_str()), Some("Zenith"));
        assert!(builtin.len() > 3000);
    }

    #[test]
    fn builtin_join_keys_high_ids_by_name() {
        let map = ResearchCatalog::builtin().join(&[entry(4956, 1), entry(5005, 1)]);
        assert_eq!(
            map.researched(),
            vec!["EmpressBlade".to_string(), "Zenith".to_string()]
        );
    }

    #[test]
    fn join_sums_duplicates_and_omits_unsacrificed_fields() {
        let catalog = ResearchCatalog::from_items(vec![
            item(1, "IronPickaxe", 1),
            item(2, "DirtBlock", 100),
            item(9, "Wood", 100),
        ])
        .unwrap();

        let map = catalog.join(&[entry(2, 60), entry(1, 1), entry(2, 40), entry(4242, 7)]);
        assert_eq!(map.len(), 3);

        let dirt = map.get("DirtBlock").unwrap();
        assert_eq!(dirt.has, Some(100));
        assert_eq!(dirt.researched, Some(true));

        let pickaxe = map.get("IronPickaxe").unwrap();
        assert_eq!(pickaxe.has, Some(1));
        assert_eq!(pickaxe.researched, Some(true));

        let wood = map.get("Wood").unwrap();
        assert_eq!(wood.id, 9);
        assert_eq!(wood.needed, 100);
        assert_eq!(wood.has, None);
        assert_eq!(wood.researched, None);
    }

    #[test]
    fn partial_sacrifice_is_not_researched() {
        let catalog = ResearchCatalog::from_items(vec![item(9, "Wood", 100)]).unwrap();
        let map = catalog.join(&[entry(9, 99)]);
        let wood = map.get("Wood").unwrap();
        assert_eq!(wood.has, Some(99));
        assert_eq!(wood.researched, Some(false));
        assert!(map.researched().is_empty());
        assert_eq!(map.not_researched(), vec!["Wood".to_string()]);
    }

    #[test]
    fn saturating_sum_does_not_overflow() {
        let catalog = ResearchCatalog::from_items(vec![item(2, "DirtBlock", 100)]).unwrap();
        let map = catalog.join(&[entry(2, i32::MAX), entry(2, 5)]);
        assert_eq!(map.get("DirtBlock").and_then(|r| r.has), Some(i32::MAX));
    }

    #[test]
    fn rejects_duplicate_ids_names_and_zero_needed() {
        let cases = vec![
            vec![item(1, "A", 1), item(1, "B", 1)],
            vec![item(1, "A", 1), item(2, "A", 1)],
            vec![item(1, "A", 0)],
            Vec::new(),
        ];
        for items in cases {
            let err = ResearchCatalog::from_items(items).expect_err("invalid catalog");
            assert_eq!(err.code, CoreErrorCode::Catalog);
        }
    }

    #[test]
    fn loads_catalog_from_json() {
        let raw = r#"[
            {"id": 9, "name": "Wood", "needed": 100},
            {"id": 1, "name": "IronPickaxe", "needed": 1}
        ]"#;
        let catalog = ResearchCatalog::from_json(raw).expect("catalog JSON should parse");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].id, 1);

        let err = ResearchCatalog::from_json(r#"[{"id": 1}]"#).expect_err("missing fields");
        assert_eq!(err.code, CoreErrorCode::Catalog);
    }

    #[test]
    fn missing_catalog_file_is_an_io_error() {
        let path = std::env::temp_dir().join("terraria-research-no-such-catalog.json");
        let err = ResearchCatalog::from_path(&path).expect_err("file does not exist");
        assert_eq!(err.code, CoreErrorCode::Io);
        assert!(err.message.contains("no-such-catalog"));
    }

    #[test]
    fn loads_catalog_from_path() {
        let path = std::env::temp_dir().join(format!(
            "terraria-research-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"[{"id": 4956, "name": "Zenith", "needed": 1}]"#).unwrap();
        let catalog = ResearchCatalog::from_path(&path);
        std::fs::remove_file(&path).unwrap();
        let catalog = catalog.expect("catalog file should load");
        assert_eq!(catalog.get(4956).map(|i| i.name.as_str()), Some("Zenith"));
    }
}
