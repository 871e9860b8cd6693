use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::game_mode::GameMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResearchItem {
    pub id: i32,
    pub name: String,
    pub needed: i32,
}

/// Research progress for one catalog item. `has` and `researched` are only
/// present when the item appears in the player's sacrifice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRecord {
    pub id: i32,
    pub needed: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub researched: Option<bool>,
}

impl ResearchRecord {
    pub(crate) fn new(id: i32, needed: i32, has: Option<i32>) -> Self {
        Self {
            id,
            needed,
            has,
            researched: has.map(|has| has >= needed),
        }
    }

    pub fn is_researched(&self) -> bool {
        self.researched.unwrap_or(false)
    }
}

/// Item name to research record, one entry per catalog item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResearchMap {
    entries: BTreeMap<String, ResearchRecord>,
}

impl ResearchMap {
    pub(crate) fn from_entries(entries: BTreeMap<String, ResearchRecord>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ResearchRecord> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ResearchRecord> {
        self.entries.iter()
    }

    pub fn researched(&self) -> Vec<String> {
        self.names_where(|record| record.is_researched())
    }

    pub fn not_researched(&self) -> Vec<String> {
        self.names_where(|record| !record.is_researched())
    }

    pub fn researched_ids(&self) -> Vec<i32> {
        self.ids_where(|record| record.is_researched())
    }

    pub fn not_researched_ids(&self) -> Vec<i32> {
        self.ids_where(|record| !record.is_researched())
    }

    pub fn summary(&self) -> ResearchSummary {
        let mut summary = ResearchSummary {
            catalog_items: self.entries.len(),
            ..ResearchSummary::default()
        };
        for record in self.entries.values() {
            if record.has.is_some() {
                summary.sacrificed_items += 1;
            }
            if record.is_researched() {
                summary.researched_items += 1;
            }
        }
        summary
    }

    fn names_where(&self, keep: impl Fn(&ResearchRecord) -> bool) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, record)| keep(record))
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn ids_where(&self, keep: impl Fn(&ResearchRecord) -> bool) -> Vec<i32> {
        let mut ids: Vec<i32> = self
            .entries
            .values()
            .filter(|record| keep(record))
            .map(|record| record.id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl<'a> IntoIterator for &'a ResearchMap {
    type Item = (&'a String, &'a ResearchRecord);
    type IntoIter = btree_map::Iter<'a, String, ResearchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResearchSummary {
    pub catalog_items: usize,
    pub sacrificed_items: usize,
    pub researched_items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub release: i32,
    pub version: Option<String>,
    pub layout: String,
    pub game_mode: GameMode,
    pub favorite: bool,
    pub summary: ResearchSummary,
}
