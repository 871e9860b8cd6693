use std::sync::Arc;

use tracing::debug;

use crate::header::PlayerHeader;
use crate::layout::{self, SectionSpan};
use crate::reader::ByteCursor;
use crate::sacrifice::read_sacrifices;

use super::error::CoreError;
use super::research_catalog::ResearchCatalog;
use super::types::{ResearchMap, Snapshot};

/// Decoder bound to a research catalog. Cheap to clone and safe to share
/// between threads; every call to [`Engine::open_bytes`] owns its own state.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<ResearchCatalog>,
}

#[derive(Debug)]
pub struct Session {
    header: PlayerHeader,
    layout: &'static str,
    sections: Vec<SectionSpan>,
    research: ResearchMap,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_catalog(ResearchCatalog::builtin())
    }

    pub fn with_catalog(catalog: Arc<ResearchCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ResearchCatalog {
        &self.catalog
    }

    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Session, CoreError> {
        let bytes = bytes.as_ref();
        let mut r = ByteCursor::new(bytes);

        let header = PlayerHeader::parse(&mut r)?;
        let rule = layout::resolve(header.release)?;
        let sections = rule.skip_preamble(&mut r)?;
        let entries = read_sacrifices(&mut r, rule.sacrifice)?;
        let research = self.catalog.join(&entries);

        debug!(
            release = header.release,
            layout = rule.label,
            sacrifices = entries.len(),
            "decoded research data"
        );

        Ok(Session {
            header,
            layout: rule.label,
            sections,
            research,
        })
    }
}

/// Decode a player file against the built-in catalog.
pub fn decode<B: AsRef<[u8]>>(bytes: B) -> Result<ResearchMap, CoreError> {
    Engine::new().open_bytes(bytes).map(Session::into_research)
}

impl Session {
    pub fn header(&self) -> &PlayerHeader {
        &self.header
    }

    /// Label of the layout rule used to reach the sacrifice list.
    pub fn layout(&self) -> &'static str {
        self.layout
    }

    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    pub fn research(&self) -> &ResearchMap {
        &self.research
    }

    pub fn into_research(self) -> ResearchMap {
        self.research
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            release: self.header.release,
            version: self.header.version_label().map(str::to_string),
            layout: self.layout.to_string(),
            game_mode: self.header.game_mode,
            favorite: self.header.is_favorite(),
            summary: self.research.summary(),
        }
    }

    pub fn researched(&self) -> Vec<String> {
        self.research.researched()
    }

    pub fn not_researched(&self) -> Vec<String> {
        self.research.not_researched()
    }

    pub fn researched_ids(&self) -> Vec<i32> {
        self.research.researched_ids()
    }

    pub fn not_researched_ids(&self) -> Vec<i32> {
        self.research.not_researched_ids()
    }
}
