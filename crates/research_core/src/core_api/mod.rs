mod engine;
mod error;
mod research_catalog;
mod research_items;
mod types;

pub use engine::{Engine, Session, decode};
pub use error::{CoreError, CoreErrorCode};
pub use research_catalog::ResearchCatalog;
pub use types::{ResearchItem, ResearchMap, ResearchRecord, ResearchSummary, Snapshot};
