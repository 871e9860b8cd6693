use std::fmt::Write as _;

use research_core::core_api::{ResearchRecord, Session};
use serde_json::{Map as JsonMap, Value as JsonValue};

const NAME_COL_WIDTH: usize = 28;
const ID_COL_WIDTH: usize = 6;
const PROGRESS_COL_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    ResearchTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// Also list catalog items that were never sacrificed.
    pub verbose: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub summary: bool,
    pub researched: bool,
    pub not_researched: bool,
    /// Report item ids instead of item names.
    pub ids: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.summary || self.researched || self.not_researched
    }
}

pub fn render_json_full(session: &Session, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(default_json(session)),
    }
}

pub fn render_json_selected(
    fields: &FieldSelection,
    session: &Session,
    style: JsonStyle,
) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(selected_json(fields, session)),
    }
}

pub fn render_text(session: &Session, style: TextStyle) -> String {
    render_text_with_options(session, style, TextRenderOptions::default())
}

pub fn render_text_with_options(
    session: &Session,
    style: TextStyle,
    options: TextRenderOptions,
) -> String {
    match style {
        TextStyle::ResearchTable => render_research_table(session, options),
    }
}

/// `key=value` lines for the selected fields, in a fixed order.
pub fn render_selected_lines(fields: &FieldSelection, session: &Session) -> Vec<String> {
    let mut out = Vec::new();

    if fields.summary {
        let summary = session.research().summary();
        out.push(format!("researched={}", summary.researched_items));
        out.push(format!("sacrificed={}", summary.sacrificed_items));
        out.push(format!("catalog={}", summary.catalog_items));
    }
    if fields.researched {
        let key = if fields.ids { "researched_id" } else { "researched" };
        out.extend(list_values(session, true, fields.ids).map(|v| format!("{key}={v}")));
    }
    if fields.not_researched {
        let key = if fields.ids {
            "not_researched_id"
        } else {
            "not_researched"
        };
        out.extend(list_values(session, false, fields.ids).map(|v| format!("{key}={v}")));
    }

    out
}

fn list_values(session: &Session, researched: bool, ids: bool) -> impl Iterator<Item = String> {
    let values: Vec<String> = match (researched, ids) {
        (true, false) => session.researched(),
        (false, false) => session.not_researched(),
        (true, true) => ids_to_strings(session.researched_ids()),
        (false, true) => ids_to_strings(session.not_researched_ids()),
    };
    values.into_iter()
}

fn ids_to_strings(ids: Vec<i32>) -> Vec<String> {
    ids.into_iter().map(|id| id.to_string()).collect()
}

fn default_json(session: &Session) -> JsonMap<String, JsonValue> {
    let snapshot = session.snapshot();
    let mut out = JsonMap::new();

    out.insert("release".to_string(), JsonValue::from(snapshot.release));
    out.insert(
        "version".to_string(),
        match snapshot.version {
            Some(v) => JsonValue::String(v),
            None => JsonValue::Null,
        },
    );
    out.insert("layout".to_string(), JsonValue::String(snapshot.layout));
    out.insert(
        "game_mode".to_string(),
        JsonValue::String(snapshot.game_mode.to_string()),
    );
    out.insert("favorite".to_string(), JsonValue::Bool(snapshot.favorite));
    out.insert("summary".to_string(), summary_to_json(session));
    out.insert("research".to_string(), research_to_json(session));

    out
}

fn selected_json(fields: &FieldSelection, session: &Session) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    if fields.summary {
        out.insert("summary".to_string(), summary_to_json(session));
    }
    if fields.researched {
        out.insert(
            "researched".to_string(),
            JsonValue::Array(list_json(session, true, fields.ids)),
        );
    }
    if fields.not_researched {
        out.insert(
            "not_researched".to_string(),
            JsonValue::Array(list_json(session, false, fields.ids)),
        );
    }

    out
}

fn list_json(session: &Session, researched: bool, ids: bool) -> Vec<JsonValue> {
    if ids {
        let ids = if researched {
            session.researched_ids()
        } else {
            session.not_researched_ids()
        };
        ids.into_iter().map(JsonValue::from).collect()
    } else {
        let names = if researched {
            session.researched()
        } else {
            session.not_researched()
        };
        names.into_iter().map(JsonValue::String).collect()
    }
}

fn summary_to_json(session: &Session) -> JsonValue {
    let summary = session.research().summary();
    let mut out = JsonMap::new();
    out.insert(
        "catalog_items".to_string(),
        JsonValue::from(summary.catalog_items),
    );
    out.insert(
        "sacrificed_items".to_string(),
        JsonValue::from(summary.sacrificed_items),
    );
    out.insert(
        "researched_items".to_string(),
        JsonValue::from(summary.researched_items),
    );
    JsonValue::Object(out)
}

fn research_to_json(session: &Session) -> JsonValue {
    let mut out = JsonMap::new();
    for (name, record) in session.research() {
        out.insert(name.clone(), record_to_json(record));
    }
    JsonValue::Object(out)
}

fn record_to_json(record: &ResearchRecord) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("id".to_string(), JsonValue::from(record.id));
    out.insert("needed".to_string(), JsonValue::from(record.needed));
    if let Some(has) = record.has {
        out.insert("has".to_string(), JsonValue::from(has));
    }
    if let Some(researched) = record.researched {
        out.insert("researched".to_string(), JsonValue::Bool(researched));
    }
    JsonValue::Object(out)
}

fn render_research_table(session: &Session, options: TextRenderOptions) -> String {
    let snapshot = session.snapshot();
    let mut out = String::new();

    let version = snapshot.version.as_deref().unwrap_or("unknown");
    writeln!(
        out,
        "Release {} (Terraria {}), layout {}, {} mode{}",
        snapshot.release,
        version,
        snapshot.layout,
        snapshot.game_mode,
        if snapshot.favorite { ", favorite" } else { "" }
    )
    .expect("writing to String cannot fail");
    writeln!(
        out,
        "Researched {} of {} items ({} with sacrifices)",
        snapshot.summary.researched_items,
        snapshot.summary.catalog_items,
        snapshot.summary.sacrificed_items
    )
    .expect("writing to String cannot fail");
    out.push('\n');

    writeln!(
        out,
        "{}{}{}Status",
        fit_column("Item", NAME_COL_WIDTH),
        fit_column("Id", ID_COL_WIDTH),
        fit_column("Progress", PROGRESS_COL_WIDTH)
    )
    .expect("writing to String cannot fail");

    let mut rows: Vec<(&String, &ResearchRecord)> = session
        .research()
        .iter()
        .filter(|(_, record)| options.verbose || record.has.is_some())
        .collect();
    rows.sort_by_key(|(_, record)| record.id);

    for (name, record) in rows {
        let progress = match record.has {
            Some(has) => format!("{}/{}", has, record.needed),
            None => format!("-/{}", record.needed),
        };
        let status = match record.researched {
            Some(true) => "researched",
            Some(false) => "in progress",
            None => "not started",
        };
        writeln!(
            out,
            "{}{}{}{}",
            fit_column(name, NAME_COL_WIDTH),
            fit_column(&record.id.to_string(), ID_COL_WIDTH),
            fit_column(&progress, PROGRESS_COL_WIDTH),
            status
        )
        .expect("writing to String cannot fail");
    }

    out
}

fn fit_column(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::fit_column;

    #[test]
    fn fit_column_pads_and_truncates() {
        assert_eq!(fit_column("Id", 6), "Id    ");
        assert_eq!(fit_column("SuspiciousLookingEye", 8), "Suspici ");
        assert_eq!(fit_column("", 3), "   ");
    }
}
