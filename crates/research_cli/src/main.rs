use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use research_core::core_api::{Engine, ResearchCatalog, Session};
use research_render::{
    FieldSelection, JsonStyle, TextRenderOptions, TextStyle, render_json_full,
    render_json_selected, render_selected_lines, render_text_with_options,
};
use serde_json::{Value as JsonValue, json};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "PLAYER.plr")]
    path: PathBuf,
    /// Print the researched-item summary counts.
    #[arg(long)]
    summary: bool,
    /// List fully researched items.
    #[arg(long)]
    researched: bool,
    /// List items that are not fully researched.
    #[arg(long = "not-researched")]
    not_researched: bool,
    /// Report item ids instead of names.
    #[arg(long)]
    ids: bool,
    /// Print the byte ranges of the skipped preamble sections.
    #[arg(long)]
    layout: bool,
    /// Include items with no sacrifices in the text table.
    #[arg(long)]
    all: bool,
    #[arg(long)]
    json: bool,
    /// Replacement research catalog: a JSON array of {id, name, needed}.
    #[arg(long, value_name = "CATALOG.json")]
    catalog: Option<PathBuf>,
    /// Log decoder progress to stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn fields(&self) -> FieldSelection {
        FieldSelection {
            summary: self.summary,
            researched: self.researched,
            not_researched: self.not_researched,
            ids: self.ids,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_engine(catalog: Option<&PathBuf>) -> Engine {
    let Some(path) = catalog else {
        return Engine::new();
    };
    let catalog = ResearchCatalog::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error loading research catalog: {}", path.display());
        eprintln!("  {}", e);
        process::exit(1);
    });
    info!(items = catalog.len(), path = %path.display(), "loaded research catalog");
    Engine::with_catalog(Arc::new(catalog))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let fields = cli.fields();

    if cli.ids && !(cli.researched || cli.not_researched) {
        eprintln!("--ids requires --researched or --not-researched");
        process::exit(2);
    }

    let engine = load_engine(cli.catalog.as_ref());

    let bytes = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });
    debug!(path = %cli.path.display(), len = bytes.len(), "read player file");

    let session = engine.open_bytes(bytes).unwrap_or_else(|e| {
        eprintln!("Error decoding player file: {}", cli.path.display());
        eprintln!("  {}", e);
        process::exit(1);
    });

    if cli.json {
        let json = if cli.layout {
            layout_json(&session)
        } else if fields.is_any_selected() {
            render_json_selected(&fields, &session, JsonStyle::CanonicalV1)
        } else {
            render_json_full(&session, JsonStyle::CanonicalV1)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if cli.layout {
        println!("layout={}", session.layout());
        for span in session.sections() {
            println!(
                "section={} start={} end={} len={}",
                span.name,
                span.range.start,
                span.range.end,
                span.range.len()
            );
        }
        return;
    }

    if fields.is_any_selected() {
        for line in render_selected_lines(&fields, &session) {
            println!("{line}");
        }
        return;
    }

    print!(
        "{}",
        render_text_with_options(
            &session,
            TextStyle::ResearchTable,
            TextRenderOptions { verbose: cli.all }
        )
    );
}

fn layout_json(session: &Session) -> JsonValue {
    json!({
        "layout": session.layout().to_string(),
        "release": session.header().release,
        "sections": session.sections(),
    })
}
