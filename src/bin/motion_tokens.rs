//! motion-tokens - inspect and edit a component's animation tokens.
//!
//! ```text
//! motion-tokens demos/editor.json AXIS_SPRING_DAMPING=42 THUMB_HOVER_DURATION=90ms
//! ```
//!
//! Loads the configured sources, applies the edits in order, then prints the
//! grouped tokens and the resulting style variables.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use crossterm::style::Stylize;
use log::{error, info};

use motion_tokens::{
    CacheDispatcher, DescriptionTable, EditorConfig, GroupedView, MemoryTokenCache, Propagator,
    StyleSheet, TokenEditor, TokenEntry, TokenKind,
};

#[derive(Parser)]
#[command(name = "motion-tokens")]
#[command(version = "0.1.0")]
#[command(about = "Inspect and edit animation design tokens")]
struct Cli {
    /// Editor config (JSON)
    config: PathBuf,

    /// Edits to apply, as IDENTIFIER=VALUE
    #[arg(value_parser = parse_edit)]
    edits: Vec<(String, String)>,

    /// Only print the style variables
    #[arg(long)]
    css: bool,
}

fn parse_edit(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected IDENTIFIER=VALUE, got {:?}", raw))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match EditorConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    let sources = match config.load_sources() {
        Ok(sources) => sources,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let sheet = StyleSheet::new();
    let mut propagator = Propagator::new(sheet.clone()).with_prefix(config.style_prefix.clone());

    // Seed the runtime cache from the resolved schema
    let (seed, _) = motion_tokens::resolve_with_report(&sources.schema, &sources.base);
    match CacheDispatcher::current(Arc::new(MemoryTokenCache::seeded(&seed))) {
        Ok(dispatcher) => propagator = propagator.with_cache(dispatcher),
        Err(e) => error!("{}", e),
    }

    let editor = TokenEditor::new(&sources.schema, &sources.base, propagator);
    info!("Loaded {} tokens", editor.identifiers().len());

    for (identifier, value) in &cli.edits {
        editor.edit(identifier, value);
    }

    if !cli.css {
        print_view(&editor.view(), &sources.descriptions);
        for miss in editor.unresolved() {
            println!(
                "{} {} = {}",
                "unresolved".yellow(),
                miss.identifier,
                miss.expression
            );
        }
        println!();
    }
    println!("{}", sheet.to_css());

    // Let pending cache updates finish before the runtime shuts down
    tokio::task::yield_now().await;
    ExitCode::SUCCESS
}

fn print_view(view: &GroupedView, descriptions: &DescriptionTable) {
    println!("{}", "Duration tokens".bold());
    for group in view.duration_groups() {
        println!("  {}", group.label.as_str().underlined());
        print_entries(&group.entries, descriptions, "    ");
    }

    println!("{}", "Motion tokens".bold());
    for group in view.motion_groups() {
        println!("  {}", group.label.as_str().underlined());
        print_entries(&group.entries, descriptions, "    ");
    }

    if view.has_spring_tokens() {
        println!("{}", "Spring tokens".bold());
        for (kind, title) in [
            (TokenKind::SpringStiffness, "Stiffness"),
            (TokenKind::SpringDamping, "Damping"),
            (TokenKind::SpringMass, "Mass"),
        ] {
            let entries = view.bucket(kind);
            if entries.is_empty() {
                continue;
            }
            match kind.input_range() {
                Some(range) => println!(
                    "  {} [{}..{} step {}]",
                    title.underlined(),
                    range.min,
                    range.max,
                    range.step
                ),
                None => println!("  {}", title.underlined()),
            }
            print_entries(entries, descriptions, "    ");
        }
    }
}

fn print_entries(entries: &[TokenEntry], descriptions: &DescriptionTable, indent: &str) {
    for (identifier, value) in entries {
        println!(
            "{}{} {}",
            indent,
            descriptions.describe(identifier),
            format!("[{}]", identifier).dark_grey()
        );
        println!("{}  = {}", indent, value.to_string().cyan());
    }
}
