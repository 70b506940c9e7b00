//! End-to-end editing sessions against the demo slider sources.
//!
//! Run with: cargo test --test editor_flow

use std::path::PathBuf;
use std::sync::Arc;

use motion_tokens::{
    BoundaryView, CacheDispatcher, EditorConfig, FaultBoundary, MemoryTokenCache, Propagator,
    RenderFault, SampleRenderer, StyleSheet, TokenEditor, TokenKind, TokenSources, TokenState,
    TokenValue, group,
};

fn demo_sources() -> TokenSources {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/editor.json");
    EditorConfig::from_file(path)
        .unwrap()
        .load_sources()
        .unwrap()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_demo_schema_fully_resolves() {
    init_logging();
    let sources = demo_sources();
    let sheet = StyleSheet::new();
    let editor = TokenEditor::new(&sources.schema, &sources.base, Propagator::new(sheet.clone()));

    assert!(editor.unresolved().is_empty());
    assert_eq!(editor.identifiers().len(), sources.schema.len());
    assert_eq!(
        editor.value("THUMB_HOVER_DURATION"),
        Some(TokenValue::from("100ms"))
    );
    assert_eq!(
        editor.value("THUMB_DRAG_EASING"),
        Some(TokenValue::from("cubic-bezier(0, 0, 0, 1)"))
    );
    assert_eq!(editor.value("THUMB_SPRING_MASS"), Some(TokenValue::Number(1.0)));
    assert_eq!(sheet.len(), sources.schema.len());
}

#[test]
fn test_demo_view_order() {
    init_logging();
    let sources = demo_sources();
    let editor = TokenEditor::new(
        &sources.schema,
        &sources.base,
        Propagator::new(StyleSheet::new()),
    );
    let view = editor.view();

    let components: Vec<String> = view
        .duration_groups()
        .into_iter()
        .map(|g| g.component)
        .collect();
    assert_eq!(components, vec!["AXIS", "COUNTER", "SLIDER", "THUMB"]);

    let damping: Vec<&str> = view
        .bucket(TokenKind::SpringDamping)
        .iter()
        .map(|(id, _)| id.as_str())
        .collect();
    assert_eq!(damping, vec!["AXIS_SPRING_DAMPING", "THUMB_SPRING_DAMPING"]);

    // Same state, same order
    assert_eq!(group(&editor.state()), view);
}

#[test]
fn test_spring_edits_coerce() {
    init_logging();
    let sources = demo_sources();
    let sheet = StyleSheet::new();
    let editor = TokenEditor::new(&sources.schema, &sources.base, Propagator::new(sheet.clone()));

    editor.edit("THUMB_SPRING_STIFFNESS", "abc");
    editor.edit("AXIS_SPRING_DAMPING", "42");
    editor.edit("THUMB_SPRING_MASS", "");

    assert_eq!(editor.value("THUMB_SPRING_STIFFNESS"), Some(TokenValue::Number(200.0)));
    assert_eq!(editor.value("AXIS_SPRING_DAMPING"), Some(TokenValue::Number(42.0)));
    assert_eq!(editor.value("THUMB_SPRING_MASS"), Some(TokenValue::Number(1.0)));
    assert_eq!(sheet.get("--thumb-spring-stiffness").as_deref(), Some("200"));
    assert_eq!(sheet.get("--axis-spring-damping").as_deref(), Some("42"));
}

#[test]
fn test_free_form_edit_reaches_style_surface() {
    init_logging();
    let sources = demo_sources();
    let sheet = StyleSheet::new();
    let editor = TokenEditor::new(&sources.schema, &sources.base, Propagator::new(sheet.clone()));

    editor.edit("SLIDER_ANIMATION_DURATION", "1.2s");
    assert_eq!(sheet.get("--slider-animation-duration").as_deref(), Some("1.2s"));
}

#[tokio::test]
async fn test_runtime_cache_catches_up() {
    init_logging();
    let sources = demo_sources();
    let (seed, _) = motion_tokens::resolve_with_report(&sources.schema, &sources.base);
    let cache = MemoryTokenCache::seeded(&seed);
    let sheet = StyleSheet::new();

    let propagator = Propagator::new(sheet.clone())
        .with_cache(CacheDispatcher::current(Arc::new(cache.clone())).unwrap());
    let editor = TokenEditor::new(&sources.schema, &sources.base, propagator);

    editor.edit("COUNTER_TRANSITION_EASING", "steps(4)");
    editor.edit("THUMB_SPRING_DAMPING", "12");

    // Style surface is authoritative immediately
    assert_eq!(sheet.get("--counter-transition-easing").as_deref(), Some("steps(4)"));

    // The cache is eventually consistent
    for _ in 0..100 {
        if cache.get("THUMB_SPRING_DAMPING").await == Some(TokenValue::Number(12.0))
            && cache.get("COUNTER_TRANSITION_EASING").await == Some(TokenValue::from("steps(4)"))
        {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("runtime cache never caught up");
}

// =============================================================================
// Fault boundary
// =============================================================================

/// Sample that refuses zero-length hover animations.
struct StrictThumb;

impl SampleRenderer for StrictThumb {
    type Output = String;

    fn render(&mut self, tokens: &TokenState) -> Result<String, RenderFault> {
        match tokens.get("THUMB_HOVER_DURATION") {
            Some(TokenValue::Text(t)) if t == "0ms" => {
                Err(RenderFault::new("hover duration must be positive"))
            }
            Some(value) => Ok(format!("thumb hover {}", value)),
            None => Err(RenderFault::new("missing hover duration")),
        }
    }
}

#[test]
fn test_faulted_sample_does_not_block_editing() {
    init_logging();
    let sources = demo_sources();
    let sheet = StyleSheet::new();
    let editor = TokenEditor::new(&sources.schema, &sources.base, Propagator::new(sheet.clone()));
    let mut boundary = FaultBoundary::new(StrictThumb);

    editor.edit("THUMB_HOVER_DURATION", "0ms");
    let view = boundary.render(&editor.state());
    assert!(view.is_faulted());

    // Editing and propagation carry on regardless
    editor.edit("THUMB_HOVER_DURATION", "120ms");
    assert_eq!(sheet.get("--thumb-hover-duration").as_deref(), Some("120ms"));

    // Still faulted until reset
    assert!(boundary.render(&editor.state()).is_faulted());
    boundary.reset();
    assert_eq!(
        boundary.render(&editor.state()),
        BoundaryView::Rendered("thumb hover 120ms".to_string())
    );
}
