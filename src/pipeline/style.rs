//! Style-variable surface.
//!
//! Token identifiers become style variables by lowercasing and replacing every
//! separator with a hyphen: `SLIDER_ANIMATION_DURATION` →
//! `--slider-animation-duration`.

use std::sync::{Arc, Mutex, MutexGuard};

use indexmap::IndexMap;

use crate::classify::SEGMENT_SEPARATOR;

/// Default style-variable prefix.
pub const STYLE_VAR_PREFIX: &str = "--";

/// Derive the style-variable name for an identifier.
pub fn style_var_name(identifier: &str) -> String {
    style_var_name_with_prefix(STYLE_VAR_PREFIX, identifier)
}

/// Derive a style-variable name with a custom prefix.
pub fn style_var_name_with_prefix(prefix: &str, identifier: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + identifier.len());
    name.push_str(prefix);
    name.extend(identifier.chars().map(|c| {
        if c == SEGMENT_SEPARATOR {
            '-'
        } else {
            c.to_ascii_lowercase()
        }
    }));
    name
}

// =============================================================================
// StyleSurface
// =============================================================================

/// A globally visible sink of style variables.
///
/// Writes are synchronous and side-effect only.
pub trait StyleSurface {
    fn set_property(&self, name: &str, value: &str);
}

// =============================================================================
// StyleSheet
// =============================================================================

#[derive(Debug, Default)]
struct Sheet {
    vars: IndexMap<String, String>,
    revision: u64,
}

/// In-memory style surface.
///
/// Cloning shares the same sheet, so a reader can keep a handle while the
/// pipeline owns another. Writing a value equal to the current one does
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    inner: Arc<Mutex<Sheet>>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Sheet> {
        // A panic while holding the lock cannot leave a half-written entry
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current value of a variable.
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().vars.get(name).cloned()
    }

    /// All variables in first-write order.
    pub fn snapshot(&self) -> IndexMap<String, String> {
        self.lock().vars.clone()
    }

    /// Number of writes that actually changed a value.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    pub fn len(&self) -> usize {
        self.lock().vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().vars.is_empty()
    }

    /// Render as a `:root { ... }` block.
    pub fn to_css(&self) -> String {
        let sheet = self.lock();
        let mut css = String::from(":root {\n");
        for (name, value) in &sheet.vars {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push('}');
        css
    }
}

impl StyleSurface for StyleSheet {
    fn set_property(&self, name: &str, value: &str) {
        let mut sheet = self.lock();
        if sheet.vars.get(name).is_some_and(|current| current == value) {
            return;
        }
        sheet.vars.insert(name.to_string(), value.to_string());
        sheet.revision += 1;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_var_name() {
        assert_eq!(
            style_var_name("SLIDER_ANIMATION_DURATION"),
            "--slider-animation-duration"
        );
        assert_eq!(style_var_name("THUMB"), "--thumb");
    }

    #[test]
    fn test_style_var_name_custom_prefix() {
        assert_eq!(
            style_var_name_with_prefix("--md-", "AXIS_SPRING_MASS"),
            "--md-axis-spring-mass"
        );
    }

    #[test]
    fn test_sheet_skips_unchanged_writes() {
        let sheet = StyleSheet::new();
        sheet.set_property("--a", "1");
        sheet.set_property("--a", "1");
        assert_eq!(sheet.revision(), 1);

        sheet.set_property("--a", "2");
        assert_eq!(sheet.revision(), 2);
        assert_eq!(sheet.get("--a").as_deref(), Some("2"));
    }

    #[test]
    fn test_sheet_clones_share_state() {
        let sheet = StyleSheet::new();
        let reader = sheet.clone();
        sheet.set_property("--thumb-hover-duration", "150ms");
        assert_eq!(reader.get("--thumb-hover-duration").as_deref(), Some("150ms"));
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn test_sheet_to_css() {
        let sheet = StyleSheet::new();
        sheet.set_property("--a", "1");
        sheet.set_property("--b", "ease");
        assert_eq!(sheet.to_css(), ":root {\n  --a: 1;\n  --b: ease;\n}");
    }
}
