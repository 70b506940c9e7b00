//! Selectable base-table options for duration and motion tokens.

use indexmap::IndexMap;

use crate::classify::TokenKind;
use crate::schema::BaseTokenTable;
use crate::types::TokenValue;

/// One pickable value, labelled `<key> (<value>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: TokenValue,
}

fn options_from(category: &IndexMap<String, TokenValue>) -> Vec<SelectOption> {
    category
        .iter()
        .map(|(key, value)| SelectOption {
            label: format!("{} ({})", key, value),
            value: value.clone(),
        })
        .collect()
}

/// Every base duration, in table order.
pub fn duration_options(base: &BaseTokenTable) -> Vec<SelectOption> {
    options_from(&base.duration)
}

/// Every base easing curve, in table order.
pub fn motion_options(base: &BaseTokenTable) -> Vec<SelectOption> {
    options_from(&base.motion)
}

/// Options for a kind. Spring kinds take free numeric input and get none.
pub fn options_for(kind: TokenKind, base: &BaseTokenTable) -> Vec<SelectOption> {
    match kind {
        TokenKind::Duration => duration_options(base),
        TokenKind::Motion => motion_options(base),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseTokenTable {
        BaseTokenTable::from_json(
            r#"{"duration": {"100": "150ms", "50": 75}, "motion": {"standard": "ease"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_duration_options_labels_in_order() {
        let options = duration_options(&base());
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["100 (150ms)", "50 (75)"]);
        assert_eq!(options[1].value, TokenValue::Number(75.0));
    }

    #[test]
    fn test_options_for_kind() {
        assert_eq!(options_for(TokenKind::Motion, &base())[0].label, "standard (ease)");
        assert!(options_for(TokenKind::SpringMass, &base()).is_empty());
    }
}
