//! Human-readable token descriptions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identifier → explanation. Purely presentational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptionTable {
    entries: IndexMap<String, String>,
}

impl DescriptionTable {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a JSON object of identifier → string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Description for a token, or the identifier itself when none exists.
    pub fn describe<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.entries
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Built-in descriptions for the slider component.
    pub fn slider() -> Self {
        Self::from_pairs([
            // Thumb
            ("THUMB_TRANSITION_DURATION", "Thumb transition duration - base animation time of the thumb"),
            ("THUMB_TRANSITION_EASING", "Thumb transition easing - motion character of the base thumb animation"),
            ("THUMB_HOVER_DURATION", "Thumb hover duration - animation time when the pointer hovers the thumb"),
            ("THUMB_DRAG_DURATION", "Drag duration - animation time while the thumb is dragged"),
            ("THUMB_DRAG_EASING", "Drag easing - motion character while dragging"),
            ("THUMB_DOT_EXPAND_DURATION", "Dot expand duration - time for the center dot to grow"),
            ("THUMB_DOT_COLLAPSE_DURATION", "Dot collapse duration - time for the center dot to shrink"),
            ("THUMB_DOT_TRANSITION_EASING", "Dot easing - motion character of the thumb dot"),
            // Axis
            ("AXIS_TRANSITION_DURATION", "Axis transition duration - animation time of slider axis changes"),
            ("AXIS_TRANSITION_EASING", "Axis transition easing - motion character of the slider axis"),
            ("AXIS_FILL_TRANSITION_DURATION", "Axis fill duration - animation time of the filled part"),
            ("AXIS_FILL_ACTIVE_DURATION", "Active fill duration - time for the fill to activate"),
            // Counter
            ("COUNTER_TRANSITION_DURATION", "Counter transition duration - animation time of value changes"),
            ("COUNTER_TRANSITION_EASING", "Counter transition easing - motion character of value changes"),
            // Slider
            ("SLIDER_ANIMATION_DURATION", "Overall animation duration - base time for all slider animations"),
            ("SLIDER_TRANSITION_DURATION", "Slider transition duration - time of shared transition states"),
            ("SLIDER_TRANSITION_EASING", "Slider transition easing - motion character of the main animations"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known() {
        let table = DescriptionTable::slider();
        assert!(table.describe("THUMB_DRAG_EASING").starts_with("Drag easing"));
        assert_eq!(table.len(), 17);
    }

    #[test]
    fn test_describe_falls_back_to_identifier() {
        let table = DescriptionTable::slider();
        assert_eq!(table.describe("THUMB_SPRING_MASS"), "THUMB_SPRING_MASS");
    }

    #[test]
    fn test_from_json() {
        let table = DescriptionTable::from_json(r#"{"A_DURATION": "Alpha"}"#).unwrap();
        assert_eq!(table.describe("A_DURATION"), "Alpha");
        assert!(DescriptionTable::from_json(r#"{"A": 1}"#).is_err());
    }
}
