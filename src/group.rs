//! Grouping and ordering for presentation.
//!
//! Tokens are bucketed by kind, each bucket is stably sorted by sub-component
//! name, and the duration/motion buckets are further partitioned per
//! sub-component. Spring buckets stay flat.
//!
//! The view is derived from [`TokenState`] alone and holds no state of its
//! own. Unclassified tokens appear in no bucket.

use indexmap::IndexMap;

use crate::classify::{classify, component_label, component_of, TokenKind};
use crate::types::{TokenState, TokenValue};

/// An (identifier, value) pair.
pub type TokenEntry = (String, TokenValue);

/// Entries of one sub-component within a bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentGroup {
    /// Raw sub-component name (`THUMB`).
    pub component: String,
    /// Display label (`Thumb`).
    pub label: String,
    pub entries: Vec<TokenEntry>,
}

/// The five ordered kind buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedView {
    pub duration: Vec<TokenEntry>,
    pub motion: Vec<TokenEntry>,
    pub spring_stiffness: Vec<TokenEntry>,
    pub spring_damping: Vec<TokenEntry>,
    pub spring_mass: Vec<TokenEntry>,
}

impl GroupedView {
    /// The flat bucket for a kind.
    pub fn bucket(&self, kind: TokenKind) -> &[TokenEntry] {
        match kind {
            TokenKind::Duration => &self.duration,
            TokenKind::Motion => &self.motion,
            TokenKind::SpringStiffness => &self.spring_stiffness,
            TokenKind::SpringDamping => &self.spring_damping,
            TokenKind::SpringMass => &self.spring_mass,
        }
    }

    fn bucket_mut(&mut self, kind: TokenKind) -> &mut Vec<TokenEntry> {
        match kind {
            TokenKind::Duration => &mut self.duration,
            TokenKind::Motion => &mut self.motion,
            TokenKind::SpringStiffness => &mut self.spring_stiffness,
            TokenKind::SpringDamping => &mut self.spring_damping,
            TokenKind::SpringMass => &mut self.spring_mass,
        }
    }

    /// Duration tokens partitioned by sub-component.
    pub fn duration_by_component(&self) -> IndexMap<String, Vec<TokenEntry>> {
        partition_by_component(&self.duration)
    }

    /// Motion tokens partitioned by sub-component.
    pub fn motion_by_component(&self) -> IndexMap<String, Vec<TokenEntry>> {
        partition_by_component(&self.motion)
    }

    /// Labelled duration groups, in sorted component order.
    pub fn duration_groups(&self) -> Vec<ComponentGroup> {
        labelled(self.duration_by_component())
    }

    /// Labelled motion groups, in sorted component order.
    pub fn motion_groups(&self) -> Vec<ComponentGroup> {
        labelled(self.motion_by_component())
    }

    /// Whether the spring section has anything to show.
    pub fn has_spring_tokens(&self) -> bool {
        !(self.spring_stiffness.is_empty()
            && self.spring_damping.is_empty()
            && self.spring_mass.is_empty())
    }

    /// Total number of classified tokens.
    pub fn len(&self) -> usize {
        TokenKind::all().iter().map(|k| self.bucket(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group using the standard classifier.
pub fn group(state: &TokenState) -> GroupedView {
    group_with(state, classify)
}

/// Group using a caller-supplied classifier.
pub fn group_with<F>(state: &TokenState, classify: F) -> GroupedView
where
    F: Fn(&str) -> Option<TokenKind>,
{
    let mut view = GroupedView::default();

    for (identifier, value) in state.iter() {
        if let Some(kind) = classify(identifier) {
            view.bucket_mut(kind)
                .push((identifier.to_string(), value.clone()));
        }
    }

    for kind in TokenKind::all() {
        // sort_by is stable: ties keep schema order
        view.bucket_mut(*kind)
            .sort_by(|a, b| component_of(&a.0).cmp(component_of(&b.0)));
    }

    view
}

/// Partition an already-sorted bucket by sub-component, preserving order.
pub fn partition_by_component(entries: &[TokenEntry]) -> IndexMap<String, Vec<TokenEntry>> {
    let mut groups: IndexMap<String, Vec<TokenEntry>> = IndexMap::new();
    for entry in entries {
        groups
            .entry(component_of(&entry.0).to_string())
            .or_default()
            .push(entry.clone());
    }
    groups
}

fn labelled(groups: IndexMap<String, Vec<TokenEntry>>) -> Vec<ComponentGroup> {
    groups
        .into_iter()
        .map(|(component, entries)| ComponentGroup {
            label: component_label(&component).to_string(),
            component,
            entries,
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TokenState {
        TokenState::from_pairs([
            ("THUMB_HOVER_DURATION", TokenValue::from("150ms")),
            ("SLIDER_ANIMATION_DURATION", TokenValue::from("300ms")),
            ("AXIS_TRANSITION_DURATION", TokenValue::from("200ms")),
            ("THUMB_DRAG_DURATION", TokenValue::from("100ms")),
            ("COUNTER_TRANSITION_EASING", TokenValue::from("ease-out")),
            ("AXIS_TRANSITION_EASING", TokenValue::from("linear")),
            ("THUMB_SPRING_STIFFNESS", TokenValue::Number(300.0)),
            ("AXIS_SPRING_DAMPING", TokenValue::Number(20.0)),
            ("THUMB_SPRING_MASS", TokenValue::Number(1.0)),
            ("THUMB_SIZE", TokenValue::from("16px")),
        ])
    }

    fn ids(entries: &[TokenEntry]) -> Vec<&str> {
        entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    #[test]
    fn test_group_buckets_by_kind() {
        let view = group(&state());
        assert_eq!(view.duration.len(), 4);
        assert_eq!(view.motion.len(), 2);
        assert_eq!(ids(&view.spring_stiffness), vec!["THUMB_SPRING_STIFFNESS"]);
        assert_eq!(ids(&view.spring_damping), vec!["AXIS_SPRING_DAMPING"]);
        assert_eq!(ids(&view.spring_mass), vec!["THUMB_SPRING_MASS"]);
    }

    #[test]
    fn test_unclassified_excluded() {
        let view = group(&state());
        assert_eq!(view.len(), 9);
        for kind in TokenKind::all() {
            assert!(view.bucket(*kind).iter().all(|(id, _)| id != "THUMB_SIZE"));
        }
    }

    #[test]
    fn test_sort_by_component_is_stable() {
        let view = group(&state());
        assert_eq!(
            ids(&view.duration),
            vec![
                "AXIS_TRANSITION_DURATION",
                "SLIDER_ANIMATION_DURATION",
                "THUMB_HOVER_DURATION",
                "THUMB_DRAG_DURATION",
            ]
        );
        assert_eq!(
            ids(&view.motion),
            vec!["AXIS_TRANSITION_EASING", "COUNTER_TRANSITION_EASING"]
        );
    }

    #[test]
    fn test_group_is_deterministic() {
        let s = state();
        assert_eq!(group(&s), group(&s));
    }

    #[test]
    fn test_duration_partition() {
        let view = group(&state());
        let parts = view.duration_by_component();
        let names: Vec<&str> = parts.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["AXIS", "SLIDER", "THUMB"]);
        assert_eq!(
            ids(&parts["THUMB"]),
            vec!["THUMB_HOVER_DURATION", "THUMB_DRAG_DURATION"]
        );
    }

    #[test]
    fn test_groups_carry_labels() {
        let view = group(&state());
        let groups = view.motion_groups();
        assert_eq!(groups[0].component, "AXIS");
        assert_eq!(groups[0].label, "Slider axis");
        assert_eq!(groups[1].label, "Counter");
    }

    #[test]
    fn test_group_with_custom_classifier() {
        let view = group_with(&state(), |id| {
            id.ends_with("_SIZE").then_some(TokenKind::Duration)
        });
        assert_eq!(ids(&view.duration), vec!["THUMB_SIZE"]);
        assert!(!view.has_spring_tokens());
    }

    #[test]
    fn test_empty_state() {
        let view = group(&TokenState::default());
        assert!(view.is_empty());
        assert!(view.duration_groups().is_empty());
    }
}
