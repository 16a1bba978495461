//! UI state of the report page.
//!
//! Two independent state machines: the active section (exactly one of six,
//! fully connected) and a per-topic expanded flag. Both live for the page
//! session and are only changed through [`ReportState::apply`] or its two
//! named operations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::catalog::TopicKey;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Overview,
    Quantitative,
    Reasoning,
    Verbal,
    Data,
    Resources,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Quantitative,
        Section::Reasoning,
        Section::Verbal,
        Section::Data,
        Section::Resources,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Quantitative => "quantitative",
            Section::Reasoning => "reasoning",
            Section::Verbal => "verbal",
            Section::Data => "data",
            Section::Resources => "resources",
        }
    }

    /// Navigation button label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Quantitative => "Quantitative",
            Section::Reasoning => "Logical Reasoning",
            Section::Verbal => "Verbal Ability",
            Section::Data => "Data Interpretation",
            Section::Resources => "Resources",
        }
    }

    /// Heading shown at the top of the section body.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Test Overview & Distribution",
            Section::Quantitative => "Quantitative Aptitude Questions",
            Section::Reasoning => "Logical Reasoning Questions",
            Section::Verbal => "Verbal Ability Questions",
            Section::Data => "Data Interpretation Questions",
            Section::Resources => "Preparation Resources",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// User actions the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportAction {
    SelectSection(Section),
    ToggleTopic(TopicKey),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportState {
    active_section: Section,
    expanded_topics: HashMap<TopicKey, bool>,
}

impl ReportState {
    /// Overview active, every topic collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: ReportAction) {
        match action {
            ReportAction::SelectSection(section) => self.set_active_section(section),
            ReportAction::ToggleTopic(key) => self.toggle_topic(&key),
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Selects a section by its id. Unknown ids leave the state untouched.
    pub fn select_section(&mut self, id: &str) {
        if let Ok(section) = id.parse() {
            self.set_active_section(section);
        }
    }

    /// Flips the expanded flag of `key` and nothing else.
    pub fn toggle_topic(&mut self, key: &str) {
        let expanded = self.is_expanded(key);
        self.expanded_topics.insert(key.to_string(), !expanded);
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_topics.get(key).copied().unwrap_or(false)
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active_section == section
    }

    pub fn expanded_topics(&self) -> &HashMap<TopicKey, bool> {
        &self.expanded_topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ReportState::new();
        assert_eq!(state.active_section(), Section::Overview);
        assert!(state.expanded_topics().is_empty());
        assert!(!state.is_expanded("time-distance"));
    }

    #[test]
    fn test_exactly_one_section_visible() {
        let mut state = ReportState::new();
        for selected in Section::ALL {
            state.set_active_section(selected);
            for section in Section::ALL {
                assert_eq!(state.is_visible(section), section == selected);
            }
        }
    }

    #[test]
    fn test_every_section_reachable_from_every_other() {
        for from in Section::ALL {
            for to in Section::ALL {
                let mut state = ReportState::new();
                state.apply(ReportAction::SelectSection(from));
                state.apply(ReportAction::SelectSection(to));
                assert_eq!(state.active_section(), to);
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let mut state = ReportState::new();
        state.toggle_topic("coding");
        assert!(state.is_expanded("coding"));
        state.toggle_topic("coding");
        assert!(!state.is_expanded("coding"));

        state.toggle_topic("coding");
        let before = state.is_expanded("coding");
        state.toggle_topic("coding");
        state.toggle_topic("coding");
        assert_eq!(state.is_expanded("coding"), before);
    }

    #[test]
    fn test_toggle_leaves_other_topics_alone() {
        let mut state = ReportState::new();
        state.toggle_topic("syllogisms");
        state.toggle_topic("percentages");
        state.toggle_topic("percentages");

        assert!(state.is_expanded("syllogisms"));
        assert!(!state.is_expanded("percentages"));
        assert!(!state.is_expanded("work-time"));
        assert_eq!(state.active_section(), Section::Overview);
    }

    #[test]
    fn test_expansion_survives_navigation() {
        let mut state = ReportState::new();
        state.apply(ReportAction::SelectSection(Section::Quantitative));
        state.apply(ReportAction::ToggleTopic("time-distance".to_string()));
        assert!(state.is_expanded("time-distance"));

        state.apply(ReportAction::SelectSection(Section::Reasoning));
        state.apply(ReportAction::SelectSection(Section::Quantitative));

        assert!(state.is_expanded("time-distance"));
        assert!(state.is_visible(Section::Quantitative));
    }

    #[test]
    fn test_select_unknown_section_is_noop() {
        let mut state = ReportState::new();
        state.select_section("verbal");
        assert_eq!(state.active_section(), Section::Verbal);

        state.select_section("appendix");
        assert_eq!(state.active_section(), Section::Verbal);
    }

    #[test]
    fn test_section_ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "Overview".parse::<Section>(),
            Err(UnknownSection("Overview".to_string()))
        );
    }
}
