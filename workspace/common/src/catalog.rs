//! Static content catalog.
//!
//! Everything the report displays lives here. The catalog is built once at
//! startup ([`Catalog::builtin`]) and handed down explicitly to whoever needs
//! it; nothing reads it through a global.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a collapsible topic (e.g. `"time-distance"`).
pub type TopicKey = String;

/// One external source referenced by the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
    /// Short description of what the source covers
    pub content: String,
    /// Free-form retrieval date (e.g. "Retrieved 2024")
    pub date: String,
    pub site_name: String,
    /// Excerpt of the material taken from the source
    pub source_content: String,
}

/// Lookup table from citation id to [`Citation`].
///
/// Ids are unique by construction. Iteration lists numeric ids in numeric
/// order, which is the order the references footer uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CitationRegistry(BTreeMap<String, Citation>);

impl CitationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Citation> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Entries in id order: numeric ids ascending, then the rest by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Citation)> {
        let mut entries: Vec<(&str, &Citation)> = self
            .0
            .iter()
            .map(|(id, citation)| (id.as_str(), citation))
            .collect();
        entries.sort_by(|(a, _), (b, _)| id_order(a, b));
        entries.into_iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds or replaces the entry for `id`.
    pub fn insert(&mut self, id: impl Into<String>, citation: Citation) -> Option<Citation> {
        self.0.insert(id.into(), citation)
    }
}

fn id_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Share of the test taken by one top-level category.
///
/// `questions` sizes the pie slice; `percentage` is only printed in the
/// label. The two are authored independently and are not reconciled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicDistributionEntry {
    pub name: String,
    pub questions: u32,
    pub percentage: u32,
    /// CSS color, e.g. `#3b82f6`
    pub color: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category topic breakdown row, one bar in a subtopic chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubtopicEntry {
    pub topic: String,
    pub questions: u32,
    pub difficulty: Difficulty,
}

/// One radar axis. Scores live in `[0, 100]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillScoreEntry {
    pub skill: String,
    pub score: u8,
}

/// Point of the illustrative data-interpretation trend chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub sales: u32,
    pub profit: u32,
}

/// Externally hosted images, referenced by URL and never bundled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageCatalog {
    pub banner: String,
    pub hitbullseye_logo: String,
    pub hitbullseye_generic: String,
    pub freshers_now_logo: String,
    pub freshers_now_questions: String,
    pub prep_insta_courses: String,
    pub prep_insta_logo: String,
}

/// A multiple-choice sample question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SampleQuestion {
    /// Heading shown above the prompt ("Sample Question:", "Grammar:", ...)
    pub heading: String,
    pub prompt: String,
    /// Premises of a syllogism, empty otherwise
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conclusions: Vec<String>,
    /// Options already carry their "(A)" style prefix
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Two-column matching exercises list both columns here
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub citation: String,
}

impl SampleQuestion {
    /// Long options read better stacked in a single column.
    pub fn single_column(&self) -> bool {
        self.options.iter().any(|option| option.len() > 20)
    }
}

/// Collapsible topic card with its sample question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpandableTopic {
    pub key: TopicKey,
    pub title: String,
    pub sample: SampleQuestion,
}

/// Row of the "Complete Topics Coverage" table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageRow {
    pub topic: String,
    pub questions: u32,
    pub difficulty: Difficulty,
    pub key_concepts: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicCount {
    pub name: String,
    pub questions: u32,
}

/// Preparation site card on the resources section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceEntry {
    pub name: String,
    pub image: String,
    pub image_alt: String,
    pub description: String,
    pub citation: String,
}

/// Headline figures shown in the banner and the key statistics card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Headline {
    pub questions_analyzed: String,
    pub categories: u32,
    pub duration_minutes: String,
    pub subtopics: String,
}

/// All immutable content of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub headline: Headline,
    pub citations: CitationRegistry,
    pub images: ImageCatalog,
    pub topic_distribution: Vec<TopicDistributionEntry>,
    pub skill_scores: Vec<SkillScoreEntry>,
    pub quantitative_topics: Vec<SubtopicEntry>,
    pub quantitative_samples: Vec<ExpandableTopic>,
    pub quantitative_coverage: Vec<CoverageRow>,
    pub reasoning_topics: Vec<SubtopicEntry>,
    pub reasoning_samples: Vec<ExpandableTopic>,
    pub reasoning_core_topics: Vec<String>,
    pub reasoning_advanced_topics: Vec<String>,
    pub verbal_topics: Vec<TopicCount>,
    pub verbal_skills: Vec<String>,
    pub verbal_samples: Vec<SampleQuestion>,
    pub trend: Vec<TrendPoint>,
    pub resources: Vec<ResourceEntry>,
}

impl Catalog {
    /// The content shipped with the report.
    pub fn builtin() -> Self {
        crate::content::builtin()
    }

    /// Every collapsible topic across all sections.
    pub fn expandable_topics(&self) -> impl Iterator<Item = &ExpandableTopic> {
        self.quantitative_samples
            .iter()
            .chain(self.reasoning_samples.iter())
    }

    /// Every citation id the page refers to, paired with where it is used.
    pub fn cited_ids(&self) -> Vec<(String, &str)> {
        let topics = self
            .expandable_topics()
            .map(|topic| (format!("topic '{}'", topic.key), topic.sample.citation.as_str()));
        let verbal = self
            .verbal_samples
            .iter()
            .map(|sample| (format!("verbal sample '{}'", sample.heading), sample.citation.as_str()));
        let resources = self
            .resources
            .iter()
            .map(|resource| (format!("resource '{}'", resource.name), resource.citation.as_str()));

        topics.chain(verbal).chain(resources).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_citations_resolve() {
        let catalog = Catalog::builtin();
        for (place, id) in catalog.cited_ids() {
            assert!(catalog.citations.contains(id), "{place} cites missing id {id}");
        }
        assert!(catalog.citations.iter().all(|(_, c)| !c.url.is_empty()));
    }

    #[test]
    fn test_builtin_topic_keys_are_unique() {
        let catalog = Catalog::builtin();
        let mut keys: Vec<&str> = catalog.expandable_topics().map(|t| t.key.as_str()).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert!(keys.contains(&"time-distance"));
    }

    #[test]
    fn test_builtin_tables() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.topic_distribution.len(), 4);
        assert_eq!(catalog.trend.len(), 6);
        assert!(catalog.skill_scores.iter().all(|s| s.score <= 100));

        // Counts and percentages are independent fields
        let counts: u32 = catalog.topic_distribution.iter().map(|e| e.questions).sum();
        let percentages: u32 = catalog.topic_distribution.iter().map(|e| e.percentage).sum();
        assert_eq!(counts, 115);
        assert_eq!(percentages, 100);
    }

    #[test]
    fn test_registry_iterates_in_id_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.citations.ids().collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_registry_orders_numeric_ids_numerically() {
        let citation = Catalog::builtin().citations.get("1").cloned().unwrap();
        let mut registry = CitationRegistry::new();
        for id in ["10", "2", "appendix", "1"] {
            registry.insert(id, citation.clone());
        }

        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["1", "2", "10", "appendix"]);
    }

    #[test]
    fn test_catalog_json_roundtrip_preserves_registry() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(&catalog).unwrap();
        assert!(json["citations"]["1"]["url"].is_string());

        let parsed: Catalog = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_sample_question_layout() {
        let short = SampleQuestion {
            options: vec!["(A) 50 km/hr".into(), "(B) 54 km/hr".into()],
            ..Default::default()
        };
        let long = SampleQuestion {
            options: vec!["(A) He will assume final responsibility".into()],
            ..Default::default()
        };
        assert!(!short.single_column());
        assert!(long.single_column());
    }
}
