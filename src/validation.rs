//! Integrity checks for report content.
//!
//! The page silently omits citations it cannot resolve, so a broken reference
//! only shows up as a missing link. These checks catch that before release.

use common::Catalog;
use common::charts::SCORE_DOMAIN_MAX;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Points in the data-interpretation trend chart
pub const TREND_POINTS: usize = 6;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported catalog format '{0}', expected .json, .yaml or .yml")]
    UnsupportedFormat(String),
    #[error("catalog failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<CatalogIssue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    MissingCitation { place: String, id: String },
    EmptyUrl { id: String },
    ScoreOutOfRange { skill: String, score: u8 },
    DuplicateTopicKey(String),
    TrendLength(usize),
    EmptyDistribution,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::MissingCitation { place, id } => {
                write!(f, "{place} cites '{id}', which is not in the citation registry")
            }
            CatalogIssue::EmptyUrl { id } => write!(f, "citation '{id}' has an empty url"),
            CatalogIssue::ScoreOutOfRange { skill, score } => {
                write!(f, "skill '{skill}' scores {score}, above {SCORE_DOMAIN_MAX}")
            }
            CatalogIssue::DuplicateTopicKey(key) => write!(f, "topic key '{key}' is used twice"),
            CatalogIssue::TrendLength(len) => {
                write!(f, "trend chart has {len} points, expected {TREND_POINTS}")
            }
            CatalogIssue::EmptyDistribution => write!(f, "category distribution is empty"),
        }
    }
}

/// Reads a catalog from a `.json`, `.yaml` or `.yml` file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_str() {
        "json" => Ok(serde_json::from_str(&contents)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&contents)?),
        other => Err(CatalogError::UnsupportedFormat(other.to_string())),
    }
}

pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for (place, id) in catalog.cited_ids() {
        if !catalog.citations.contains(id) {
            issues.push(CatalogIssue::MissingCitation {
                place,
                id: id.to_string(),
            });
        }
    }

    for (id, citation) in catalog.citations.iter() {
        if citation.url.trim().is_empty() {
            issues.push(CatalogIssue::EmptyUrl { id: id.to_string() });
        }
    }

    for entry in &catalog.skill_scores {
        if f64::from(entry.score) > SCORE_DOMAIN_MAX {
            issues.push(CatalogIssue::ScoreOutOfRange {
                skill: entry.skill.clone(),
                score: entry.score,
            });
        }
    }

    let mut seen = HashSet::new();
    for topic in catalog.expandable_topics() {
        if !seen.insert(topic.key.as_str()) {
            issues.push(CatalogIssue::DuplicateTopicKey(topic.key.clone()));
        }
    }

    if catalog.trend.len() != TREND_POINTS {
        issues.push(CatalogIssue::TrendLength(catalog.trend.len()));
    }

    if catalog.topic_distribution.is_empty() {
        issues.push(CatalogIssue::EmptyDistribution);
    }

    issues
}

pub fn ensure_valid(catalog: &Catalog) -> Result<(), CatalogError> {
    let issues = validate_catalog(catalog);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Invalid(issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert_eq!(validate_catalog(&Catalog::builtin()), vec![]);
        assert!(ensure_valid(&Catalog::builtin()).is_ok());
    }

    #[test]
    fn test_reports_every_problem() {
        let mut catalog = Catalog::builtin();
        catalog.quantitative_samples[0].sample.citation = "9".to_string();
        catalog.reasoning_samples[1].key = "time-distance".to_string();
        catalog.skill_scores[0].score = 120;
        catalog.trend.pop();

        let issues = validate_catalog(&catalog);
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&CatalogIssue::MissingCitation {
            place: "topic 'time-distance'".to_string(),
            id: "9".to_string(),
        }));
        assert!(issues.contains(&CatalogIssue::DuplicateTopicKey("time-distance".to_string())));
        assert!(issues.contains(&CatalogIssue::TrendLength(5)));
        assert!(matches!(
            ensure_valid(&catalog),
            Err(CatalogError::Invalid(found)) if found.len() == 4
        ));
    }

    #[test]
    fn test_load_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();

        let json_path = dir.path().join("catalog.json");
        std::fs::write(&json_path, serde_json::to_string(&catalog).unwrap()).unwrap();
        assert_eq!(load_catalog(&json_path).unwrap(), catalog);

        let yaml_path = dir.path().join("catalog.yml");
        std::fs::write(&yaml_path, serde_yaml::to_string(&catalog).unwrap()).unwrap();
        assert_eq!(load_catalog(&yaml_path).unwrap(), catalog);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            load_catalog(&path),
            Err(CatalogError::UnsupportedFormat(ext)) if ext == "toml"
        ));
        assert!(matches!(
            load_catalog(&dir.path().join("missing.json")),
            Err(CatalogError::Io { .. })
        ));
    }
}
