use crate::catalog::CitationRegistry;
use serde::{Deserialize, Serialize};

/// How a citation link presents itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CitationMode {
    /// Inline reference, labelled `[id]`
    Quote,
    /// Labelled with the source title, or its URL when untitled
    #[default]
    Recommend,
}

/// Everything needed to draw a citation hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCitation {
    pub href: String,
    pub label: String,
    /// Hover text
    pub title: String,
}

/// Looks `id` up in `registry`.
///
/// Unknown ids resolve to `None` and the caller renders nothing.
pub fn resolve_citation(
    id: &str,
    mode: CitationMode,
    registry: &CitationRegistry,
) -> Option<ResolvedCitation> {
    let citation = registry.get(id)?;
    // Blank titles count as missing
    let title = citation
        .title
        .as_deref()
        .filter(|title| !title.trim().is_empty());

    let label = match mode {
        CitationMode::Quote => format!("[{id}]"),
        CitationMode::Recommend => title.unwrap_or(&citation.url).to_string(),
    };

    Some(ResolvedCitation {
        href: citation.url.clone(),
        label,
        title: title.unwrap_or("Reference").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Citation;

    fn registry() -> CitationRegistry {
        let mut registry = CitationRegistry::new();
        registry.insert(
            "1",
            Citation {
                title: Some("Sample Questions".to_string()),
                url: "https://example.com/questions".to_string(),
                content: String::new(),
                date: "Retrieved 2024".to_string(),
                site_name: "Example".to_string(),
                source_content: String::new(),
            },
        );
        registry.insert(
            "7",
            Citation {
                title: None,
                url: "https://example.org/untitled".to_string(),
                content: String::new(),
                date: String::new(),
                site_name: String::new(),
                source_content: String::new(),
            },
        );
        registry
    }

    #[test]
    fn test_known_id_links_to_registry_url() {
        let registry = registry();
        for mode in [CitationMode::Quote, CitationMode::Recommend] {
            let link = resolve_citation("1", mode, &registry).unwrap();
            assert_eq!(link.href, "https://example.com/questions");
            assert_eq!(link.title, "Sample Questions");
        }
    }

    #[test]
    fn test_unknown_id_is_omitted() {
        let registry = registry();
        assert_eq!(resolve_citation("42", CitationMode::Quote, &registry), None);
        assert_eq!(resolve_citation("", CitationMode::Recommend, &registry), None);
        assert_eq!(
            resolve_citation("1", CitationMode::Quote, &CitationRegistry::new()),
            None
        );
    }

    #[test]
    fn test_quote_label_is_bracketed_id() {
        let link = resolve_citation("1", CitationMode::Quote, &registry()).unwrap();
        assert_eq!(link.label, "[1]");
    }

    #[test]
    fn test_recommend_label_falls_back_to_url() {
        let registry = registry();
        let titled = resolve_citation("1", CitationMode::Recommend, &registry).unwrap();
        assert_eq!(titled.label, "Sample Questions");

        let untitled = resolve_citation("7", CitationMode::Recommend, &registry).unwrap();
        assert_eq!(untitled.label, "https://example.org/untitled");
        assert_eq!(untitled.title, "Reference");
    }

    #[test]
    fn test_blank_title_falls_back_to_url() {
        let mut registry = registry();
        for (id, title) in [("5", ""), ("6", "   ")] {
            registry.insert(
                id,
                Citation {
                    title: Some(title.to_string()),
                    url: "https://example.org/blank".to_string(),
                    content: String::new(),
                    date: String::new(),
                    site_name: String::new(),
                    source_content: String::new(),
                },
            );
            let link = resolve_citation(id, CitationMode::Recommend, &registry).unwrap();
            assert_eq!(link.label, "https://example.org/blank");
            assert_eq!(link.title, "Reference");
        }
    }

    #[test]
    fn test_default_mode_is_recommend() {
        assert_eq!(CitationMode::default(), CitationMode::Recommend);
    }
}
