//! Normalized link graph over a closed corpus

use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Immutable mapping from page to the set of in-corpus pages it links to
///
/// The key set is the full universe of pages considered by every ranking
/// computation and never changes after construction. Pages with no valid
/// outbound links (sinks) keep an empty set rather than being omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkGraph {
    pages: HashMap<String, HashSet<String>>,
}

impl LinkGraph {
    /// Build a graph from raw link-extraction output
    ///
    /// Normalization: a target is kept only if it is another page of the
    /// corpus. Self-links and targets not present as keys in the raw
    /// mapping are dropped silently.
    pub fn from_raw(raw: HashMap<String, HashSet<String>>) -> Self {
        let mut pages: HashMap<String, HashSet<String>> = HashMap::with_capacity(raw.len());

        for (page, targets) in &raw {
            let kept: HashSet<String> = targets
                .iter()
                .filter(|t| *t != page && raw.contains_key(*t))
                .cloned()
                .collect();

            let dropped = targets.len() - kept.len();
            if dropped > 0 {
                debug!(page = %page, dropped, "dropped self or out-of-corpus link targets");
            }

            pages.insert(page.clone(), kept);
        }

        Self { pages }
    }

    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the corpus has no pages at all
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Whether a page is part of the corpus
    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Iterate over all page identifiers
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Outbound links of a page, or None if the page is not in the corpus
    pub fn links(&self, page: &str) -> Option<&HashSet<String>> {
        self.pages.get(page)
    }

    /// Whether a page is a member with zero outbound links
    pub fn is_sink(&self, page: &str) -> bool {
        self.pages.get(page).is_some_and(|l| l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, &[&str])]) -> HashMap<String, HashSet<String>> {
        entries
            .iter()
            .map(|(page, targets)| {
                (
                    page.to_string(),
                    targets.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_drops_self_links() {
        let graph = LinkGraph::from_raw(raw(&[("a.html", &["a.html", "b.html"]), ("b.html", &[])]));

        let links = graph.links("a.html").unwrap();
        assert_eq!(links.len(), 1);
        assert!(links.contains("b.html"));
    }

    #[test]
    fn test_drops_out_of_corpus_targets() {
        let graph = LinkGraph::from_raw(raw(&[
            ("a.html", &["b.html", "missing.html", "https://example.com"]),
            ("b.html", &["a.html"]),
        ]));

        assert_eq!(graph.links("a.html").unwrap().len(), 1);
        assert!(graph.links("a.html").unwrap().contains("b.html"));
    }

    #[test]
    fn test_sinks_are_kept() {
        let graph = LinkGraph::from_raw(raw(&[("a.html", &[]), ("b.html", &["a.html"])]));

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("a.html"));
        assert!(graph.is_sink("a.html"));
        assert!(!graph.is_sink("b.html"));
    }

    #[test]
    fn test_unknown_page_accessors() {
        let graph = LinkGraph::from_raw(raw(&[("a.html", &[])]));

        assert!(!graph.contains("nope.html"));
        assert!(graph.links("nope.html").is_none());
        assert!(!graph.is_sink("nope.html"));
    }

    #[test]
    fn test_empty_graph() {
        let graph = LinkGraph::from_raw(HashMap::new());
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_page_that_becomes_sink_after_normalization() {
        // Every target is invalid, so the page keeps an empty set
        let graph = LinkGraph::from_raw(raw(&[
            ("a.html", &["a.html", "gone.html"]),
            ("b.html", &["a.html"]),
        ]));

        assert!(graph.is_sink("a.html"));
    }
}
