//! Link extraction from HTML markup

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract anchor href targets from a page's markup
///
/// External targets (`http://`, `https://`) and fragment-only targets
/// (`#section`) are skipped at extraction; anything else is returned
/// verbatim for the graph's normalization pass to judge.
pub fn extract_links(html: &str) -> HashSet<String> {
    let mut links = HashSet::new();

    for cap in HREF_RE.captures_iter(html) {
        if let Some(target) = cap.get(1) {
            let target_str = target.as_str();

            if target_str.starts_with("http://") || target_str.starts_with("https://") {
                continue;
            }

            if target_str.starts_with('#') || target_str.is_empty() {
                continue;
            }

            links.insert(target_str.to_string());
        }
    }

    links
}
