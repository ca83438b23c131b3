// File: src/share.rs
//
// Outbound boundary: the crate only produces text here. Opening the
// URL and delivering share/clipboard payloads is the host's job, and
// fire-and-forget from the core's perspective.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::core::types::QueryCandidate;

/// Mobile search endpoint the generated keywords are substituted into.
pub const SEARCH_ENDPOINT: &str = "https://mobile.yangkeduo.com/search_result.html?search_key=";

/// The outbound search URL for one keyword (UTF-8 percent-encoded).
pub fn search_url(keyword: &str) -> String {
    format!(
        "{SEARCH_ENDPOINT}{}",
        utf8_percent_encode(keyword, NON_ALPHANUMERIC)
    )
}

/// Share-sheet payload for a single keyword.
pub fn share_text(keyword: &str) -> String {
    format!("🛍️ 拼多多 search: {keyword}")
}

/// Newline-joined "label: keyword" block for sharing a whole result set.
pub fn share_all_text(candidates: &[QueryCandidate]) -> String {
    candidates
        .iter()
        .map(|candidate| format!("{}: {}", candidate.label(), candidate.keyword))
        .collect::<Vec<_>>()
        .join("\n")
}
