//! Fuzzy title matching for preprint/published reconciliation.
//!
//! The default matcher is a bag-of-tokens overlap heuristic: cheap, symmetric,
//! and deliberately approximate. False positives and negatives are an accepted
//! tradeoff of the approach, not a bug. The trait seam exists so a stricter
//! matcher can replace it without touching the dedup step.

use std::collections::HashSet;

/// Decides whether two titles refer to the same work.
pub trait TitleMatcher {
    /// True when the two titles plausibly name the same work.
    fn is_same_work(&self, a: &str, b: &str) -> bool;
}

/// Token-overlap matcher: titles are similar when more than half of the
/// smaller title's significant tokens appear in the other title.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenOverlapMatcher;

impl TokenOverlapMatcher {
    /// Extract significant tokens from a title: lowercase, strip everything
    /// outside `a-z` and space, split on whitespace, keep tokens of length
    /// >= 4. Short/common words are noise for overlap purposes.
    #[must_use]
    pub fn tokenize(title: &str) -> Vec<String> {
        title
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || *c == ' ')
            .collect::<String>()
            .split_whitespace()
            .filter(|w| w.len() >= 4)
            .map(str::to_string)
            .collect()
    }

    /// Overlap test over token lists. Presence counting, not multiset: a
    /// token repeated in `a` counts once against `b`'s set. Either side
    /// empty means never similar.
    #[must_use]
    pub fn similar(a: &[String], b: &[String]) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }

        let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
        let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
        let overlap = set_a.intersection(&set_b).count();
        let smaller = a.len().min(b.len());

        overlap as f64 / smaller as f64 > 0.5
    }
}

impl TitleMatcher for TokenOverlapMatcher {
    fn is_same_work(&self, a: &str, b: &str) -> bool {
        Self::similar(&Self::tokenize(a), &Self::tokenize(b))
    }
}
