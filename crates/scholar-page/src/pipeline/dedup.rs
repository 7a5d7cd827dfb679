//! Preprint suppression and ordering.

use std::cmp::Reverse;

use tracing::debug;

use super::matcher::{TitleMatcher, TokenOverlapMatcher};
use crate::models::Publication;

/// Drop preprints that have a published counterpart.
///
/// A preprint is suppressed when any non-preprint record's title is similar
/// per the matcher. Preprints are only ever tested against published records;
/// two preprints with similar titles (a v1/v2 pair, say) both survive. Input
/// order is preserved for everything kept, and running the function on its
/// own output changes nothing.
#[must_use]
pub fn suppress_superseded_preprints(
    pubs: Vec<Publication>,
    matcher: &dyn TitleMatcher,
) -> Vec<Publication> {
    let published_titles: Vec<&str> = pubs
        .iter()
        .filter(|p| !p.is_preprint)
        .map(|p| p.title.as_str())
        .collect();

    pubs.iter()
        .filter(|p| {
            if !p.is_preprint {
                return true;
            }
            let superseded =
                published_titles.iter().any(|t| matcher.is_same_work(&p.title, t));
            if superseded {
                debug!(title = %p.title, "suppressing preprint with published counterpart");
            }
            !superseded
        })
        .cloned()
        .collect()
}

/// Sort newest-first. Missing years sort as zero, i.e. last. The sort is
/// stable so equal years keep the order the dedup step emitted.
pub fn sort_by_year_desc(pubs: &mut [Publication]) {
    pubs.sort_by_key(|p| Reverse(p.sort_year()));
}

/// Default reconciliation: suppress superseded preprints with the token
/// overlap matcher, then order newest-first.
#[must_use]
pub fn reconcile(pubs: Vec<Publication>) -> Vec<Publication> {
    let mut pubs = suppress_superseded_preprints(pubs, &TokenOverlapMatcher);
    sort_by_year_desc(&mut pubs);
    pubs
}
