//! Title filtering for the regulation feed.

use crate::record::Regulation;

/// Filter records by case-insensitive substring match on `title`.
///
/// An empty query returns the whole input in order. Records without a
/// title never match a non-empty query. The input is only borrowed, so
/// the caller's collection is untouched.
pub fn filter_by_title<'a>(records: &'a [Regulation], query: &str) -> Vec<&'a Regulation> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}
