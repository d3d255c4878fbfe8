// 🔍 Catalog Deduplicator - One record per card id, highest value wins
//
// The same card id shows up in several catalog documents (re-scraped or
// multi-source dumps) with differing prices. The highest quoted market
// value is treated as authoritative.

use crate::catalog::CatalogRecord;
use std::collections::HashSet;

/// Collapse records sharing a card id down to one.
///
/// Records are stable-sorted by market value descending, then the first
/// record per id is kept. Stability means that among equal values the
/// first-encountered record's non-value fields survive.
pub fn deduplicate_catalog(mut records: Vec<CatalogRecord>) -> Vec<CatalogRecord> {
    records.sort_by(|a, b| {
        b.market_value
            .partial_cmp(&a.market_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut seen: HashSet<Option<String>> = HashSet::new();
    records.retain(|record| seen.insert(record.card_id.clone()));
    records
}

// ============================================================================
// TESTS
// ============================================================================
