// ⚖️ Portfolio Merger - Join inventory against the catalog, persist the artifact
//
// The join is inventory-preserving: every stored card produces exactly one
// output row, whether or not the catalog knows anything about it. Catalog
// ids are unique after deduplication, so the join can never fan out.

use crate::catalog::{load_catalog, CatalogRecord};
use crate::config::PipelineConfig;
use crate::dedup::deduplicate_catalog;
use crate::error::EtlError;
use crate::inventory::{load_inventory, InventoryRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Sentinel written when neither the catalog nor the inventory sheet
/// offers a name.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Artifact column order. Must match the field order of `PortfolioEntry`.
pub const OUTPUT_COLUMNS: [&str; 7] = [
    "index",
    "card_name",
    "set_name",
    "card_market_value",
    "binder_name",
    "page_number",
    "slot_number",
];

// ============================================================================
// PORTFOLIO ENTRY
// ============================================================================

/// One row of the persisted portfolio: the location key, what the card is,
/// what it is worth, and where it physically sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// Composite location key: `{binder}-{page}-{slot}`.
    pub index: String,
    pub card_name: String,
    pub set_name: String,
    pub card_market_value: f64,
    pub binder_name: String,
    pub page_number: String,
    pub slot_number: String,
}

// ============================================================================
// MERGE
// ============================================================================

/// Left-join inventory rows against the deduplicated catalog.
///
/// Name resolution order: authoritative catalog value, then the advisory
/// value from the inventory sheet, then the `NOT_FOUND` sentinel. Market
/// value defaults to 0.0 for unmatched cards.
pub fn merge_portfolio(
    catalog: &[CatalogRecord],
    inventory: &[InventoryRecord],
) -> Vec<PortfolioEntry> {
    let by_id: HashMap<&str, &CatalogRecord> = catalog
        .iter()
        .filter_map(|record| record.card_id.as_deref().map(|id| (id, record)))
        .collect();

    inventory
        .iter()
        .map(|item| {
            let matched = by_id.get(item.card_id.as_str()).copied();

            PortfolioEntry {
                index: location_key(item),
                card_name: resolve_name(
                    matched.and_then(|c| c.card_name.clone()),
                    item.card_name.clone(),
                ),
                set_name: resolve_name(
                    matched.and_then(|c| c.set_name.clone()),
                    item.set_name.clone(),
                ),
                card_market_value: matched.map(|c| c.market_value).unwrap_or(0.0),
                binder_name: item.binder_name.clone(),
                page_number: item.page_number.clone(),
                slot_number: item.slot_number.clone(),
            }
        })
        .collect()
}

fn resolve_name(catalog_value: Option<String>, advisory: Option<String>) -> String {
    catalog_value
        .or(advisory)
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

fn location_key(item: &InventoryRecord) -> String {
    format!(
        "{}-{}-{}",
        item.binder_name, item.page_number, item.slot_number
    )
}

// ============================================================================
// ETL ENTRY POINT
// ============================================================================

/// Run the full merge: load both sources, join, persist the artifact.
///
/// An empty inventory is valid-but-degenerate: the artifact is written
/// with headers and zero rows, and a warning goes to stderr. A malformed
/// inventory source aborts before anything is written.
pub fn update_portfolio(config: &PipelineConfig) -> Result<(), EtlError> {
    let catalog_load = load_catalog(&config.catalog_dir);
    if catalog_load.skipped_documents > 0 {
        eprintln!(
            "Note: skipped {} unreadable catalog document(s)",
            catalog_load.skipped_documents
        );
    }
    let catalog = deduplicate_catalog(catalog_load.records);

    let inventory = load_inventory(&config.inventory_dir)?;

    if inventory.is_empty() {
        if inventory.no_sources() {
            eprintln!("Warning: no inventory sources found. Writing empty portfolio.");
        } else {
            eprintln!("Warning: inventory is empty. Writing empty portfolio.");
        }
        write_artifact(&config.output_file, &[])?;
        return Ok(());
    }

    let entries = merge_portfolio(&catalog, &inventory.records);
    write_artifact(&config.output_file, &entries)?;

    println!(
        "Portfolio updated: {} cards -> {}",
        entries.len(),
        config.output_file.display()
    );
    Ok(())
}

/// Persist the artifact, fully replacing any prior version.
///
/// Rows are serialized to an in-memory buffer first and written in one
/// call, so a failed run never leaves a half-written artifact behind.
/// Market values keep full precision; rounding is the report's concern.
fn write_artifact(path: &Path, entries: &[PortfolioEntry]) -> Result<(), EtlError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if entries.is_empty() {
        writer.write_record(OUTPUT_COLUMNS)?;
    } else {
        for entry in entries {
            writer.serialize(entry)?;
        }
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| EtlError::Io(e.into_error()))?;
    fs::write(path, buffer)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
