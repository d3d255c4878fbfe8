// 📦 Inventory Loader - Concatenate binder CSVs, derive card ids
//
// Each inventory row describes one physically stored card: which binder,
// which page, which slot, and which card it is. Unlike the catalog path,
// a malformed inventory source is fatal: inventory is the authoritative
// row source and cannot be silently truncated.

use crate::catalog::sorted_source_files;
use crate::error::EtlError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Columns every inventory source must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "binder_name",
    "page_number",
    "slot_number",
    "set_id",
    "card_number",
];

// ============================================================================
// INVENTORY RECORD
// ============================================================================

/// One physically stored card. Page and slot stay strings: sources are not
/// normalized, and padding them here would change which catalog ids match
/// ("4" and "04" are different card numbers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub binder_name: String,
    pub page_number: String,
    pub slot_number: String,
    pub set_id: String,
    pub card_number: String,

    /// Advisory name from the inventory sheet. May be stale; only used as
    /// a fallback when the catalog has no match.
    pub card_name: Option<String>,

    /// Advisory set name, same caveat as `card_name`.
    pub set_name: Option<String>,

    /// Derived identifier: `{set_id}-{card_number}`.
    pub card_id: String,
}

/// All inventory rows plus how many source files were seen, so an empty
/// directory is distinguishable from sources that exist but hold no rows.
#[derive(Debug, Clone, Default)]
pub struct InventoryData {
    pub records: Vec<InventoryRecord>,
    pub source_count: usize,
}

impl InventoryData {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn no_sources(&self) -> bool {
        self.source_count == 0
    }
}

/// Derive the catalog join key from a row's constituent fields.
pub fn derive_card_id(set_id: &str, card_number: &str) -> String {
    format!("{set_id}-{card_number}")
}

// ============================================================================
// DIRECTORY LOADER
// ============================================================================

/// Load every inventory CSV in a directory, concatenating rows in sorted
/// file order and preserving duplicates. A missing directory counts as
/// zero sources found.
pub fn load_inventory(inventory_dir: &Path) -> Result<InventoryData, EtlError> {
    let mut data = InventoryData::default();

    for path in sorted_source_files(inventory_dir, "csv") {
        let file_label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();

        let required = |name: &str| -> Result<usize, EtlError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| EtlError::MissingColumn {
                    file: file_label.clone(),
                    column: name.to_string(),
                })
        };

        let binder_idx = required("binder_name")?;
        let page_idx = required("page_number")?;
        let slot_idx = required("slot_number")?;
        let set_idx = required("set_id")?;
        let number_idx = required("card_number")?;

        // Advisory columns, present on some sheets only
        let name_idx = headers.iter().position(|h| h == "card_name");
        let set_name_idx = headers.iter().position(|h| h == "set_name");

        for row in reader.records() {
            let row = row?;
            let field = |i: usize| row.get(i).unwrap_or("").to_string();
            let advisory = |i: Option<usize>| {
                i.and_then(|i| row.get(i))
                    .map(str::to_string)
                    .filter(|s| !s.is_empty())
            };

            let set_id = field(set_idx);
            let card_number = field(number_idx);
            let card_id = derive_card_id(&set_id, &card_number);

            data.records.push(InventoryRecord {
                binder_name: field(binder_idx),
                page_number: field(page_idx),
                slot_number: field(slot_idx),
                card_name: advisory(name_idx),
                set_name: advisory(set_name_idx),
                set_id,
                card_number,
                card_id,
            });
        }

        data.source_count += 1;
    }

    Ok(data)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_load_concatenates_sources_in_file_name_order() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "b_second.csv",
            "binder_name,page_number,slot_number,set_id,card_number\nB2,1,1,base1,58\n",
        );
        write_csv(
            &dir,
            "a_first.csv",
            "binder_name,page_number,slot_number,set_id,card_number\nB1,1,1,base1,4\n",
        );

        let data = load_inventory(dir.path()).unwrap();

        assert_eq!(data.source_count, 2);
        assert_eq!(data.records.len(), 2);
        assert_eq!(data.records[0].binder_name, "B1");
        assert_eq!(data.records[0].card_id, "base1-4");
        assert_eq!(data.records[1].card_id, "base1-58");
    }

    #[test]
    fn test_duplicate_rows_are_preserved() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "binder.csv",
            "binder_name,page_number,slot_number,set_id,card_number\n\
             B1,1,1,base1,4\n\
             B1,1,2,base1,4\n",
        );

        let data = load_inventory(dir.path()).unwrap();

        assert_eq!(data.records.len(), 2);
        assert_eq!(data.records[0].card_id, data.records[1].card_id);
    }

    #[test]
    fn test_card_numbers_are_not_padded() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "binder.csv",
            "binder_name,page_number,slot_number,set_id,card_number\n\
             B1,1,1,base1,4\n\
             B1,1,2,base1,04\n",
        );

        let data = load_inventory(dir.path()).unwrap();

        assert_eq!(data.records[0].card_id, "base1-4");
        assert_eq!(data.records[1].card_id, "base1-04");
        assert_ne!(data.records[0].card_id, data.records[1].card_id);
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "broken.csv",
            "binder_name,page_number,slot_number,set_id\nB1,1,1,base1\n",
        );

        let err = load_inventory(dir.path()).unwrap_err();

        match err {
            EtlError::MissingColumn { file, column } => {
                assert_eq!(file, "broken.csv");
                assert_eq!(column, "card_number");
            }
            other => panic!("expected MissingColumn, got: {other}"),
        }
    }

    #[test]
    fn test_advisory_columns_captured_when_present() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "binder.csv",
            "binder_name,page_number,slot_number,set_id,card_number,card_name,set_name\n\
             B1,1,1,base1,4,Charizard,Base\n\
             B1,1,2,base1,58,,\n",
        );

        let data = load_inventory(dir.path()).unwrap();

        assert_eq!(data.records[0].card_name.as_deref(), Some("Charizard"));
        assert_eq!(data.records[0].set_name.as_deref(), Some("Base"));
        // Empty cells are absent, not empty strings
        assert_eq!(data.records[1].card_name, None);
        assert_eq!(data.records[1].set_name, None);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "binder.csv",
            "binder_name,page_number,slot_number,set_id,card_number,condition,sleeve\n\
             B1,2,15,base1,4,NM,yes\n",
        );

        let data = load_inventory(dir.path()).unwrap();

        assert_eq!(data.records.len(), 1);
        assert_eq!(data.records[0].slot_number, "15");
    }

    #[test]
    fn test_empty_directory_vs_empty_sources() {
        let empty_dir = TempDir::new().unwrap();
        let no_sources = load_inventory(empty_dir.path()).unwrap();
        assert!(no_sources.is_empty());
        assert!(no_sources.no_sources());

        let header_only = TempDir::new().unwrap();
        write_csv(
            &header_only,
            "binder.csv",
            "binder_name,page_number,slot_number,set_id,card_number\n",
        );
        let empty_rows = load_inventory(header_only.path()).unwrap();
        assert!(empty_rows.is_empty());
        assert!(!empty_rows.no_sources());
        assert_eq!(empty_rows.source_count, 1);
    }

    #[test]
    fn test_missing_directory_counts_as_no_sources() {
        let data = load_inventory(Path::new("/nonexistent/inventory/dir")).unwrap();

        assert!(data.is_empty());
        assert!(data.no_sources());
    }
}
