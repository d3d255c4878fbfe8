// Pipeline configuration
// Source and destination paths are data, not branching logic: the two
// operating modes are named presets over the same entry points.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths for one pipeline run: where to read the card catalog and the
/// binder inventory, and where to persist the portfolio artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory of catalog JSON documents (card attributes and prices).
    pub catalog_dir: PathBuf,

    /// Directory of inventory CSV files (one row per physically stored card).
    pub inventory_dir: PathBuf,

    /// Destination of the portfolio CSV, fully overwritten each run.
    pub output_file: PathBuf,
}

impl PipelineConfig {
    pub fn new(
        catalog_dir: impl Into<PathBuf>,
        inventory_dir: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        PipelineConfig {
            catalog_dir: catalog_dir.into(),
            inventory_dir: inventory_dir.into(),
            output_file: output_file.into(),
        }
    }

    /// Production preset: live catalog and inventory directories.
    pub fn production() -> Self {
        PipelineConfig::new("./card_set_lookup", "./card_inventory", "card_portfolio.csv")
    }

    /// Test preset: fixture directories, separate output file.
    pub fn test_mode() -> Self {
        PipelineConfig::new(
            "./card_set_lookup_test",
            "./card_inventory_test",
            "test_card_portfolio.csv",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_disjoint() {
        let prod = PipelineConfig::production();
        let test = PipelineConfig::test_mode();

        assert_ne!(prod.catalog_dir, test.catalog_dir);
        assert_ne!(prod.inventory_dir, test.inventory_dir);
        assert_ne!(prod.output_file, test.output_file);
    }

    #[test]
    fn test_custom_paths() {
        let config = PipelineConfig::new("/tmp/catalog", "/tmp/inventory", "/tmp/out.csv");

        assert_eq!(config.catalog_dir, PathBuf::from("/tmp/catalog"));
        assert_eq!(config.inventory_dir, PathBuf::from("/tmp/inventory"));
        assert_eq!(config.output_file, PathBuf::from("/tmp/out.csv"));
    }
}
