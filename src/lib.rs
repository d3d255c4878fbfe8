// Card Portfolio ETL - Core Library
// Exposes all modules for use in the CLI binary and tests

pub mod catalog;
pub mod config;
pub mod dedup;
pub mod error;
pub mod inventory;
pub mod pipeline;
pub mod portfolio;
pub mod report;

// Re-export commonly used types
pub use catalog::{flatten_json, load_catalog, normalize_record, CatalogLoad, CatalogRecord};
pub use config::PipelineConfig;
pub use dedup::deduplicate_catalog;
pub use error::EtlError;
pub use inventory::{
    derive_card_id, load_inventory, InventoryData, InventoryRecord, REQUIRED_COLUMNS,
};
pub use pipeline::run_pipeline;
pub use portfolio::{
    merge_portfolio, update_portfolio, PortfolioEntry, NOT_FOUND, OUTPUT_COLUMNS,
};
pub use report::{generate_summary, PortfolioSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
