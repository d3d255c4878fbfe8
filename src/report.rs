// 📊 Summary Report - Totals over the persisted portfolio artifact
//
// Reads the artifact back rather than reusing in-memory state: the report
// runs against whatever the last ETL run actually persisted.

use crate::error::EtlError;
use crate::portfolio::PortfolioEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub card_count: usize,
    pub most_valuable_name: String,
    pub most_valuable_location: String,
    pub most_valuable_value: f64,
    pub generated_at: DateTime<Utc>,
}

impl PortfolioSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} cards, total ${:.2} | top: {} at {} (${:.2})",
            self.card_count,
            self.total_value,
            self.most_valuable_name,
            self.most_valuable_location,
            self.most_valuable_value
        )
    }
}

// ============================================================================
// REPORT GENERATION
// ============================================================================

/// Read the portfolio artifact and print the summary report.
///
/// A missing artifact is fatal. A zero-row artifact prints a plain notice
/// and returns `Ok(None)`. Ties on market value go to the first row,
/// matching the merge's keep-first rule.
pub fn generate_summary(portfolio_file: &Path) -> Result<Option<PortfolioSummary>, EtlError> {
    if !portfolio_file.exists() {
        return Err(EtlError::ArtifactMissing(portfolio_file.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(portfolio_file)?;
    let mut entries: Vec<PortfolioEntry> = Vec::new();
    for row in reader.deserialize() {
        entries.push(row?);
    }

    if entries.is_empty() {
        println!("The portfolio file is empty. No data to summarize.");
        return Ok(None);
    }

    let total_value: f64 = entries.iter().map(|e| e.card_market_value).sum();
    let top = entries.iter().skip(1).fold(&entries[0], |best, entry| {
        if entry.card_market_value > best.card_market_value {
            entry
        } else {
            best
        }
    });

    let summary = PortfolioSummary {
        total_value,
        card_count: entries.len(),
        most_valuable_name: top.card_name.clone(),
        most_valuable_location: top.index.clone(),
        most_valuable_value: top.card_market_value,
        generated_at: Utc::now(),
    };

    println!();
    println!("===== Portfolio Summary Report =====");
    println!("Total Portfolio Value: ${:.2}", summary.total_value);
    println!();
    println!("Most Valuable Card:");
    println!("  Name: {}", summary.most_valuable_name);
    println!("  Location: {}", summary.most_valuable_location);
    println!("  Market Value: ${:.2}", summary.most_valuable_value);
    println!("====================================");
    println!();

    Ok(Some(summary))
}

// ============================================================================
// TESTS
// ============================================================================
