pub mod json;
pub mod svg;
pub mod types;

use crate::stats::AggregationTable;
use anyhow::Result;
use std::path::Path;

/// Generate output from a finished statistics table
pub fn generate_report(table: &AggregationTable, format: &str, output_dir: &Path) -> Result<()> {
    let stats = types::DetectionStats::from_table(table);

    match format {
        "svg" => svg::generate(&stats, output_dir),
        "json" => {
            std::fs::create_dir_all(output_dir)?;
            json::generate(&stats, Some(&output_dir.join("stats.json")))
        }
        _ => anyhow::bail!("Unknown format: {}", format),
    }
}
