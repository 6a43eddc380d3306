use super::types::DetectionStats;
use anyhow::Result;
use std::path::Path;

/// Generate JSON report
pub fn generate(stats: &DetectionStats, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;

    if let Some(path) = output {
        std::fs::write(path, json)?;
        println!("JSON report saved to: {}", path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}
