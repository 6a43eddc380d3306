use crate::stats::{compute_overalls, AggregationTable};
use serde::Serialize;

/// Snapshot of the finished statistics, shaped for report output.
///
/// Plain nested data with no behavior, so output code can treat it as an
/// immutable view of the pipeline result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionStats {
    pub generated_at: String,
    pub groups: Vec<GroupStats>,
    pub overall: Vec<OverallStats>,
}

/// One (engine, timeout) group and its per-scenario tallies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    pub scenarios: Vec<ScenarioStats>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioStats {
    pub name: String,
    pub successes: i64,
    pub failures: i64,
}

/// Combined figure for one group, shown on the cross-engine chart
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub group: String,
    pub successes: i64,
    pub failures: i64,
}

impl DetectionStats {
    pub fn from_table(table: &AggregationTable) -> Self {
        let groups = table
            .groups()
            .map(|(engine, timeout, group)| GroupStats {
                engine: engine.label().to_string(),
                timeout: timeout.map(|t| t.label().to_string()),
                scenarios: group
                    .scenarios()
                    .map(|(name, counts)| ScenarioStats {
                        name: name.to_string(),
                        successes: counts.successes,
                        failures: counts.failures,
                    })
                    .collect(),
            })
            .collect();

        let overall = compute_overalls(table)
            .iter()
            .map(|entry| OverallStats {
                group: entry.group_label(),
                successes: entry.counts.successes,
                failures: entry.counts.failures,
            })
            .collect();

        DetectionStats {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            groups,
            overall,
        }
    }
}
