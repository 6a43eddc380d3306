use super::table::{AggregationTable, Counts, Engine, TimeoutLabel};

/// The combined found/failed figure for one (engine, timeout) group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallEntry {
    pub engine: Engine,
    pub timeout: Option<TimeoutLabel>,
    pub counts: Counts,
}

impl OverallEntry {
    /// Group label for the cross-engine chart, e.g. "LibDMTX_100ms"
    pub fn group_label(&self) -> String {
        match self.timeout {
            Some(timeout) => format!("{}_{}", self.engine.label(), timeout.label()),
            None => self.engine.label().to_string(),
        }
    }
}

/// Collect the per-group combined figures from a populated table.
///
/// A group's overall comes from the suite's own summary assertion, recorded
/// under the reserved "Overall" key during the walk. Groups without one are
/// left out rather than summed from visible scenarios: the suite may exclude
/// scenarios from display, so a synthesized total could disagree with the
/// authoritative one.
pub fn compute_overalls(table: &AggregationTable) -> Vec<OverallEntry> {
    table
        .groups()
        .filter_map(|(engine, timeout, group)| {
            group.overall().map(|counts| OverallEntry {
                engine,
                timeout,
                counts,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::table::OVERALL_KEY;

    #[test]
    fn test_sentinel_entry_is_used_directly() {
        let mut table = AggregationTable::default();
        table.insert(
            Engine::Combined,
            Some(TimeoutLabel::Ms0),
            "DMX001",
            Counts {
                successes: 1,
                failures: 0,
            },
        );
        table.insert(
            Engine::Combined,
            Some(TimeoutLabel::Ms0),
            OVERALL_KEY,
            Counts {
                successes: 47,
                failures: 3,
            },
        );

        let overalls = compute_overalls(&table);
        assert_eq!(overalls.len(), 1);
        assert_eq!(overalls[0].engine, Engine::Combined);
        assert_eq!(overalls[0].timeout, Some(TimeoutLabel::Ms0));
        assert_eq!(
            overalls[0].counts,
            Counts {
                successes: 47,
                failures: 3
            }
        );
        assert_eq!(overalls[0].group_label(), "Combined_0ms");
    }

    #[test]
    fn test_group_without_sentinel_is_omitted_not_summed() {
        let mut table = AggregationTable::default();
        table.insert(
            Engine::ZXing,
            None,
            "DMX001",
            Counts {
                successes: 5,
                failures: 5,
            },
        );
        table.insert(
            Engine::ZXing,
            None,
            "DMX002",
            Counts {
                successes: 2,
                failures: 0,
            },
        );

        assert!(compute_overalls(&table).is_empty());
    }
}
