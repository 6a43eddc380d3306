use super::resolver::resolve_section;
use super::table::{AggregationTable, Counts, Engine, TimeoutLabel};
use crate::parser::types::TestReport;
use log::debug;

/// Walk a parsed report and build the statistics table.
///
/// Test cases are classified by the engine identifier in their name;
/// unrecognized cases are skipped. For the timeout-sensitive engines each
/// direct "timeout" child section is bucketed by its label before resolving;
/// a section naming no known bucket is skipped. ZXing has no timeout axis and
/// every direct child section is resolved as-is. Per-record resolution
/// failures never abort the walk, partial statistics are still useful.
pub fn collect_stats(report: &TestReport) -> AggregationTable {
    let mut table = AggregationTable::default();

    for test_case in &report.test_cases {
        let Some(engine) = Engine::classify(&test_case.name) else {
            debug!("Skipping unrecognized test case: {}", test_case.name);
            continue;
        };

        for section in &test_case.sections {
            let timeout = if engine.timeout_sensitive() {
                if !section.name.contains("timeout") {
                    continue;
                }
                match TimeoutLabel::detect(&section.name) {
                    Some(timeout) => Some(timeout),
                    None => {
                        debug!(
                            "Skipping section with unknown timeout bucket: {}",
                            section.name
                        );
                        continue;
                    }
                }
            } else {
                None
            };

            if let Some(resolved) = resolve_section(section) {
                table.insert(
                    engine,
                    timeout,
                    &resolved.name,
                    Counts {
                        successes: resolved.successes,
                        failures: resolved.failures,
                    },
                );
            }
        }
    }

    table
}
