pub mod expression;
pub mod overall;
pub mod resolver;
pub mod table;
pub mod walker;

pub use expression::{parse_expanded, ResolvedCount};
pub use overall::{compute_overalls, OverallEntry};
pub use resolver::resolve_section;
pub use table::{AggregationTable, Counts, Engine, ScenarioCounts, TimeoutLabel, OVERALL_KEY};
pub use walker::collect_stats;
