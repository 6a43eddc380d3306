pub mod parser;
pub mod report;
pub mod stats;

// Re-export common items
pub use parser::parse_report_file;
pub use report::generate_report;
pub use stats::collect_stats;
