pub mod catch2;
pub mod types;

pub use catch2::{parse_report, parse_report_file, StructuralParseError};
pub use types::{OverallResult, SectionNode, TestCaseRecord, TestReport};
