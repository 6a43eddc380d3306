/// A parsed Catch2 XML report: the top-level test cases in document order
#[derive(Debug, Clone, Default)]
pub struct TestReport {
    pub test_cases: Vec<TestCaseRecord>,
}

/// One `<TestCase>` element and its section forest
#[derive(Debug, Clone)]
pub struct TestCaseRecord {
    pub name: String,
    pub sections: Vec<SectionNode>,
}

/// One `<Section>` element.
///
/// A section may carry structured counters (`<OverallResults>`), the expanded
/// text of an assertion (`<Expression>/<Expanded>`), both, or neither.
/// Pure grouping sections carry neither.
#[derive(Debug, Clone, Default)]
pub struct SectionNode {
    pub name: String,
    pub children: Vec<SectionNode>,
    pub overall_result: Option<OverallResult>,
    pub expression: Option<String>,
}

/// Success/failure counters from an `<OverallResults>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallResult {
    pub successes: i64,
    pub failures: i64,
}
