use super::types::{OverallResult, SectionNode, TestCaseRecord, TestReport};
use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;
use thiserror::Error;

/// The input cannot be read as an XML tree at all. The only fatal condition
/// in the pipeline; everything below the top-level structure degrades to
/// missing data instead.
#[derive(Debug, Error)]
pub enum StructuralParseError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("no root element found")]
    NoRootElement,
}

/// Parse a Catch2 XML report file into a TestReport
pub fn parse_report_file(path: &Path) -> Result<TestReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    parse_report(&content).with_context(|| format!("Failed to parse report: {}", path.display()))
}

/// Parse Catch2 XML content into a TestReport.
///
/// Recognized elements are `<TestCase name>`, `<Section name>`,
/// `<OverallResults successes failures>` (a missing attribute counts as 0)
/// and the `<Expanded>` text inside `<Expression>`, which is attached to the
/// nearest enclosing section. Everything else is ignored.
pub fn parse_report(xml: &str) -> Result<TestReport, StructuralParseError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut report = TestReport::default();
    let mut current_case: Option<TestCaseRecord> = None;
    let mut section_stack: Vec<SectionNode> = Vec::new();
    let mut in_expression = false;
    let mut in_expanded = false;
    let mut saw_element = false;

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                saw_element = true;
                match e.name().as_ref() {
                    b"TestCase" => {
                        current_case = Some(TestCaseRecord {
                            name: attribute(e, b"name").unwrap_or_default(),
                            sections: Vec::new(),
                        });
                    }
                    b"Section" => {
                        section_stack.push(SectionNode {
                            name: attribute(e, b"name").unwrap_or_default(),
                            ..SectionNode::default()
                        });
                    }
                    b"OverallResults" => {
                        attach_overall_results(e, &mut section_stack);
                    }
                    b"Expression" => in_expression = true,
                    b"Expanded" if in_expression => in_expanded = true,
                    _ => {}
                }
            }
            Event::Empty(ref e) => {
                saw_element = true;
                if e.name().as_ref() == b"OverallResults" {
                    attach_overall_results(e, &mut section_stack);
                }
            }
            Event::Text(ref e) => {
                if in_expanded {
                    if let (Ok(text), Some(section)) = (e.unescape(), section_stack.last_mut()) {
                        // Only the first expanded assertion of a section counts
                        if section.expression.is_none() {
                            section.expression = Some(text.trim().to_string());
                        }
                    }
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"TestCase" => {
                    if let Some(case) = current_case.take() {
                        report.test_cases.push(case);
                    }
                }
                b"Section" => {
                    if let Some(section) = section_stack.pop() {
                        if let Some(parent) = section_stack.last_mut() {
                            parent.children.push(section);
                        } else if let Some(case) = current_case.as_mut() {
                            case.sections.push(section);
                        }
                    }
                }
                b"Expression" => in_expression = false,
                b"Expanded" => in_expanded = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_element {
        return Err(StructuralParseError::NoRootElement);
    }

    Ok(report)
}

fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

fn attach_overall_results(e: &BytesStart, section_stack: &mut [SectionNode]) {
    let counter = |key: &[u8]| -> i64 {
        attribute(e, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };

    if let Some(section) = section_stack.last_mut() {
        section.overall_result = Some(OverallResult {
            successes: counter(b"successes"),
            failures: counter(b"failures"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_sections() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<Catch2TestRun name="tests">
  <TestCase name="LibDMTX Decoding">
    <Section name="100ms timeout">
      <Section name="Single">
        <Section name="DMX001">
          <OverallResults successes="8" failures="2" expectedFailures="0"/>
        </Section>
        <OverallResults successes="8" failures="2"/>
      </Section>
      <OverallResults successes="8" failures="2"/>
    </Section>
    <OverallResult success="true"/>
  </TestCase>
</Catch2TestRun>"#;

        let report = parse_report(xml).unwrap();
        assert_eq!(report.test_cases.len(), 1);

        let case = &report.test_cases[0];
        assert_eq!(case.name, "LibDMTX Decoding");
        assert_eq!(case.sections.len(), 1);

        let timeout = &case.sections[0];
        assert_eq!(timeout.name, "100ms timeout");
        assert_eq!(timeout.children.len(), 1);
        assert_eq!(timeout.children[0].name, "Single");

        let leaf = &timeout.children[0].children[0];
        assert_eq!(leaf.name, "DMX001");
        assert_eq!(
            leaf.overall_result,
            Some(OverallResult {
                successes: 8,
                failures: 2
            })
        );
    }

    #[test]
    fn test_parse_expression_text() {
        let xml = r#"<Catch2TestRun>
  <TestCase name="ZXing Decoding">
    <Section name="Overall">
      <Expression success="false" type="REQUIRE" filename="test.cpp" line="113">
        <Original>foundTotal == totalCodes</Original>
        <Expanded>47 == 50</Expanded>
      </Expression>
      <OverallResults successes="0" failures="1"/>
    </Section>
  </TestCase>
</Catch2TestRun>"#;

        let report = parse_report(xml).unwrap();
        let section = &report.test_cases[0].sections[0];
        assert_eq!(section.expression.as_deref(), Some("47 == 50"));
    }

    #[test]
    fn test_missing_counter_attributes_default_to_zero() {
        let xml = r#"<Catch2TestRun>
  <TestCase name="ZXing Decoding">
    <Section name="DMX002">
      <OverallResults successes="3"/>
    </Section>
  </TestCase>
</Catch2TestRun>"#;

        let report = parse_report(xml).unwrap();
        let section = &report.test_cases[0].sections[0];
        assert_eq!(
            section.overall_result,
            Some(OverallResult {
                successes: 3,
                failures: 0
            })
        );
    }

    #[test]
    fn test_not_xml_is_fatal() {
        assert!(parse_report("this is not a report").is_err());
        assert!(parse_report("").is_err());
    }

    #[test]
    fn test_mismatched_tags_are_fatal() {
        assert!(parse_report("<Catch2TestRun><TestCase></Section></Catch2TestRun>").is_err());
    }
}
