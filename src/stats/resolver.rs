use super::expression::{parse_expanded, ResolvedCount};
use crate::parser::types::SectionNode;

/// Scenario sections are named after the sample images, all "DMX"-prefixed
const SCENARIO_PREFIX: &str = "DMX";

/// Resolve one section subtree to a name/count triple.
///
/// Structured counters are authoritative: the first descendant (pre-order,
/// any depth) whose name starts with "DMX" and that carries counters wins,
/// wherever assertion text sits in the document. Only a subtree with no such
/// node falls back to the expanded-expression parse, again pre-order with the
/// root included, first successful parse wins. A subtree with neither
/// resolves to nothing and the caller skips it; plenty of sections are pure
/// grouping nodes.
pub fn resolve_section(section: &SectionNode) -> Option<ResolvedCount> {
    if let Some(resolved) = find_scenario_counters(section) {
        return Some(resolved);
    }
    find_expression(section)
}

fn find_scenario_counters(section: &SectionNode) -> Option<ResolvedCount> {
    for child in &section.children {
        if child.name.starts_with(SCENARIO_PREFIX) {
            if let Some(overall) = &child.overall_result {
                return Some(ResolvedCount {
                    name: child.name.clone(),
                    successes: overall.successes,
                    failures: overall.failures,
                });
            }
        }
        if let Some(resolved) = find_scenario_counters(child) {
            return Some(resolved);
        }
    }
    None
}

fn find_expression(section: &SectionNode) -> Option<ResolvedCount> {
    if let Some(text) = &section.expression {
        if let Some(resolved) = parse_expanded(text) {
            return Some(resolved);
        }
    }
    section.children.iter().find_map(find_expression)
}
