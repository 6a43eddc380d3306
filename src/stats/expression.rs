use super::table::OVERALL_KEY;
use regex::Regex;

/// The name/count triple one section subtree resolves to. `name` is either a
/// scenario identifier or the reserved "Overall" key when the counts came
/// from an expanded assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCount {
    pub name: String,
    pub successes: i64,
    pub failures: i64,
}

/// Extract a found/total pair from expanded assertion text.
///
/// The suite's summary assertion expands to text like `"47 == 50"`; the first
/// such pair is read as found/total and reported under the reserved
/// "Overall" name. Text without the pattern is a normal miss, not an error:
/// most assertions are not summary comparisons. A total smaller than found
/// yields a negative failure count on purpose, so corrupt input stays visible
/// downstream.
pub fn parse_expanded(text: &str) -> Option<ResolvedCount> {
    let pattern = Regex::new(r"(\d+)\s*==\s*(\d+)").unwrap();
    let captures = pattern.captures(text.trim())?;

    let found: i64 = captures[1].parse().ok()?;
    let total: i64 = captures[2].parse().ok()?;

    Some(ResolvedCount {
        name: OVERALL_KEY.to_string(),
        successes: found,
        failures: total - found,
    })
}
