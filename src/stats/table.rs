use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Reserved scenario key for a group's combined figure. Fed by the suite's
/// own summary assertion, never shown as a regular scenario bar.
pub const OVERALL_KEY: &str = "Overall";

/// Detection engines benchmarked by the suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Engine {
    LibDmtx,
    Combined,
    ZXing,
}

impl Engine {
    /// Classification and rendering order
    pub const ALL: [Engine; 3] = [Engine::LibDmtx, Engine::Combined, Engine::ZXing];

    pub fn label(&self) -> &'static str {
        match self {
            Engine::LibDmtx => "LibDMTX",
            Engine::Combined => "Combined",
            Engine::ZXing => "ZXing",
        }
    }

    /// Classify a test-case name by engine identifier; first match wins,
    /// anything else is not part of the benchmark.
    pub fn classify(test_case_name: &str) -> Option<Engine> {
        Engine::ALL
            .iter()
            .copied()
            .find(|engine| test_case_name.contains(engine.label()))
    }

    /// LibDMTX and Combined are exercised once per decode timeout; ZXing has
    /// no timeout axis.
    pub fn timeout_sensitive(&self) -> bool {
        matches!(self, Engine::LibDmtx | Engine::Combined)
    }
}

/// Decode time budgets the suite runs the timeout-sensitive engines under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeoutLabel {
    Ms0,
    Ms100,
    Ms200,
}

impl TimeoutLabel {
    pub const ALL: [TimeoutLabel; 3] = [TimeoutLabel::Ms0, TimeoutLabel::Ms100, TimeoutLabel::Ms200];

    pub fn label(&self) -> &'static str {
        match self {
            TimeoutLabel::Ms0 => "0ms",
            TimeoutLabel::Ms100 => "100ms",
            TimeoutLabel::Ms200 => "200ms",
        }
    }

    /// Detect the timeout bucket named in a section title.
    ///
    /// A candidate label preceded by another digit is rejected, so a name
    /// like "150ms timeout" never reads as "0ms"; it matches no bucket and
    /// the section is skipped.
    pub fn detect(section_name: &str) -> Option<TimeoutLabel> {
        TimeoutLabel::ALL.iter().copied().find(|timeout| {
            section_name.match_indices(timeout.label()).any(|(at, _)| {
                !section_name[..at].ends_with(|c: char| c.is_ascii_digit())
            })
        })
    }
}

/// Success/failure tally for one scenario. `failures` is signed: a malformed
/// summary where total < found passes through as a negative count instead of
/// being clamped, keeping upstream data problems visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub successes: i64,
    pub failures: i64,
}

/// Scenario-name to counts mapping for one (engine, timeout) group,
/// iterated in insertion order
#[derive(Debug, Clone, Default)]
pub struct ScenarioCounts {
    entries: Vec<(String, Counts)>,
}

impl ScenarioCounts {
    /// Insert or overwrite one scenario's counts. Overwriting keeps the
    /// scenario's original position.
    pub fn insert(&mut self, name: &str, counts: Counts) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = counts;
        } else {
            self.entries.push((name.to_string(), counts));
        }
    }

    pub fn get(&self, name: &str) -> Option<Counts> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, counts)| *counts)
    }

    /// Per-scenario entries, excluding the reserved "Overall" sentinel
    pub fn scenarios(&self) -> impl Iterator<Item = (&str, Counts)> {
        self.entries
            .iter()
            .filter(|(name, _)| name != OVERALL_KEY)
            .map(|(name, counts)| (name.as_str(), *counts))
    }

    /// The group's combined figure, if the walk recorded one
    pub fn overall(&self) -> Option<Counts> {
        self.get(OVERALL_KEY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ScenarioCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, counts) in &self.entries {
            map.serialize_entry(name, counts)?;
        }
        map.end()
    }
}

/// The canonical nested statistics store: engine, then optional timeout
/// bucket, then scenario name.
///
/// Built during one traversal pass and read-only afterwards. Owned by the
/// pipeline invocation and passed along; there is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct AggregationTable {
    groups: Vec<((Engine, Option<TimeoutLabel>), ScenarioCounts)>,
}

impl AggregationTable {
    /// Insert one resolved count. Last writer wins per
    /// (engine, timeout, scenario) key.
    pub fn insert(
        &mut self,
        engine: Engine,
        timeout: Option<TimeoutLabel>,
        name: &str,
        counts: Counts,
    ) {
        let key = (engine, timeout);
        let group = match self.groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group,
            None => {
                self.groups.push((key, ScenarioCounts::default()));
                &mut self.groups.last_mut().unwrap().1
            }
        };
        group.insert(name, counts);
    }

    /// The scenario mapping for one group; empty if nothing was inserted yet
    pub fn get(&self, engine: Engine, timeout: Option<TimeoutLabel>) -> &ScenarioCounts {
        static EMPTY: ScenarioCounts = ScenarioCounts {
            entries: Vec::new(),
        };
        self.groups
            .iter()
            .find(|(key, _)| *key == (engine, timeout))
            .map(|(_, group)| group)
            .unwrap_or(&EMPTY)
    }

    /// Groups in insertion order
    pub fn groups(
        &self,
    ) -> impl Iterator<Item = (Engine, Option<TimeoutLabel>, &ScenarioCounts)> {
        self.groups
            .iter()
            .map(|((engine, timeout), group)| (*engine, *timeout, group))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
