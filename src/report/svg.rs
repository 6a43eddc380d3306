use super::types::DetectionStats;
use anyhow::{Context, Result};
use std::path::Path;

const BAR_WIDTH: i64 = 28;
const BAR_GAP: i64 = 16;
const PLOT_HEIGHT: i64 = 240;
const MARGIN_LEFT: i64 = 50;
const MARGIN_RIGHT: i64 = 20;
const MARGIN_TOP: i64 = 50;
const MARGIN_BOTTOM: i64 = 110;

/// One stacked bar: label, successes, failures
type Bar<'a> = (&'a str, i64, i64);

/// Generate the per-group charts plus the cross-engine overall chart.
///
/// One SVG per (engine, timeout) group, named after the group
/// ("LibDMTX_100ms.svg", "ZXing.svg"); groups without a combined figure are
/// absent from "Overall.svg".
pub fn generate(stats: &DetectionStats, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

    for group in &stats.groups {
        let (title, file_name) = match &group.timeout {
            Some(timeout) => (
                format!(
                    "Detection of Datamatrix Codes with {} (timeout: {})",
                    group.engine, timeout
                ),
                format!("{}_{}.svg", group.engine, timeout),
            ),
            None => (
                format!("Detection of Datamatrix Codes with {}", group.engine),
                format!("{}.svg", group.engine),
            ),
        };

        let bars: Vec<Bar> = group
            .scenarios
            .iter()
            .map(|s| (s.name.as_str(), s.successes, s.failures))
            .collect();

        let path = output_dir.join(&file_name);
        std::fs::write(&path, render_chart(&title, &bars))
            .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    }

    if !stats.overall.is_empty() {
        let bars: Vec<Bar> = stats
            .overall
            .iter()
            .map(|o| (o.group.as_str(), o.successes, o.failures))
            .collect();

        let path = output_dir.join("Overall.svg");
        std::fs::write(&path, render_chart("Detection of Datamatrix Codes Overall", &bars))
            .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    }

    println!("Charts saved to: {}", output_dir.display());
    Ok(())
}

/// Render one stacked bar chart: successes in green at the bottom, failures
/// in red on top, scenario labels rotated below the axis.
fn render_chart(title: &str, bars: &[Bar]) -> String {
    let width = MARGIN_LEFT + bars.len() as i64 * (BAR_WIDTH + BAR_GAP) + MARGIN_RIGHT;
    let height = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + PLOT_HEIGHT;

    // Negative counts indicate corrupt input; they stay in the data but a
    // bar segment cannot have negative height.
    let max_total = bars
        .iter()
        .map(|(_, successes, failures)| successes.max(&0) + failures.max(&0))
        .max()
        .unwrap_or(0)
        .max(1);
    let scale = PLOT_HEIGHT as f64 / max_total as f64;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    ));
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="white"/>"#,
    ));
    svg.push_str(&format!(
        r#"<text x="{x}" y="28" font-size="14" text-anchor="middle" font-family="sans-serif">{title}</text>"#,
        x = width / 2,
        title = xml_escape(title),
    ));

    // axes
    svg.push_str(&format!(
        r#"<line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = baseline,
    ));
    svg.push_str(&format!(
        r#"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        b = baseline,
        r = width - MARGIN_RIGHT,
    ));
    svg.push_str(&format!(
        r#"<text x="{x}" y="{y}" font-size="11" text-anchor="end" font-family="sans-serif">{max_total}</text>"#,
        x = MARGIN_LEFT - 6,
        y = MARGIN_TOP + 4,
    ));
    svg.push_str(&format!(
        r#"<text x="{x}" y="{y}" font-size="11" text-anchor="end" font-family="sans-serif">0</text>"#,
        x = MARGIN_LEFT - 6,
        y = baseline + 4,
    ));

    for (i, (label, successes, failures)) in bars.iter().enumerate() {
        let x = MARGIN_LEFT + BAR_GAP / 2 + i as i64 * (BAR_WIDTH + BAR_GAP);
        let success_height = (*successes).max(0) as f64 * scale;
        let failure_height = (*failures).max(0) as f64 * scale;

        let success_y = baseline as f64 - success_height;
        let failure_y = success_y - failure_height;

        svg.push_str(&format!(
            r#"<rect x="{x}" y="{y:.1}" width="{w}" height="{h:.1}" fill="green"/>"#,
            y = success_y,
            w = BAR_WIDTH,
            h = success_height,
        ));
        svg.push_str(&format!(
            r#"<rect x="{x}" y="{y:.1}" width="{w}" height="{h:.1}" fill="red"/>"#,
            y = failure_y,
            w = BAR_WIDTH,
            h = failure_height,
        ));
        svg.push_str(&format!(
            r#"<text x="{tx}" y="{ty}" font-size="11" font-family="sans-serif" transform="rotate(90 {tx} {ty})">{label}</text>"#,
            tx = x + BAR_WIDTH / 2 + 4,
            ty = baseline + 8,
            label = xml_escape(label),
        ));
    }

    // legend
    let legend_x = width - MARGIN_RIGHT - 110;
    svg.push_str(&format!(
        r#"<rect x="{x}" y="36" width="10" height="10" fill="green"/><text x="{tx}" y="45" font-size="11" font-family="sans-serif">Successes</text>"#,
        x = legend_x,
        tx = legend_x + 14,
    ));
    svg.push_str(&format!(
        r#"<rect x="{x}" y="50" width="10" height="10" fill="red"/><text x="{tx}" y="59" font-size="11" font-family="sans-serif">Failures</text>"#,
        x = legend_x,
        tx = legend_x + 14,
    ));

    svg.push_str("</svg>\n");
    svg
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_chart_contains_bars_and_labels() {
        let bars = vec![("DMX001", 8, 2), ("DMX002", 5, 0)];
        let svg = render_chart("Detection of Datamatrix Codes with ZXing", &bars);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Detection of Datamatrix Codes with ZXing"));
        assert!(svg.contains(r#"fill="green""#));
        assert!(svg.contains(r#"fill="red""#));
        assert!(svg.contains("DMX001"));
        assert!(svg.contains("DMX002"));
    }

    #[test]
    fn test_render_chart_escapes_labels() {
        let bars = vec![("a<b>&\"c\"", 1, 0)];
        let svg = render_chart("t", &bars);
        assert!(svg.contains("a&lt;b&gt;&amp;&quot;c&quot;"));
        assert!(!svg.contains("a<b>"));
    }

    #[test]
    fn test_render_chart_handles_empty_and_negative_input() {
        // no bars at all
        let svg = render_chart("empty", &[]);
        assert!(svg.starts_with("<svg"));

        // negative failure count from corrupt input must not break rendering
        let svg = render_chart("bad", &[("Overall", 50, -3)]);
        assert!(svg.contains("Overall"));
        assert!(!svg.contains("height=\"-"));
    }
}
