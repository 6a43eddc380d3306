use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use dmx_stats::{parser, report, stats};

#[derive(Parser)]
#[command(name = "dmx-stats")]
#[command(version = "0.1.0")]
#[command(about = "Statistics and charts for Data Matrix detection benchmark reports", long_about = None)]
struct Cli {
    /// Path to the Catch2 XML report
    xml_file: PathBuf,

    /// Output directory for charts and reports
    #[arg(short, long, default_value = "./plots")]
    output: PathBuf,

    /// Output format (svg, json)
    #[arg(short, long, default_value = "svg")]
    format: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!(
        "{} Reading report: {}",
        "▶".green().bold(),
        cli.xml_file.display()
    );

    let test_report = parser::parse_report_file(&cli.xml_file)?;
    let table = stats::collect_stats(&test_report);

    println!(
        "  Test cases: {}",
        test_report.test_cases.len().to_string().cyan()
    );
    println!("  Groups: {}", table.len().to_string().cyan());
    println!("  Format: {}", cli.format.cyan());
    println!("  Output: {}", cli.output.display().to_string().cyan());

    report::generate_report(&table, &cli.format, &cli.output)?;

    Ok(())
}
