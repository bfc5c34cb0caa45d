//! Compare command - numeric reconciliation of two estimates.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use estcmp_core::compare::reconcile;
use estcmp_core::extract::HierarchyBuilder;
use estcmp_core::models::report::ComparisonReport;

use super::{load_config, load_lines};

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Left-side estimate (PDF or text file)
    #[arg(required = true)]
    left: PathBuf,

    /// Right-side estimate (PDF or text file)
    #[arg(required = true)]
    right: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Sort rows by section, category, and item
    #[arg(long)]
    sort: bool,

    /// Only show rows where cost or area changed
    #[arg(long)]
    changed_only: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// CSV output
    Csv,
    /// JSON output
    Json,
}

pub fn run(args: CompareArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let builder = HierarchyBuilder::with_config(&config.extract);

    let left = builder.build(load_lines(&args.left)?);
    let right = builder.build(load_lines(&args.right)?);

    info!(
        "left: {} items in {} sections; right: {} items in {} sections",
        left.item_count(),
        left.section_count(),
        right.item_count(),
        right.section_count()
    );

    let mut report = reconcile(&left, &right);
    if args.changed_only {
        report = report.changed_only();
    }
    if args.sort {
        report = report.sorted();
    }

    let output = match args.format {
        OutputFormat::Table => format_table(&report),
        OutputFormat::Csv => report.to_csv()?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report.rows())?;
            json.push('\n');
            json
        }
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Render the report as an aligned text table with the fixed column set.
fn format_table(report: &ComparisonReport) -> String {
    let cells: Vec<[String; 9]> = report
        .rows()
        .iter()
        .map(|row| {
            [
                row.section.clone(),
                row.category.clone(),
                row.item.clone(),
                format!("{:.2}", row.cost_left),
                format!("{:.2}", row.cost_right),
                format!("{:.2}", row.cost_delta),
                format!("{:.2}", row.area_left),
                format!("{:.2}", row.area_right),
                format!("{:.2}", row.area_delta),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = ComparisonReport::COLUMNS.iter().map(|c| c.len()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = ComparisonReport::COLUMNS
        .iter()
        .zip(&widths)
        .map(|(col, &width)| format!("{col:<width$}"))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}
