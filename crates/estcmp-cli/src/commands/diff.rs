//! Diff command - per-group textual diffs between two estimates.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use estcmp_core::compare::diff_outlines_labeled;
use estcmp_core::extract::FlatOutlineBuilder;

use super::load_lines;

/// Arguments for the diff command.
#[derive(Args)]
pub struct DiffArgs {
    /// Left-side estimate (PDF or text file)
    #[arg(required = true)]
    left: PathBuf,

    /// Right-side estimate (PDF or text file)
    #[arg(required = true)]
    right: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable colored terminal output
    #[arg(long)]
    no_color: bool,
}

pub fn run(args: DiffArgs) -> anyhow::Result<()> {
    let builder = FlatOutlineBuilder::new();
    let left = builder.build(load_lines(&args.left)?);
    let right = builder.build(load_lines(&args.right)?);

    let left_label = args.left.display().to_string();
    let right_label = args.right.display().to_string();
    let report = diff_outlines_labeled(&left, &right, &left_label, &right_label);

    if report.is_empty() {
        println!("{} No differences found.", style("✓").green());
        return Ok(());
    }

    if let Some(output_path) = &args.output {
        fs::write(output_path, report.to_text())?;
        println!(
            "{} Diff written to {}",
            style("✓").green(),
            output_path.display()
        );
        return Ok(());
    }

    for block in report.blocks() {
        println!("=== {} ===", style(&block.category).bold());
        for line in &block.lines {
            if args.no_color {
                println!("{}", line);
            } else if line.starts_with('+') {
                println!("{}", style(line).green());
            } else if line.starts_with('-') {
                println!("{}", style(line).red());
            } else {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
