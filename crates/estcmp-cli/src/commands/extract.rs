//! Extract command - dump one estimate's hierarchy.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use estcmp_core::extract::HierarchyBuilder;
use estcmp_core::models::estimate::Hierarchy;

use super::{load_config, load_lines};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input estimate (PDF or text file)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Indented text listing
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let builder = HierarchyBuilder::with_config(&config.extract);

    let hierarchy = builder.build(load_lines(&args.input)?);
    info!(
        "extracted {} items in {} sections from {}",
        hierarchy.item_count(),
        hierarchy.section_count(),
        args.input.display()
    );

    let output = match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&hierarchy)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => format_text(&hierarchy),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Hierarchy written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn format_text(hierarchy: &Hierarchy) -> String {
    let mut out = String::new();

    for (section, categories) in hierarchy.sections() {
        out.push_str(&format!("{}\n", section));
        for (category, items) in categories {
            out.push_str(&format!("  {}\n", category));
            for item in items {
                out.push_str(&format!(
                    "    {} (cost: {:.2}, area: {:.2})\n",
                    item.raw, item.cost, item.area
                ));
            }
        }
    }

    out
}
