//! `mvd stats` command - Directory statistics dashboard
//!
//! Statistics always cover the whole directory; they are not affected by
//! any list filters.

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::project::Project;
use crate::core::query::directory_stats;
use crate::core::store::load_all;

#[derive(clap::Args, Debug)]
pub struct StatsArgs {}

pub fn run(_args: StatsArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let vehicles = load_all(&project);
    let stats = directory_stats(&vehicles);

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&stats).into_diagnostic()?);
        }
        _ => {
            println!("{}", style("Media Vehicle Directory").bold().underlined());
            println!("{}", "═".repeat(40));
            println!();
            println!("  Total vehicles:  {}", style(stats.total).cyan());
            println!("  Active:          {}", style(stats.active).cyan());
            println!("  Average reach:   {}", style(stats.average_reach).cyan());
            println!("  Average price:   {}", style(stats.average_price).cyan());
            println!();

            if !stats.type_distribution.is_empty() {
                println!("  {}", style("By type").bold());
                for (media_type, count) in &stats.type_distribution {
                    println!("    {:<8} {}", media_type.as_str(), style(count).cyan());
                }
            }
        }
    }

    Ok(())
}
