//! `mvd history` command - Show a vehicle's version history

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::project::Project;
use crate::core::store::load_vehicle;

#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    /// Vehicle ID or ID prefix
    pub id: String,

    /// Limit to the last N entries
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(args: HistoryArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;

    let Some((_, vehicle)) = load_vehicle(&project, &args.id)? else {
        return Err(miette::miette!("No vehicle found matching '{}'", args.id));
    };

    let entries: Vec<_> = match args.limit {
        Some(n) => vehicle
            .version_history
            .iter()
            .rev()
            .take(n)
            .rev()
            .collect(),
        None => vehicle.version_history.iter().collect(),
    };

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&entries).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            println!(
                "{} {} (version {})",
                style("History for:").bold(),
                style(vehicle.id.to_string()).cyan(),
                vehicle.version
            );
            println!();

            if entries.is_empty() {
                println!("{}", style("No recorded versions yet.").yellow());
                return Ok(());
            }

            for entry in entries {
                let actor = entry.modified_by.as_deref().unwrap_or("unknown");
                println!(
                    "{} {} {} {}",
                    style(format!("v{}", entry.version)).cyan().bold(),
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    style("by").dim(),
                    actor
                );
                for change in &entry.changes {
                    println!(
                        "   {} {}: {} {} {}",
                        style("·").dim(),
                        style(&change.field).bold(),
                        render_value(&change.old_value),
                        style("→").dim(),
                        render_value(&change.new_value)
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Short, single-line rendering of a change-set value
fn render_value(value: &serde_json::Value) -> String {
    let rendered = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if rendered.len() > 40 {
        format!("{}...", &rendered[..37])
    } else {
        rendered
    }
}
