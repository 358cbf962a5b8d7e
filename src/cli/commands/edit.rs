//! `mvd edit` command - Edit a vehicle file, recording a version entry
//!
//! The pre-edit record is snapshotted before the editor runs; whatever
//! the user changed is folded back through the version-diff builder, so
//! hand edits get the same history treatment as `mvd update`.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;

use crate::core::config::Config;
use crate::core::project::Project;
use crate::core::store::{load_vehicle, save_vehicle};
use crate::core::version::commit_update;
use crate::entities::vehicle::MediaVehicle;

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Vehicle ID or ID prefix
    pub id: String,

    /// Record the change under this actor (default: configured author)
    #[arg(long)]
    pub by: Option<String>,
}

pub fn run(args: EditArgs) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let config = Config::load();

    let Some((path, before)) = load_vehicle(&project, &args.id)? else {
        return Err(miette::miette!("No vehicle found matching '{}'", args.id));
    };

    let status = config.run_editor(&path).into_diagnostic()?;
    if !status.success() {
        return Err(miette::miette!("Editor exited with an error; file left as-is"));
    }

    let content = fs::read_to_string(&path).into_diagnostic()?;
    let edited: MediaVehicle = serde_yml::from_str(&content)
        .map_err(|e| miette::miette!("Edited file no longer parses: {}", e))?;

    let modified_by = args.by.clone().or_else(|| Some(config.author()));
    let outcome = commit_update(&before, edited, modified_by);

    match outcome.entry {
        Some(entry) => {
            save_vehicle(&project, &outcome.vehicle)?;
            println!(
                "{} Recorded version {} for {} ({} change(s))",
                style("✓").green(),
                style(entry.version).cyan(),
                style(outcome.vehicle.id.to_string()).cyan(),
                entry.changes.len()
            );
        }
        None => {
            println!("{} No changes detected.", style("○").dim());
        }
    }

    Ok(())
}
