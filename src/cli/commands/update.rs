//! `mvd update` command - Apply field changes and record a version entry
//!
//! Loads the stored record, applies the given flags to a working copy,
//! and folds the copy back through the version-diff builder so every
//! change lands in the vehicle's history.

use console::style;
use miette::Result;

use crate::cli::helpers::{parse_media_type, split_labels};
use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::project::Project;
use crate::core::store::{load_vehicle, save_vehicle};
use crate::core::version::commit_update;

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Vehicle ID or ID prefix
    pub id: String,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New media type (TV/RADIO/DIGITAL/PRINT/OOH)
    #[arg(long, short = 't')]
    pub r#type: Option<String>,

    /// New description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// New lifecycle flag
    #[arg(long)]
    pub active: Option<bool>,

    /// New average reach
    #[arg(long)]
    pub average_reach: Option<u64>,

    /// Replace target audience labels (comma-separated)
    #[arg(long)]
    pub target_audience: Option<String>,

    /// Replace geographic coverage labels (comma-separated)
    #[arg(long)]
    pub geographic_coverage: Option<String>,

    /// New base rate
    #[arg(long)]
    pub base_rate: Option<f64>,

    /// New currency code
    #[arg(long)]
    pub currency: Option<String>,

    /// New minimum booking period in days
    #[arg(long)]
    pub minimum_booking_period: Option<u32>,

    /// Record the change under this actor (default: configured author)
    #[arg(long)]
    pub by: Option<String>,
}

pub fn run(args: UpdateArgs, _global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let config = Config::load();

    let Some((_, stored)) = load_vehicle(&project, &args.id)? else {
        return Err(miette::miette!("No vehicle found matching '{}'", args.id));
    };

    let mut edited = stored.clone();

    if let Some(name) = &args.name {
        edited.name = name.clone();
    }
    if let Some(value) = &args.r#type {
        edited.media_type = parse_media_type(value)?;
    }
    if let Some(description) = &args.description {
        edited.description = description.clone();
    }
    if let Some(active) = args.active {
        edited.active = active;
    }
    if let Some(average_reach) = args.average_reach {
        edited.reach.average_reach = average_reach;
    }
    if let Some(labels) = &args.target_audience {
        edited.reach.target_audience = split_labels(labels);
    }
    if let Some(labels) = &args.geographic_coverage {
        edited.reach.geographic_coverage = split_labels(labels);
    }
    if let Some(base_rate) = args.base_rate {
        edited.pricing.base_rate = base_rate;
    }
    if let Some(currency) = &args.currency {
        edited.pricing.currency = currency.clone();
    }
    if let Some(period) = args.minimum_booking_period {
        edited.pricing.minimum_booking_period = period;
    }

    let modified_by = args.by.clone().or_else(|| Some(config.author()));
    let outcome = commit_update(&stored, edited, modified_by);

    match outcome.entry {
        Some(entry) => {
            save_vehicle(&project, &outcome.vehicle)?;
            println!(
                "{} Updated {} to version {} ({} change(s))",
                style("✓").green(),
                style(outcome.vehicle.id.to_string()).cyan(),
                style(entry.version).cyan(),
                entry.changes.len()
            );
            for change in &entry.changes {
                println!("   {} {}", style("·").dim(), change.field);
            }
        }
        None => {
            println!("{} No changes detected; nothing recorded.", style("○").dim());
        }
    }

    Ok(())
}
