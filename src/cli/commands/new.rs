//! `mvd new` command - Create a vehicle from the listing form fields
//!
//! The flag set mirrors the listing form field-for-field: basic
//! information, reach metrics, pricing with a single rate-card row, and
//! the two specification fields. `--interactive` walks the same fields as
//! prompts.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{parse_media_type, split_labels, truncate_str};
use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::draft::VehicleDraft;
use crate::core::project::Project;
use crate::core::store::save_vehicle;
use crate::entities::pricing::{PricingInfo, RateCardItem};
use crate::entities::reach::ReachMetrics;
use crate::entities::specs::MediaSpecifications;
use crate::entities::vehicle::MediaType;

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    // ========== BASIC INFORMATION ==========
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Media type (TV/RADIO/DIGITAL/PRINT/OOH)
    #[arg(long, short = 't')]
    pub r#type: Option<String>,

    /// Free-text description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Whether the vehicle is offered (default: true)
    #[arg(long)]
    pub active: Option<bool>,

    // ========== REACH METRICS ==========
    /// Estimated people reached per placement
    #[arg(long)]
    pub average_reach: Option<u64>,

    /// Target audience labels (comma-separated)
    #[arg(long)]
    pub target_audience: Option<String>,

    /// Geographic coverage labels (comma-separated)
    #[arg(long)]
    pub geographic_coverage: Option<String>,

    /// Primary demographic label
    #[arg(long)]
    pub primary_demographic: Option<String>,

    /// Secondary demographic label
    #[arg(long)]
    pub secondary_demographic: Option<String>,

    // ========== PRICING ==========
    /// Base rate per minimum booking period
    #[arg(long)]
    pub base_rate: Option<f64>,

    /// ISO currency code
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Minimum booking period in days
    #[arg(long, default_value = "1")]
    pub minimum_booking_period: u32,

    /// Rate card entry duration (e.g. "30s")
    #[arg(long)]
    pub duration: Option<String>,

    /// Rate card entry price
    #[arg(long)]
    pub price: Option<f64>,

    // ========== SPECIFICATIONS ==========
    /// Creative format (e.g. "HD Video")
    #[arg(long)]
    pub spec_format: Option<String>,

    /// Spot duration in seconds
    #[arg(long)]
    pub spec_duration: Option<u32>,

    // ========== MODE ==========
    /// Prompt for each field instead of reading flags
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Open in editor after creation
    #[arg(long, short = 'e')]
    pub edit: bool,

    /// Don't open in editor after creation
    #[arg(long)]
    pub no_edit: bool,
}

pub fn run(args: NewArgs, _global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let config = Config::load();

    let draft = if args.interactive {
        collect_interactive()?
    } else {
        draft_from_args(&args)?
    };

    let errors = draft.validate();
    if !errors.is_empty() {
        return Err(miette::miette!("Invalid vehicle: {}", errors.join(", ")));
    }

    let vehicle = draft.promote().map_err(|e| miette::miette!("{}", e))?;
    let file_path = save_vehicle(&project, &vehicle)?;

    println!(
        "{} Created vehicle {} - {}",
        style("✓").green(),
        style(vehicle.id.to_string()).cyan(),
        truncate_str(&vehicle.name, 40)
    );
    println!("   {}", style(file_path.display()).dim());

    // Open in editor if requested (or by default unless --no-edit)
    if args.edit || (!args.no_edit && !args.interactive) {
        let editor = config.editor();
        println!();
        println!("Opening in {}...", style(&editor).yellow());
        config.run_editor(&file_path).into_diagnostic()?;
    }

    Ok(())
}

fn draft_from_args(args: &NewArgs) -> Result<VehicleDraft> {
    let media_type = match &args.r#type {
        Some(value) => Some(parse_media_type(value)?),
        None => None,
    };

    let reach = args.average_reach.map(|average_reach| ReachMetrics {
        average_reach,
        target_audience: args
            .target_audience
            .as_deref()
            .map(split_labels)
            .unwrap_or_default(),
        geographic_coverage: args
            .geographic_coverage
            .as_deref()
            .map(split_labels)
            .unwrap_or_default(),
        primary_demographic: args.primary_demographic.clone().unwrap_or_default(),
        secondary_demographic: args.secondary_demographic.clone().unwrap_or_default(),
        ..Default::default()
    });

    let pricing = args.base_rate.map(|base_rate| PricingInfo {
        base_rate,
        currency: args.currency.clone(),
        minimum_booking_period: args.minimum_booking_period,
        rate_card: match (&args.duration, args.price) {
            (Some(duration), Some(price)) => vec![RateCardItem {
                duration: duration.clone(),
                price,
                time_slot: None,
                position: None,
                premium: false,
            }],
            _ => Vec::new(),
        },
        ..Default::default()
    });

    let specifications =
        if args.spec_format.is_some() || args.spec_duration.is_some() {
            Some(MediaSpecifications {
                format: args.spec_format.clone().unwrap_or_default(),
                duration: args.spec_duration,
                ..Default::default()
            })
        } else {
            None
        };

    Ok(VehicleDraft {
        name: args.name.clone(),
        media_type,
        description: args.description.clone(),
        active: args.active,
        reach,
        pricing,
        specifications,
        time_slots: None,
    })
}

fn collect_interactive() -> Result<VehicleDraft> {
    let theme = ColorfulTheme::default();

    println!();
    println!("{} Creating new media vehicle", style("◆").cyan());
    println!("{}", style("─".repeat(50)).dim());
    println!();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Name")
        .interact_text()
        .into_diagnostic()?;

    let type_labels: Vec<&str> = MediaType::all().iter().map(|t| t.as_str()).collect();
    let type_index = Select::with_theme(&theme)
        .with_prompt("Type")
        .items(&type_labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    let media_type = MediaType::all()[type_index];

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .interact_text()
        .into_diagnostic()?;

    let active = Confirm::with_theme(&theme)
        .with_prompt("Active")
        .default(true)
        .interact()
        .into_diagnostic()?;

    let average_reach: u64 = Input::with_theme(&theme)
        .with_prompt("Average reach")
        .interact_text()
        .into_diagnostic()?;

    let target_audience: String = Input::with_theme(&theme)
        .with_prompt("Target audience (comma-separated)")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    let geographic_coverage: String = Input::with_theme(&theme)
        .with_prompt("Geographic coverage (comma-separated)")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    let primary_demographic: String = Input::with_theme(&theme)
        .with_prompt("Primary demographic")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    let secondary_demographic: String = Input::with_theme(&theme)
        .with_prompt("Secondary demographic")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    let base_rate: f64 = Input::with_theme(&theme)
        .with_prompt("Base rate")
        .interact_text()
        .into_diagnostic()?;

    let currency: String = Input::with_theme(&theme)
        .with_prompt("Currency")
        .default("USD".to_string())
        .interact_text()
        .into_diagnostic()?;

    let minimum_booking_period: u32 = Input::with_theme(&theme)
        .with_prompt("Minimum booking period (days)")
        .default(1)
        .interact_text()
        .into_diagnostic()?;

    let spec_format: String = Input::with_theme(&theme)
        .with_prompt("Format")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    println!();
    println!("{} Values collected!", style("✓").green());

    Ok(VehicleDraft {
        name: Some(name),
        media_type: Some(media_type),
        description: Some(description),
        active: Some(active),
        reach: Some(ReachMetrics {
            average_reach,
            target_audience: split_labels(&target_audience),
            geographic_coverage: split_labels(&geographic_coverage),
            primary_demographic,
            secondary_demographic,
            ..Default::default()
        }),
        pricing: Some(PricingInfo {
            base_rate,
            currency,
            minimum_booking_period,
            ..Default::default()
        }),
        specifications: if spec_format.is_empty() {
            None
        } else {
            Some(MediaSpecifications {
                format: spec_format,
                ..Default::default()
            })
        },
        time_slots: None,
    })
}
