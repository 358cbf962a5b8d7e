//! `mvd list` command - Browse the directory with search and filters

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{escape_csv, parse_media_type, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::project::Project;
use crate::core::query::{RangeFilter, SearchFilters, VehicleQuery};
use crate::core::store::load_all;
use crate::entities::vehicle::MediaVehicle;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    // ========== FILTERING OPTIONS ==========
    // These let users filter without needing awk/grep

    /// Search in name, description and type (case-insensitive substring)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Filter by media type (repeatable, comma-separated)
    #[arg(long, short = 't', value_delimiter = ',')]
    pub r#type: Vec<String>,

    /// Minimum base rate (inclusive)
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum base rate (inclusive)
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum average reach (inclusive)
    #[arg(long)]
    pub min_reach: Option<u64>,

    /// Maximum average reach (inclusive)
    #[arg(long)]
    pub max_reach: Option<u64>,

    /// Target audience label (repeatable; any match qualifies)
    #[arg(long, value_delimiter = ',')]
    pub demographic: Vec<String>,

    /// Coverage label (repeatable; any match qualifies)
    #[arg(long, value_delimiter = ',')]
    pub location: Vec<String>,

    /// Show only active vehicles
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Show only inactive vehicles
    #[arg(long)]
    pub inactive: bool,

    // ========== OUTPUT CONTROL ==========
    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let vehicles = load_all(&project);

    let mut query = VehicleQuery::new();
    if let Some(term) = &args.search {
        query.set_search_term(term.clone());
    }
    query.set_filters(filters_from_args(&args)?);

    let mut results = query.results(&vehicles);
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    if args.count {
        println!("{}", results.len());
        return Ok(());
    }

    if results.is_empty() {
        match global.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Yaml => println!("[]"),
            _ => {
                println!("No vehicles found.");
                println!();
                println!("Create one with: {}", style("mvd new").yellow());
            }
        }
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv, // Default to TSV for list
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&results).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("id,type,name,active,base_rate,average_reach,created_at");
            for vehicle in &results {
                println!(
                    "{},{},{},{},{},{},{}",
                    vehicle.id,
                    vehicle.media_type,
                    escape_csv(&vehicle.name),
                    vehicle.active,
                    vehicle.pricing.base_rate,
                    vehicle.reach.average_reach,
                    vehicle.created_at.format("%Y-%m-%dT%H:%M:%SZ")
                );
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => print_table(&results),
        OutputFormat::Id => {
            for vehicle in &results {
                println!("{}", vehicle.id);
            }
        }
        OutputFormat::Md => {
            println!("| ID | Type | Name | Active | Rate | Reach |");
            println!("|---|---|---|---|---|---|");
            for vehicle in &results {
                println!(
                    "| {} | {} | {} | {} | {} | {} |",
                    vehicle.id,
                    vehicle.media_type,
                    vehicle.name,
                    vehicle.active,
                    vehicle.pricing.base_rate,
                    vehicle.reach.average_reach
                );
            }
        }
    }

    Ok(())
}

fn filters_from_args(args: &ListArgs) -> Result<SearchFilters> {
    let mut types = Vec::new();
    for value in &args.r#type {
        types.push(parse_media_type(value)?);
    }

    let price_range = match (args.min_price, args.max_price) {
        (None, None) => None,
        (min, max) => Some(RangeFilter::new(
            min.unwrap_or(0.0),
            max.unwrap_or(f64::MAX),
        )),
    };

    let reach = match (args.min_reach, args.max_reach) {
        (None, None) => None,
        (min, max) => Some(RangeFilter::new(min.unwrap_or(0), max.unwrap_or(u64::MAX))),
    };

    let active = if args.active {
        Some(true)
    } else if args.inactive {
        Some(false)
    } else {
        None
    };

    Ok(SearchFilters {
        types,
        price_range,
        reach,
        demographics: args.demographic.clone(),
        location: args.location.clone(),
        active,
        ..Default::default()
    })
}

fn print_table(results: &[&MediaVehicle]) {
    println!(
        "{:<30} {:<8} {:<34} {:<7} {:>10} {:>12}",
        style("ID").bold(),
        style("TYPE").bold(),
        style("NAME").bold(),
        style("ACTIVE").bold(),
        style("RATE").bold(),
        style("REACH").bold()
    );
    println!("{}", "-".repeat(106));

    for vehicle in results {
        println!(
            "{:<30} {:<8} {:<34} {:<7} {:>10} {:>12}",
            vehicle.id.to_string(),
            vehicle.media_type.as_str(),
            truncate_str(&vehicle.name, 32),
            if vehicle.active { "yes" } else { "no" },
            vehicle.pricing.base_rate,
            vehicle.reach.average_reach
        );
    }

    println!();
    println!("{} vehicle(s) found", style(results.len()).cyan());
}
