//! `mvd show` command - Show a single vehicle

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::project::Project;
use crate::core::store::load_vehicle;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Vehicle ID or ID prefix
    pub id: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;

    let Some((path, vehicle)) = load_vehicle(&project, &args.id)? else {
        return Err(miette::miette!("No vehicle found matching '{}'", args.id));
    };

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Yaml, // Default to YAML for show
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&vehicle).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Id => {
            println!("{}", vehicle.id);
        }
        _ => {
            if global.verbose {
                println!("{} {}", style("File:").bold(), style(path.display()).dim());
            }
            let yaml = serde_yml::to_string(&vehicle).into_diagnostic()?;
            print!("{}", yaml);
        }
    }

    Ok(())
}
