//! `mvd import` command - Bulk-import vehicles from a CSV file
//!
//! Default mode reports what would happen without touching the
//! directory; `--apply` promotes the accepted rows to vehicle files.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::truncate_str;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::import::{CsvImport, ImportErrorField};
use crate::core::project::Project;
use crate::core::store::save_vehicle;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// CSV file to import (first line = headers)
    pub file: PathBuf,

    /// Write accepted rows into the directory (default: report only)
    #[arg(long)]
    pub apply: bool,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;

    let CsvImport { result, accepted } = CsvImport::from_path(&args.file);

    if global.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
        if !result.success {
            return Err(miette::miette!("Import failed: could not read {}", args.file.display()));
        }
        return Ok(());
    }

    if !result.success {
        let detail = result
            .errors
            .first()
            .map(|e| e.value.to_string())
            .unwrap_or_default();
        return Err(miette::miette!(
            "Failed to process {}: {}",
            args.file.display(),
            detail
        ));
    }

    for error in &result.errors {
        let stage = match error.field {
            ImportErrorField::Validation => "validation",
            ImportErrorField::Processing => "processing",
            ImportErrorField::File => "file",
        };
        eprintln!(
            "{} Row {}: {} error: {}",
            style("✗").red(),
            error.row,
            stage,
            error.error
        );
    }

    if args.apply {
        for draft in accepted {
            // drafts in `accepted` already passed validation
            let vehicle = draft.promote().map_err(|e| miette::miette!("{}", e))?;
            println!(
                "{} Created {} - {}",
                style("✓").green(),
                style(vehicle.id.to_string()).cyan(),
                truncate_str(&vehicle.name, 40)
            );
            save_vehicle(&project, &vehicle)?;
        }
    } else if result.successful > 0 {
        println!(
            "{} {} row(s) would be imported; re-run with {} to write them",
            style("○").dim(),
            result.successful,
            style("--apply").yellow()
        );
    }

    println!();
    println!(
        "{} processed, {} successful, {} failed",
        style(result.total_processed).cyan(),
        style(result.successful).green(),
        style(result.failed).red()
    );

    Ok(())
}
