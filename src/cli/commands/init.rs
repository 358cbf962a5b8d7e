//! `mvd init` command - Initialize a new directory project

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::Path;

use crate::core::project::{Project, ProjectError};
use crate::core::store::save_vehicle;
use crate::entities::samples::sample_vehicles;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: std::path::PathBuf,

    /// Seed the directory with three demonstration vehicles
    #[arg(long)]
    pub samples: bool,

    /// Also initialize a git repository
    #[arg(long)]
    pub git: bool,

    /// Force initialization even if .mvd/ already exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    // Create directory if it doesn't exist
    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    // Initialize git if requested
    if args.git {
        init_git(&path)?;
    }

    let project = if args.force {
        Project::init_force(&path)
    } else {
        Project::init(&path)
    };

    match project {
        Ok(project) => {
            println!(
                "{} Initialized MVD directory at {}",
                style("✓").green(),
                style(project.root().display()).cyan()
            );

            if args.samples {
                let mut seeded = 0;
                for vehicle in sample_vehicles() {
                    save_vehicle(&project, &vehicle)?;
                    seeded += 1;
                }
                println!(
                    "{} Seeded {} demonstration vehicle(s)",
                    style("✓").green(),
                    style(seeded).cyan()
                );
            }

            println!();
            println!("Next steps:");
            println!(
                "  {} Create your first listing",
                style("mvd new --name \"Prime Time TV Spot\" --type TV ...").yellow()
            );
            println!("  {} Browse the directory", style("mvd list").yellow());
            println!("  {} Import listings in bulk", style("mvd import vehicles.csv").yellow());
            Ok(())
        }
        Err(ProjectError::AlreadyExists(path)) => {
            println!(
                "{} MVD directory already exists at {}",
                style("!").yellow(),
                style(path.display()).cyan()
            );
            println!();
            println!("Use {} to reinitialize", style("mvd init --force").yellow());
            Ok(())
        }
        Err(e) => Err(miette::miette!("{}", e)),
    }
}

fn init_git(path: &Path) -> Result<()> {
    let git_dir = path.join(".git");
    if git_dir.exists() {
        println!("{} Git repository already exists", style("✓").green());
        return Ok(());
    }

    let output = std::process::Command::new("git")
        .arg("init")
        .current_dir(path)
        .output()
        .into_diagnostic()?;

    if output.status.success() {
        println!("{} Initialized git repository", style("✓").green());
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(miette::miette!("Failed to initialize git: {}", stderr))
    }
}
