use clap::Parser;
use miette::Result;
use mvd::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => mvd::cli::commands::init::run(args),
        Commands::New(args) => mvd::cli::commands::new::run(args, &global),
        Commands::List(args) => mvd::cli::commands::list::run(args, &global),
        Commands::Show(args) => mvd::cli::commands::show::run(args, &global),
        Commands::Update(args) => mvd::cli::commands::update::run(args, &global),
        Commands::Edit(args) => mvd::cli::commands::edit::run(args),
        Commands::History(args) => mvd::cli::commands::history::run(args, &global),
        Commands::Stats(args) => mvd::cli::commands::stats::run(args, &global),
        Commands::Import(args) => mvd::cli::commands::import::run(args, &global),
    }
}
