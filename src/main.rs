use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use intervals::cli::args::{Cli, Commands};
use intervals::cli::commands::{self, Context};
use intervals::config::Paths;
use intervals::logging::{init_logging, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.home.clone()).context("resolving data directory")?;
    let command = cli.command.unwrap_or(Commands::Tui);

    // The TUI owns the terminal, so its logs go to a file.
    let target = if matches!(command, Commands::Tui) && paths.ensure_dirs().is_ok() {
        LogTarget::File(paths.log_file.clone())
    } else {
        LogTarget::Stderr
    };
    init_logging(cli.verbose, &target);

    let ctx = Context::load(paths, cli.output)?;
    ctx.settings.general.color.apply();

    let output = match command {
        Commands::Tui => {
            intervals::tui::run(&ctx.store, &ctx.settings)?;
            String::new()
        }
        Commands::Run(args) => commands::run(&ctx, &args)?,
        Commands::Plan => commands::plan(&ctx)?,
        Commands::Config(args) => commands::config(&ctx, args.command)?,
        Commands::Exercise(args) => commands::exercise(&ctx, args.command)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
