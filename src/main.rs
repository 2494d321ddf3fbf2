use clap::Parser;
use colored::Colorize;

use taskline::cli::args::{Cli, Commands};
use taskline::cli::commands;
use taskline::config::Config;
use taskline::error::TasklineError;
use taskline::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TasklineError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&args.text(), format)?,
        Commands::Preview(args) => commands::preview(&args.text(), &config.feedback, format)?,
        Commands::Plan(args) => {
            commands::plan(&args.task.text(), args.catalog.as_deref(), &config, format)?
        },
        Commands::Completions { shell } => commands::completions(shell)?,
        Commands::Config => commands::show_config(&config, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
