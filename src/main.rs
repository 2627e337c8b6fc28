use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use seatforge::config::Config;
use seatforge::error::SfResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with annealing and solver settings; explicit flags win.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve one ranking profile.
    Solve(cmd::solve::SolveArgs),
    /// Tally solver outcomes over random profiles.
    Sweep(cmd::sweep::SweepArgs),
    /// How often a welfare-maximizing seating is stable.
    Welfare(cmd::welfare::WelfareArgs),
    /// Count or list the distinct seatings of a table.
    Enumerate(cmd::enumerate::EnumerateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Solve(args) => resolve_config(&cli, &args.config, &matches, "solve")
            .and_then(|config| cmd::solve::run(args, &config)),
        Commands::Sweep(args) => resolve_config(&cli, &args.config, &matches, "sweep")
            .and_then(|config| cmd::sweep::run(args, &config)),
        Commands::Welfare(args) => cmd::welfare::run(args),
        Commands::Enumerate(args) => cmd::enumerate::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

/// The file config (if any) with command-line overrides applied on top.
fn resolve_config(
    cli: &Cli,
    cli_config: &Config,
    matches: &ArgMatches,
    subcommand: &str,
) -> SfResult<Config> {
    let config = match &cli.config_file {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            if let Some(sub_matches) = matches.subcommand_matches(subcommand) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}
