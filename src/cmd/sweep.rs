use crate::reports;
use clap::Args;
use seatforge::config::Config;
use seatforge::error::{SeatingError, SfResult};
use seatforge::experiment::{run_sweep, SweepRow};
use seatforge::profile::ScoringScheme;
use seatforge::solver::{SolverConfig, StableSeatingSolver};
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = 4)]
    pub n_min: usize,

    #[arg(long, default_value_t = 10)]
    pub n_max: usize,

    /// Comma separated, e.g. `normalized,binary`.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "normalized,harmonic,binary"
    )]
    pub schemes: Vec<ScoringScheme>,

    /// Random profiles per (n, scheme).
    #[arg(long, default_value_t = 20)]
    pub samples: usize,

    #[arg(short = 'S', long, default_value_t = 0)]
    pub seed: u64,

    /// Also write one row per (n, scheme) to this CSV file.
    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: &SweepArgs, config: &Config) -> SfResult<()> {
    if args.n_min < 3 || args.n_min > args.n_max {
        return Err(SeatingError::Config(format!(
            "Invalid agent range {}..={}",
            args.n_min, args.n_max
        )));
    }

    let solver = StableSeatingSolver::new(SolverConfig::from(config))?;
    let start = Instant::now();
    let mut rows = Vec::new();

    for n in args.n_min..=args.n_max {
        for &scheme in &args.schemes {
            let stats = run_sweep(&solver, n, scheme, args.samples, args.seed)?;
            info!(
                "n={} {}: {}/{} recovered",
                n,
                scheme,
                stats.recovered(),
                stats.samples
            );
            rows.push(SweepRow::new(n, scheme, &stats));
        }
    }

    reports::print_sweep_table(&rows);
    println!("Finished in {:.2?}", start.elapsed());

    if let Some(path) = &args.csv {
        let mut writer = csv::Writer::from_path(path)?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!("💾 Wrote {} rows to {}", rows.len(), path);
    }
    Ok(())
}
