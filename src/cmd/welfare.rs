use crate::reports;
use clap::Args;
use seatforge::error::{SeatingError, SfResult};
use seatforge::experiment::welfare_study;
use seatforge::profile::ScoringScheme;

#[derive(Args, Debug, Clone)]
pub struct WelfareArgs {
    #[arg(long, default_value_t = 4)]
    pub n_min: usize,

    #[arg(long, default_value_t = 8)]
    pub n_max: usize,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "normalized,harmonic,binary"
    )]
    pub schemes: Vec<ScoringScheme>,

    /// Random profiles per size; tables of up to 5 agents check every profile.
    #[arg(long, default_value_t = 50)]
    pub samples: usize,

    #[arg(short = 'S', long, default_value_t = 0)]
    pub seed: u64,
}

pub fn run(args: &WelfareArgs) -> SfResult<()> {
    if args.n_min < 3 || args.n_min > args.n_max {
        return Err(SeatingError::Config(format!(
            "Invalid agent range {}..={}",
            args.n_min, args.n_max
        )));
    }

    let mut rows = Vec::new();
    for n in args.n_min..=args.n_max {
        for &scheme in &args.schemes {
            let study = welfare_study(n, scheme, args.samples, args.seed)?;
            rows.push((n, scheme, study));
        }
    }

    reports::print_welfare_table(&rows);
    Ok(())
}
