use crate::reports;
use clap::Args;
use seatforge::config::Config;
use seatforge::core_types::Utility;
use seatforge::error::SfResult;
use seatforge::optimizer::mix_seed;
use seatforge::profile::{
    build_utility_profile, random_ranking_profile, RankingProfile, ScoringScheme,
};
use seatforge::solver::{SolveResult, SolverConfig, StableSeatingSolver};
use seatforge::stability::{agent_utilities, welfare};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    /// Rankings JSON (`{"rankings": [[...], ...]}`); random when omitted.
    #[arg(short, long)]
    pub rankings: Option<String>,

    /// Table size for a random profile.
    #[arg(short = 'n', long, default_value_t = 8)]
    pub agents: usize,

    #[arg(short = 's', long, default_value_t = ScoringScheme::Normalized)]
    pub scheme: ScoringScheme,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SolveReport<'a> {
    n: usize,
    scheme: ScoringScheme,
    rankings: &'a RankingProfile,
    result: &'a SolveResult,
    welfare: Option<Utility>,
    utilities: Option<Vec<Utility>>,
}

pub fn run(args: &SolveArgs, config: &Config) -> SfResult<()> {
    let rankings = match &args.rankings {
        Some(path) => {
            info!("📂 Loading rankings: {}", path);
            RankingProfile::load_from_file(path)?
        }
        None => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            random_ranking_profile(&mut rng, args.agents)?
        }
    };

    let profile = Arc::new(build_utility_profile(&rankings, args.scheme)?);
    let solver = StableSeatingSolver::new(SolverConfig::from(config))?;
    info!(
        "🔥 Solving n={} ({}) with {} trials per phase",
        profile.len(),
        args.scheme,
        solver.config().trials_per_phase
    );

    let run_id = args.seed.map(|s| mix_seed(("solve", s)));
    let result = solver.solve(&profile, run_id);

    let utilities = result.arrangement().map(|a| agent_utilities(&profile, a));
    let total = result.arrangement().map(|a| welfare(&profile, a));

    if args.json {
        let report = SolveReport {
            n: profile.len(),
            scheme: args.scheme,
            rankings: &rankings,
            result: &result,
            welfare: total,
            utilities,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Outcome: {}", reports::outcome_line(&result));
    if let (Some(arrangement), Some(utilities), Some(total)) =
        (result.arrangement(), utilities.as_deref(), total)
    {
        println!("Seating: {}", arrangement);
        println!("Welfare: {:.4}", total);
        reports::print_agent_table(&rankings, arrangement, utilities);
    }
    Ok(())
}
