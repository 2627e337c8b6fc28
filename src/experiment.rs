//! Batch studies over random ranking profiles.

use crate::consts::{ALL_PROFILES_MAX_AGENTS, MAX_EXHAUSTIVE_AGENTS, MIN_AGENTS};
use crate::enumerate::{canonical_arrangement_count, canonical_arrangements};
use crate::error::{SeatingError, SfResult};
use crate::exhaustive::max_welfare_is_stable;
use crate::optimizer::mix_seed;
use crate::profile::{
    all_ranking_profiles, build_utility_profile, random_ranking_profile, ranking_profile_count,
    ScoringScheme, UtilityProfile,
};
use crate::repair::naive_swap;
use crate::solver::{Phase, SolveResult, StableSeatingSolver};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Tally of solver outcomes across many profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepStats {
    pub samples: usize,
    pub max_anneal: usize,
    pub max_repair: usize,
    pub min_anneal: usize,
    pub min_repair: usize,
    /// Stable seating existed but only the exhaustive check found it.
    pub missed: usize,
    pub confirmed_none: usize,
    pub inconclusive: usize,
    /// Random start plus repair walk alone reached a stable seating.
    pub naive: usize,
}

impl SweepStats {
    pub fn record(&mut self, result: &SolveResult) {
        self.samples += 1;
        match result {
            SolveResult::Stable { phase, .. } => match phase {
                Phase::MaxAnneal => self.max_anneal += 1,
                Phase::MaxRepair => self.max_repair += 1,
                Phase::MinAnneal => self.min_anneal += 1,
                Phase::MinRepair => self.min_repair += 1,
                Phase::Exhaustive => self.missed += 1,
            },
            SolveResult::ConfirmedNoStableArrangement => self.confirmed_none += 1,
            SolveResult::SearchInconclusive { .. } => self.inconclusive += 1,
        }
    }

    /// Profiles where some heuristic phase produced a stable seating.
    pub fn recovered(&self) -> usize {
        self.max_anneal + self.max_repair + self.min_anneal + self.min_repair
    }

    pub fn count(&self, phase: Phase) -> usize {
        match phase {
            Phase::MaxAnneal => self.max_anneal,
            Phase::MaxRepair => self.max_repair,
            Phase::MinAnneal => self.min_anneal,
            Phase::MinRepair => self.min_repair,
            Phase::Exhaustive => self.missed,
        }
    }

    /// `count` as a percentage of all samples.
    pub fn percent(&self, count: usize) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.samples as f64
        }
    }
}

/// One (n, scheme) line of a sweep, flat for CSV output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRow {
    pub n: usize,
    pub scheme: String,
    pub samples: usize,
    pub recovered_pct: f64,
    pub max_anneal: usize,
    pub max_repair: usize,
    pub min_anneal: usize,
    pub min_repair: usize,
    pub missed: usize,
    pub confirmed_none: usize,
    pub inconclusive: usize,
    pub naive_pct: f64,
}

impl SweepRow {
    pub fn new(n: usize, scheme: ScoringScheme, stats: &SweepStats) -> Self {
        Self {
            n,
            scheme: scheme.to_string(),
            samples: stats.samples,
            recovered_pct: stats.percent(stats.recovered()),
            max_anneal: stats.max_anneal,
            max_repair: stats.max_repair,
            min_anneal: stats.min_anneal,
            min_repair: stats.min_repair,
            missed: stats.missed,
            confirmed_none: stats.confirmed_none,
            inconclusive: stats.inconclusive,
            naive_pct: stats.percent(stats.naive),
        }
    }
}

/// Profile number `sample` of a study, reproducible from `seed`.
pub fn sample_profile(
    seed: u64,
    n: usize,
    scheme: ScoringScheme,
    sample: usize,
) -> SfResult<UtilityProfile> {
    let mut rng = fastrand::Rng::with_seed(mix_seed(("profile", seed, n, scheme, sample)));
    let rankings = random_ranking_profile(&mut rng, n)?;
    build_utility_profile(&rankings, scheme)
}

/// Solves `samples` random profiles of size `n` and tallies the outcomes.
///
/// Profiles are processed one after another; each solve fans its trials out
/// across the thread pool. Every profile also gets one naive-swap attempt as a
/// baseline.
pub fn run_sweep(
    solver: &StableSeatingSolver,
    n: usize,
    scheme: ScoringScheme,
    samples: usize,
    seed: u64,
) -> SfResult<SweepStats> {
    let mut stats = SweepStats::default();
    for sample in 0..samples {
        let profile = Arc::new(sample_profile(seed, n, scheme, sample)?);
        let run_id = mix_seed(("solve", seed, n, scheme, sample));
        let result = solver.solve(&profile, Some(run_id));
        debug!("n={} {} sample {}: {:?}", n, scheme, sample, result.phase());
        stats.record(&result);

        let mut rng = fastrand::Rng::with_seed(mix_seed(("naive", seed, n, scheme, sample)));
        if naive_swap(&profile, &mut rng, solver.config().repair_factor).is_some() {
            stats.naive += 1;
        }
    }
    Ok(stats)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelfareStudy {
    /// Profiles checked: every ranking profile when `exhaustive`, else the sample size.
    pub samples: usize,
    /// Profiles where at least one welfare-maximizing seating is stable.
    pub stable_max_welfare: usize,
    pub exhaustive: bool,
}

impl WelfareStudy {
    pub fn percent(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            100.0 * self.stable_max_welfare as f64 / self.samples as f64
        }
    }
}

/// How often maximum welfare and stability coincide, checked exhaustively.
///
/// Up to [`ALL_PROFILES_MAX_AGENTS`] agents every ranking profile is checked
/// and `samples` is ignored; above it `samples` random profiles are drawn from
/// `seed`. Seatings are streamed per profile.
pub fn welfare_study(
    n: usize,
    scheme: ScoringScheme,
    samples: usize,
    seed: u64,
) -> SfResult<WelfareStudy> {
    if !(MIN_AGENTS..=MAX_EXHAUSTIVE_AGENTS).contains(&n) {
        return Err(SeatingError::Config(format!(
            "Exhaustive welfare study supports {} to {} agents, got {}",
            MIN_AGENTS, MAX_EXHAUSTIVE_AGENTS, n
        )));
    }

    let max_welfare_stable = |profile: &UtilityProfile| {
        max_welfare_is_stable(profile, canonical_arrangements(n))
    };

    if n <= ALL_PROFILES_MAX_AGENTS {
        debug!(
            "n={}: all {} ranking profiles, {} canonical seatings each",
            n,
            ranking_profile_count(n),
            canonical_arrangement_count(n)
        );
        let flags: Vec<bool> = all_ranking_profiles(n)
            .par_bridge()
            .map(|rankings| -> SfResult<bool> {
                Ok(max_welfare_stable(&build_utility_profile(&rankings, scheme)?))
            })
            .collect::<SfResult<Vec<bool>>>()?;

        return Ok(WelfareStudy {
            samples: flags.len(),
            stable_max_welfare: flags.into_iter().filter(|&f| f).count(),
            exhaustive: true,
        });
    }

    debug!(
        "n={}: {} sampled profiles, {} canonical seatings each",
        n,
        samples,
        canonical_arrangement_count(n)
    );
    let flags: Vec<bool> = (0..samples)
        .into_par_iter()
        .map(|sample| -> SfResult<bool> {
            Ok(max_welfare_stable(&sample_profile(seed, n, scheme, sample)?))
        })
        .collect::<SfResult<Vec<bool>>>()?;

    Ok(WelfareStudy {
        samples,
        stable_max_welfare: flags.into_iter().filter(|&f| f).count(),
        exhaustive: false,
    })
}
