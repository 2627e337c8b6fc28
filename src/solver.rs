//! Multi-phase search for a stable seating.
//!
//! Phases run in order and stop at the first stable seating:
//! max-welfare annealing, repair of its unstable results, min-welfare
//! annealing, repair of those, and finally an exhaustive check for small
//! tables that separates "the heuristics missed it" from "none exists".

use crate::arrangement::Arrangement;
use crate::config::{AnnealParams, Config};
use crate::consts::*;
use crate::core_types::Objective;
use crate::error::{SeatingError, SfResult};
use crate::exhaustive::find_stable_arrangement_exhaustive;
use crate::optimizer::run_trials;
use crate::profile::UtilityProfile;
use crate::repair::repair_via_blocking_pairs;
use crate::stability::find_blocking_pair;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter};
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SolverConfig {
    #[builder(default = DEFAULT_TRIALS_PER_PHASE)]
    pub trials_per_phase: usize,
    #[builder(default = true)]
    pub repair: bool,
    #[builder(default = true)]
    pub min_phase: bool,
    #[builder(default = DEFAULT_BRUTE_FORCE_THRESHOLD)]
    pub brute_force_threshold: usize,
    #[builder(default = DEFAULT_REPAIR_FACTOR)]
    pub repair_factor: usize,
    #[builder(default)]
    pub anneal: AnnealParams,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig::builder().build()
    }
}

impl From<&Config> for SolverConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            trials_per_phase: cfg.solver.trials_per_phase,
            repair: cfg.solver.repair,
            min_phase: cfg.solver.min_phase,
            brute_force_threshold: cfg.solver.brute_force_threshold,
            repair_factor: cfg.solver.repair_factor,
            anneal: cfg.anneal.clone(),
        }
    }
}

/// The phase that produced a stable seating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    MaxAnneal,
    MaxRepair,
    MinAnneal,
    MinRepair,
    /// Every heuristic failed but exhaustive search found a stable seating.
    Exhaustive,
}

impl Phase {
    fn anneal(objective: Objective) -> Self {
        match objective {
            Objective::Maximize => Phase::MaxAnneal,
            Objective::Minimize => Phase::MinAnneal,
        }
    }

    fn repair(objective: Objective) -> Self {
        match objective {
            Objective::Maximize => Phase::MaxRepair,
            Objective::Minimize => Phase::MinRepair,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InconclusiveReason {
    /// The table is too large for the exhaustive check.
    ThresholdExceeded { n: usize, threshold: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SolveResult {
    Stable {
        arrangement: Arrangement,
        phase: Phase,
    },
    /// Exhaustive search proved that no seating is stable.
    ConfirmedNoStableArrangement,
    /// Heuristics failed and the exhaustive check was not allowed to run.
    SearchInconclusive { reason: InconclusiveReason },
}

impl SolveResult {
    pub fn arrangement(&self) -> Option<&Arrangement> {
        match self {
            SolveResult::Stable { arrangement, .. } => Some(arrangement),
            _ => None,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self {
            SolveResult::Stable { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, SolveResult::Stable { .. })
    }
}

pub struct StableSeatingSolver {
    config: SolverConfig,
}

impl StableSeatingSolver {
    pub fn new(config: SolverConfig) -> SfResult<Self> {
        config.anneal.validate()?;
        if config.trials_per_phase == 0 {
            return Err(SeatingError::Config(
                "trials_per_phase must be at least 1".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs every enabled phase in order until one yields a stable seating.
    ///
    /// With a `run_id` every trial's random stream is derived from it, so the
    /// whole solve is reproducible.
    pub fn solve(&self, profile: &Arc<UtilityProfile>, run_id: Option<u64>) -> SolveResult {
        let n = profile.len();

        let mut objectives = vec![Objective::Maximize];
        if self.config.min_phase {
            objectives.push(Objective::Minimize);
        }

        for objective in objectives {
            if let Some((arrangement, phase)) = self.search(profile, objective, run_id) {
                info!("Stable seating found via {}: {}", phase, arrangement);
                return SolveResult::Stable { arrangement, phase };
            }
        }

        if n >= self.config.brute_force_threshold {
            warn!(
                "Heuristics found no stable seating for n={} and the exhaustive check needs n < {}",
                n, self.config.brute_force_threshold
            );
            return SolveResult::SearchInconclusive {
                reason: InconclusiveReason::ThresholdExceeded {
                    n,
                    threshold: self.config.brute_force_threshold,
                },
            };
        }

        debug!("Heuristics exhausted for n={}, checking every seating", n);
        match find_stable_arrangement_exhaustive(profile) {
            Some(arrangement) => {
                info!("Heuristics missed a stable seating: {}", arrangement);
                SolveResult::Stable {
                    arrangement,
                    phase: Phase::Exhaustive,
                }
            }
            None => {
                info!("No stable seating exists for this profile");
                SolveResult::ConfirmedNoStableArrangement
            }
        }
    }

    /// One direction: a batch of annealing trials, then repair of each
    /// unstable result in trial order.
    fn search(
        &self,
        profile: &Arc<UtilityProfile>,
        objective: Objective,
        run_id: Option<u64>,
    ) -> Option<(Arrangement, Phase)> {
        debug!("Phase {}", Phase::anneal(objective));
        let batch = run_trials(
            profile,
            objective,
            &self.config.anneal,
            self.config.trials_per_phase,
            run_id,
        );

        let mut unstable = Vec::with_capacity(batch.outcomes.len());
        for outcome in batch.outcomes {
            match find_blocking_pair(profile, &outcome.arrangement) {
                None => return Some((outcome.arrangement, Phase::anneal(objective))),
                Some(pair) => unstable.push((outcome.arrangement, pair)),
            }
        }

        if !self.config.repair {
            return None;
        }

        debug!("Phase {}", Phase::repair(objective));
        unstable
            .iter()
            .find_map(|(arrangement, pair)| {
                repair_via_blocking_pairs(profile, arrangement, *pair, self.config.repair_factor)
            })
            .map(|arrangement| (arrangement, Phase::repair(objective)))
    }
}

/// `solve` with a throwaway solver.
pub fn solve(
    profile: &Arc<UtilityProfile>,
    config: SolverConfig,
    run_id: Option<u64>,
) -> SfResult<SolveResult> {
    Ok(StableSeatingSolver::new(config)?.solve(profile, run_id))
}
