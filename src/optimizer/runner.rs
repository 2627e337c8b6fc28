use crate::config::AnnealParams;
use crate::core_types::{Objective, Utility};
use crate::optimizer::{run_annealing, AnnealOutcome, Termination};
use crate::profile::UtilityProfile;
use fnv::FnvHasher;
use rayon::prelude::*;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Folds any hashable key into a 64-bit seed.
pub fn mix_seed<K: Hash>(key: K) -> u64 {
    let mut hasher = FnvHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic seed for one trial, mixed from the run id, the search
/// direction and the trial's position in its batch.
pub fn trial_seed(run_id: u64, objective: Objective, trial: usize) -> u64 {
    mix_seed((run_id, objective, trial))
}

/// Private random stream for one trial. Without a run id the stream is
/// seeded from entropy.
pub fn trial_rng(run_id: Option<u64>, objective: Objective, trial: usize) -> fastrand::Rng {
    match run_id {
        Some(id) => fastrand::Rng::with_seed(trial_seed(id, objective, trial)),
        None => fastrand::Rng::new(),
    }
}

/// Terminal seatings of one batch of independent trials, in trial order.
#[derive(Debug, Clone)]
pub struct TrialBatch {
    pub objective: Objective,
    pub outcomes: Vec<AnnealOutcome>,
}

impl TrialBatch {
    pub fn converged(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.termination == Termination::Converged)
            .count()
    }

    /// Best welfare under the batch objective.
    pub fn best_welfare(&self) -> Option<Utility> {
        let welfares = self.outcomes.iter().map(|o| o.welfare);
        match self.objective {
            Objective::Maximize => welfares.reduce(Utility::max),
            Objective::Minimize => welfares.reduce(Utility::min),
        }
    }
}

/// Runs `count` annealing trials in parallel and waits for all of them.
///
/// Trials share only the read-only profile. Output order follows trial
/// index regardless of completion order.
pub fn run_trials(
    profile: &Arc<UtilityProfile>,
    objective: Objective,
    params: &AnnealParams,
    count: usize,
    run_id: Option<u64>,
) -> TrialBatch {
    let outcomes: Vec<AnnealOutcome> = (0..count)
        .into_par_iter()
        .map(|trial| {
            let rng = trial_rng(run_id, objective, trial);
            run_annealing(profile.clone(), objective, params, rng)
        })
        .collect();

    let batch = TrialBatch { objective, outcomes };
    debug!(
        "{} batch: {} trials, {} converged, best welfare {:?}",
        objective,
        count,
        batch.converged(),
        batch.best_welfare()
    );
    batch
}
