pub mod runner;

pub use self::runner::{mix_seed, run_trials, trial_rng, trial_seed, TrialBatch};

use crate::arrangement::Arrangement;
use crate::config::AnnealParams;
use crate::core_types::{Objective, Utility};
use crate::profile::UtilityProfile;
use crate::stability::{swap_delta, welfare};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::Display;

/// How an annealing trial stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Termination {
    /// The seating went `convergence_patience` rounds without changing.
    Converged,
    /// The round cap was hit first.
    RoundsExhausted,
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub seats: (usize, usize),
    pub delta: Utility,
    pub accepted: bool,
}

#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    pub arrangement: Arrangement,
    pub welfare: Utility,
    pub rounds: usize,
    pub termination: Termination,
}

/// One simulated-annealing trial over a privately owned seating.
///
/// The profile is shared read-only; the seating, temperature and random
/// stream belong to this trial alone.
pub struct Annealer {
    pub profile: Arc<UtilityProfile>,
    pub objective: Objective,
    pub params: AnnealParams,
    pub arrangement: Arrangement,
    pub welfare: Utility,
    pub temperature: f64,
    pub round: usize,
    pub unchanged_rounds: usize,
    pub rng: fastrand::Rng,
}

impl Annealer {
    /// Starts from a uniformly random seating drawn from `rng`.
    pub fn new(
        profile: Arc<UtilityProfile>,
        objective: Objective,
        params: AnnealParams,
        mut rng: fastrand::Rng,
    ) -> Self {
        let n = profile.len();
        let arrangement = Arrangement::random(&mut rng, n);
        Self::with_arrangement(profile, objective, params, rng, arrangement)
    }

    pub fn with_arrangement(
        profile: Arc<UtilityProfile>,
        objective: Objective,
        params: AnnealParams,
        rng: fastrand::Rng,
        arrangement: Arrangement,
    ) -> Self {
        let welfare = welfare(&profile, &arrangement);
        let temperature = params.initial_temperature(profile.len());
        Self {
            profile,
            objective,
            params,
            arrangement,
            welfare,
            temperature,
            round: 0,
            unchanged_rounds: 0,
            rng,
        }
    }

    pub fn is_converged(&self) -> bool {
        self.unchanged_rounds >= self.params.convergence_patience
    }

    pub fn is_exhausted(&self) -> bool {
        self.round >= self.params.max_rounds
    }

    /// Metropolis acceptance for a move with welfare change `delta`.
    #[inline(always)]
    fn accept(&mut self, delta: Utility) -> bool {
        if self.objective.accepts_outright(self.welfare + delta, self.welfare) {
            return true;
        }
        if self.temperature < self.params.min_temperature {
            return false;
        }
        let probability = (self.objective.gain(delta) / self.temperature).exp();
        self.rng.f64() < probability
    }

    /// Proposes one random seat swap, applies it if accepted, then cools.
    pub fn step(&mut self) -> RoundOutcome {
        let n = self.arrangement.len();
        let i = self.rng.usize(0..n);
        let mut j = self.rng.usize(0..n);
        while j == i {
            j = self.rng.usize(0..n);
        }

        let delta = swap_delta(&self.profile, &self.arrangement, i, j);
        let accepted = self.accept(delta);

        if accepted {
            self.arrangement.swap_seats(i, j);
            self.welfare += delta;
            self.unchanged_rounds = 0;
        } else {
            self.unchanged_rounds += 1;
        }

        self.temperature *= self.params.cooling_rate;
        self.round += 1;

        RoundOutcome {
            seats: (i, j),
            delta,
            accepted,
        }
    }

    /// Steps until convergence or the round cap, whichever comes first.
    pub fn run(mut self) -> AnnealOutcome {
        let termination = loop {
            if self.is_converged() {
                break Termination::Converged;
            }
            if self.is_exhausted() {
                break Termination::RoundsExhausted;
            }
            self.step();
        };

        // Re-derive to drop accumulated floating-point drift from the deltas.
        let welfare = welfare(&self.profile, &self.arrangement);

        AnnealOutcome {
            arrangement: self.arrangement,
            welfare,
            rounds: self.round,
            termination,
        }
    }
}

/// One full trial from a random seating.
pub fn run_annealing(
    profile: Arc<UtilityProfile>,
    objective: Objective,
    params: &AnnealParams,
    rng: fastrand::Rng,
) -> AnnealOutcome {
    Annealer::new(profile, objective, params.clone(), rng).run()
}
