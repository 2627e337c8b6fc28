//! Greedy blocking-pair repair.
//!
//! Starting from a seating with a known blocking pair, repeatedly let the
//! current blocking pair trade seats and re-check. The walk has no memory and
//! no cycle detection; the swap budget is the only guard against oscillation.

use crate::arrangement::Arrangement;
use crate::profile::UtilityProfile;
use crate::stability::{find_blocking_pair, BlockingPair};
use fastrand::Rng;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RepairReport {
    /// The stable seating reached, if any.
    pub arrangement: Option<Arrangement>,
    /// Swaps performed before stopping.
    pub swaps: usize,
}

impl RepairReport {
    pub fn is_success(&self) -> bool {
        self.arrangement.is_some()
    }
}

/// Swap budget for a table of `n` agents.
pub fn repair_budget(n: usize, factor: usize) -> usize {
    factor.saturating_mul(n)
}

/// Runs the repair walk for at most `max_swaps` swaps.
pub fn repair_walk(
    profile: &UtilityProfile,
    arrangement: &Arrangement,
    initial: BlockingPair,
    max_swaps: usize,
) -> RepairReport {
    let mut current = arrangement.clone();
    let mut pair = initial;

    for swap in 1..=max_swaps {
        current.swap_agents(pair.first, pair.second);

        match find_blocking_pair(profile, &current) {
            None => {
                debug!("Repair reached a stable seating after {} swaps", swap);
                return RepairReport {
                    arrangement: Some(current),
                    swaps: swap,
                };
            }
            Some(next) => pair = next,
        }
    }

    debug!("Repair gave up after {} swaps", max_swaps);
    RepairReport {
        arrangement: None,
        swaps: max_swaps,
    }
}

/// A stable seating near `arrangement`, or `None`
/// when the budget of `factor * n` swaps runs out.
///
/// `None` does not mean no stable seating exists.
pub fn repair_via_blocking_pairs(
    profile: &UtilityProfile,
    arrangement: &Arrangement,
    initial: BlockingPair,
    factor: usize,
) -> Option<Arrangement> {
    let budget = repair_budget(arrangement.len(), factor);
    repair_walk(profile, arrangement, initial, budget).arrangement
}

/// Baseline: seat everyone at random and, unless that is already stable,
/// repair from the first blocking pair.
pub fn naive_swap(profile: &UtilityProfile, rng: &mut Rng, factor: usize) -> Option<Arrangement> {
    let start = Arrangement::random(rng, profile.len());
    match find_blocking_pair(profile, &start) {
        None => Some(start),
        Some(pair) => repair_via_blocking_pairs(profile, &start, pair, factor),
    }
}
