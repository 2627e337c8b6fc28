#![allow(dead_code)]

use seatforge::config::AnnealParams;
use seatforge::experiment::sample_profile;
use seatforge::profile::{build_utility_profile, RankingProfile, ScoringScheme, UtilityProfile};

pub const A: u16 = 0;
pub const B: u16 = 1;
pub const C: u16 = 2;
pub const D: u16 = 3;

/// Four agents in two mutual-favourite couples: A<->B and C<->D, binary scores.
pub fn couples_profile() -> UtilityProfile {
    let rankings = RankingProfile::new(vec![
        vec![B, C, D],
        vec![A, C, D],
        vec![D, A, B],
        vec![C, A, B],
    ])
    .unwrap();
    build_utility_profile(&rankings, ScoringScheme::Binary).unwrap()
}

/// Builds a profile from a square matrix given row by row.
pub fn matrix_profile(rows: &[&[f64]]) -> UtilityProfile {
    let n = rows.len();
    let values: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    UtilityProfile::from_matrix(n, values).unwrap()
}

/// Four agents for which every seating has a blocking pair.
pub fn unstable_profile() -> UtilityProfile {
    matrix_profile(&[
        &[0.0, 2.0, 3.0, 1.0],
        &[2.0, 0.0, 0.0, 2.0],
        &[1.0, 3.0, 0.0, 0.0],
        &[1.0, 0.0, 3.0, 0.0],
    ])
}

/// Five agents for which every seating has a blocking pair.
pub fn unstable_profile_5() -> UtilityProfile {
    matrix_profile(&[
        &[0.0, 2.0, 0.0, 3.0, 1.0],
        &[1.0, 0.0, 3.0, 0.0, 3.0],
        &[2.0, 1.0, 0.0, 3.0, 3.0],
        &[2.0, 3.0, 2.0, 0.0, 0.0],
        &[2.0, 3.0, 0.0, 1.0, 0.0],
    ])
}

/// Four agents whose welfare-maximizing seating is blocked while the
/// welfare-minimizing one, [A, C, B, D], is the only stable seating.
pub fn stable_only_at_min_welfare() -> UtilityProfile {
    matrix_profile(&[
        &[0.0, 2.0, 0.0, 3.0],
        &[2.0, 0.0, 2.0, 1.0],
        &[2.0, 0.0, 0.0, 1.0],
        &[0.0, 3.0, 2.0, 0.0],
    ])
}

pub fn random_profile(seed: u64, n: usize, scheme: ScoringScheme) -> UtilityProfile {
    sample_profile(seed, n, scheme, 0).unwrap()
}

/// Short annealing runs so integration tests stay quick.
pub fn quick_anneal() -> AnnealParams {
    AnnealParams {
        max_rounds: 2_000,
        ..Default::default()
    }
}

/// Uniform random utilities in `[0, 1)`; exact welfare ties are practically impossible.
pub fn random_matrix_profile(seed: u64, n: usize) -> UtilityProfile {
    let mut rng = fastrand::Rng::with_seed(seed);
    let values = (0..n * n)
        .map(|k| if k / n == k % n { 0.0 } else { rng.f64() })
        .collect();
    UtilityProfile::from_matrix(n, values).unwrap()
}
