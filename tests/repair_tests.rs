mod common;

use common::*;
use seatforge::arrangement::Arrangement;
use seatforge::consts::DEFAULT_REPAIR_FACTOR;
use seatforge::enumerate::enumerate_canonical_arrangements;
use seatforge::profile::ScoringScheme;
use seatforge::repair::{naive_swap, repair_budget, repair_via_blocking_pairs, repair_walk};
use seatforge::stability::{find_blocking_pair, is_stable, BlockingPair};

#[test]
fn test_single_swap_reunites_couples() {
    let profile = couples_profile();
    let arr = Arrangement::from_seats(vec![A, C, B, D]).unwrap();
    let pair = find_blocking_pair(&profile, &arr).unwrap();

    let report = repair_walk(&profile, &arr, pair, 400);
    assert_eq!(report.swaps, 1);
    let fixed = report.arrangement.unwrap();
    assert_eq!(fixed.seats(), &[C, A, B, D]);
    assert!(is_stable(&profile, &fixed));
}

#[test]
fn test_repair_leaves_input_untouched() {
    let profile = couples_profile();
    let arr = Arrangement::from_seats(vec![A, C, B, D]).unwrap();
    let before = arr.clone();
    let _ = repair_via_blocking_pairs(&profile, &arr, BlockingPair::new(A, C), DEFAULT_REPAIR_FACTOR);
    assert_eq!(arr, before);
}

#[test]
fn test_repair_is_bounded_without_stable_seating() {
    let profile = unstable_profile();
    for arr in enumerate_canonical_arrangements(4) {
        let pair = find_blocking_pair(&profile, &arr).unwrap();
        let budget = repair_budget(4, DEFAULT_REPAIR_FACTOR);

        let report = repair_walk(&profile, &arr, pair, budget);
        assert!(!report.is_success());
        assert_eq!(report.swaps, 400);
        assert!(repair_via_blocking_pairs(&profile, &arr, pair, DEFAULT_REPAIR_FACTOR).is_none());
    }
}

#[test]
fn test_repair_results_are_stable() {
    for seed in 0..30 {
        let profile = random_profile(seed, 7, ScoringScheme::Normalized);
        let mut rng = fastrand::Rng::with_seed(seed);
        let arr = Arrangement::random(&mut rng, 7);

        let Some(pair) = find_blocking_pair(&profile, &arr) else {
            continue;
        };
        let report = repair_walk(&profile, &arr, pair, repair_budget(7, DEFAULT_REPAIR_FACTOR));
        assert!(report.swaps <= 700);
        if let Some(fixed) = report.arrangement {
            assert!(is_stable(&profile, &fixed), "seed {}", seed);
        }
    }
}

#[test]
fn test_zero_budget_gives_up_immediately() {
    let profile = couples_profile();
    let arr = Arrangement::from_seats(vec![A, C, B, D]).unwrap();
    let report = repair_walk(&profile, &arr, BlockingPair::new(A, C), 0);
    assert_eq!(report.swaps, 0);
    assert!(report.arrangement.is_none());
}

#[test]
fn test_naive_swap() {
    let mut rng = fastrand::Rng::with_seed(12);
    let profile = couples_profile();
    let found = naive_swap(&profile, &mut rng, DEFAULT_REPAIR_FACTOR).unwrap();
    assert!(is_stable(&profile, &found));

    let impossible = unstable_profile_5();
    for _ in 0..5 {
        assert!(naive_swap(&impossible, &mut rng, 10).is_none());
    }
}
