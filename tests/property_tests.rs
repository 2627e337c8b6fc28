use proptest::prelude::*;
use seatforge::arrangement::Arrangement;
use seatforge::core_types::AgentId;
use seatforge::profile::UtilityProfile;
use seatforge::repair::{repair_budget, repair_walk};
use seatforge::stability::{find_blocking_pair, is_blocking, is_stable, swap_delta, welfare};

// --- STRATEGIES ---

prop_compose! {
    fn arb_seating(n: usize)(seed in any::<u64>()) -> Arrangement {
        let mut rng = fastrand::Rng::with_seed(seed);
        Arrangement::random(&mut rng, n)
    }
}

prop_compose! {
    fn arb_profile(n: usize)(
        raw in proptest::collection::vec(-5i32..=5, n * n)
    ) -> UtilityProfile {
        let values = raw
            .into_iter()
            .enumerate()
            .map(|(k, v)| if k / n == k % n { 0.0 } else { v as f64 })
            .collect();
        UtilityProfile::from_matrix(n, values).unwrap()
    }
}

fn arb_case() -> impl Strategy<Value = (UtilityProfile, Arrangement)> {
    (3usize..9).prop_flat_map(|n| (arb_profile(n), arb_seating(n)))
}

proptest! {
    #[test]
    fn prop_swap_delta_is_exact((profile, arr) in arb_case(), i in 0usize..8, j in 0usize..8) {
        let n = arr.len();
        let (i, j) = (i % n, j % n);
        let mut swapped = arr.clone();
        swapped.swap_seats(i, j);
        let expected = welfare(&profile, &swapped) - welfare(&profile, &arr);
        prop_assert!((swap_delta(&profile, &arr, i, j) - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_found_pair_is_blocking((profile, arr) in arb_case()) {
        match find_blocking_pair(&profile, &arr) {
            Some(pair) => {
                prop_assert!(is_blocking(&profile, &arr, pair.first, pair.second));
                prop_assert!(is_blocking(&profile, &arr, pair.second, pair.first));
            }
            None => {
                for a in 0..arr.len() as AgentId {
                    for b in 0..arr.len() as AgentId {
                        prop_assert!(!is_blocking(&profile, &arr, a, b));
                    }
                }
            }
        }
    }

    #[test]
    fn prop_stability_is_relabel_free((profile, arr) in arb_case()) {
        // Rotating the table changes seat indices but nobody's neighbours.
        let mut seats = arr.seats().to_vec();
        seats.rotate_left(1);
        let rotated = Arrangement::from_seats(seats).unwrap();
        prop_assert_eq!(is_stable(&profile, &arr), is_stable(&profile, &rotated));
        prop_assert!((welfare(&profile, &arr) - welfare(&profile, &rotated)).abs() < 1e-9);
    }

    #[test]
    fn prop_repair_is_bounded((profile, arr) in arb_case()) {
        if let Some(pair) = find_blocking_pair(&profile, &arr) {
            let budget = repair_budget(arr.len(), 10);
            let report = repair_walk(&profile, &arr, pair, budget);
            prop_assert!(report.swaps <= budget);
            if let Some(fixed) = report.arrangement {
                prop_assert!(is_stable(&profile, &fixed));
            }
        }
    }

    #[test]
    fn prop_canonical_form_is_invariant((_profile, arr) in arb_case(), shift in 0usize..8) {
        let mut seats = arr.seats().to_vec();
        let n = seats.len();
        seats.rotate_left(shift % n);
        seats.reverse();
        let moved = Arrangement::from_seats(seats).unwrap();
        prop_assert_eq!(arr.canonical_form(), moved.canonical_form());
    }
}
