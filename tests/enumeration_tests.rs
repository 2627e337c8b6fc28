use rstest::rstest;
use seatforge::arrangement::Arrangement;
use seatforge::core_types::AgentId;
use seatforge::enumerate::{
    canonical_arrangement_count, canonical_arrangements, enumerate_canonical_arrangements,
};
use std::collections::HashSet;

#[rstest]
#[case(3, 1)]
#[case(4, 3)]
#[case(5, 12)]
#[case(6, 60)]
#[case(7, 360)]
fn test_canonical_count(#[case] n: usize, #[case] expected: usize) {
    let all = enumerate_canonical_arrangements(n);
    assert_eq!(all.len(), expected);
    assert_eq!(canonical_arrangement_count(n), expected as u64);
    assert_eq!(canonical_arrangements(n).count(), expected);
}

#[rstest]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
#[case(7)]
fn test_every_element_is_a_permutation(#[case] n: usize) {
    for arr in enumerate_canonical_arrangements(n) {
        let mut seats: Vec<AgentId> = arr.seats().to_vec();
        seats.sort_unstable();
        let expected: Vec<AgentId> = (0..n as AgentId).collect();
        assert_eq!(seats, expected);
        assert!(Arrangement::from_seats(arr.seats().to_vec()).is_ok());
    }
}

#[rstest]
#[case(4)]
#[case(5)]
#[case(6)]
#[case(7)]
fn test_no_two_elements_equivalent(#[case] n: usize) {
    let all = enumerate_canonical_arrangements(n);
    let keys: HashSet<Vec<AgentId>> = all.iter().map(|a| a.canonical_form()).collect();
    assert_eq!(keys.len(), all.len());

    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert!(!a.is_equivalent(b), "{} ~ {}", a, b);
        }
    }
}

#[test]
fn test_every_rotation_and_reflection_is_covered() {
    let n = 5;
    let keys: HashSet<Vec<AgentId>> = enumerate_canonical_arrangements(n)
        .iter()
        .map(|a| a.canonical_form())
        .collect();

    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..50 {
        let arr = Arrangement::random(&mut rng, n);
        assert!(keys.contains(&arr.canonical_form()));
    }
}

#[test]
fn test_below_minimum_is_empty() {
    assert!(enumerate_canonical_arrangements(2).is_empty());
    assert_eq!(canonical_arrangements(2).count(), 0);
    assert_eq!(canonical_arrangement_count(0), 0);
}
