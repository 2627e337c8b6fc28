use crate::arrangement::Arrangement;
use crate::consts::WELFARE_EPSILON;
use crate::core_types::Utility;
use crate::enumerate::canonical_arrangements;
use crate::profile::UtilityProfile;
use crate::stability::{is_stable, welfare};
use rayon::prelude::*;

/// First stable canonical arrangement, or `None` if the profile has none.
pub fn find_stable_arrangement_exhaustive(profile: &UtilityProfile) -> Option<Arrangement> {
    canonical_arrangements(profile.len()).find(|arr| is_stable(profile, arr))
}

/// Number of stable canonical arrangements.
pub fn count_stable_arrangements(profile: &UtilityProfile) -> usize {
    canonical_arrangements(profile.len())
        .par_bridge()
        .filter(|arr| is_stable(profile, arr))
        .count()
}

/// Highest welfare among `arrangements` and every arrangement reaching it.
///
/// Consumes the arrangements as they come, so a streaming
/// [`canonical_arrangements`] never has to be materialized.
pub fn welfare_optimal_arrangements<I>(
    profile: &UtilityProfile,
    arrangements: I,
) -> (Utility, Vec<Arrangement>)
where
    I: IntoIterator<Item = Arrangement>,
{
    let mut best = Utility::NEG_INFINITY;
    let mut optimal: Vec<Arrangement> = Vec::new();

    for arr in arrangements {
        let w = welfare(profile, &arr);
        if w > best + WELFARE_EPSILON {
            best = w;
            optimal.clear();
            optimal.push(arr);
        } else if (w - best).abs() <= WELFARE_EPSILON {
            optimal.push(arr);
        }
    }

    (best, optimal)
}

/// True when at least one welfare-maximizing arrangement is stable.
pub fn max_welfare_is_stable<I>(profile: &UtilityProfile, arrangements: I) -> bool
where
    I: IntoIterator<Item = Arrangement>,
{
    let (_, optimal) = welfare_optimal_arrangements(profile, arrangements);
    optimal.iter().any(|arr| is_stable(profile, arr))
}
