//! Canonical enumeration of circular seatings.
//!
//! Two seatings are the same when one is a rotation or reflection of the
//! other, so `n` agents admit `(n-1)!/2` distinct seatings for `n >= 3`.
//! Everything here is factorial in `n`; callers gate it behind a size limit.

use crate::arrangement::Arrangement;
use crate::consts::MIN_AGENTS;
use crate::core_types::AgentId;
use fnv::FnvHashSet;
use itertools::Itertools;

/// `(n-1)!/2`, the number of distinct circular seatings of `n` agents.
/// Saturates at `u64::MAX` once the count no longer fits.
pub fn canonical_arrangement_count(n: usize) -> u64 {
    if n < MIN_AGENTS {
        return 0;
    }
    (1..n as u64)
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .map_or(u64::MAX, |f| f / 2)
}

/// Every distinct seating of agents `0..n`, one representative per
/// rotation/reflection class, sorted by canonical form.
///
/// Walks all `n!` permutations and deduplicates by canonical key.
pub fn enumerate_canonical_arrangements(n: usize) -> Vec<Arrangement> {
    if n < MIN_AGENTS {
        return Vec::new();
    }

    let mut keys: FnvHashSet<Vec<AgentId>> = FnvHashSet::default();
    for perm in (0..n as AgentId).permutations(n) {
        keys.insert(reseat(Arrangement::identity(n), &perm).canonical_form());
    }

    let mut keys: Vec<Vec<AgentId>> = keys.into_iter().collect();
    keys.sort_unstable();
    keys.into_iter().map(|k| reseat(Arrangement::identity(n), &k)).collect()
}

/// Streams the same set as [`enumerate_canonical_arrangements`] without
/// holding it in memory.
///
/// A canonical form always starts with agent 0, and among the two directions
/// around the table the smaller second element wins, so the representatives
/// are exactly `[0, p..]` with `p[0] < p[last]`.
pub fn canonical_arrangements(n: usize) -> impl Iterator<Item = Arrangement> {
    let rest: Vec<AgentId> = if n < MIN_AGENTS {
        Vec::new()
    } else {
        (1..n as AgentId).collect()
    };
    let k = rest.len();

    rest.into_iter()
        .permutations(k)
        .filter(|p| !p.is_empty() && p[0] < p[p.len() - 1])
        .map(move |p| {
            let mut seats = Vec::with_capacity(n);
            seats.push(0);
            seats.extend(p);
            reseat(Arrangement::identity(n), &seats)
        })
}

fn reseat(mut arrangement: Arrangement, seats: &[AgentId]) -> Arrangement {
    for (target_seat, &agent) in seats.iter().enumerate() {
        let current = arrangement.seat_of(agent);
        if current != target_seat {
            arrangement.swap_seats(current, target_seat);
        }
    }
    arrangement
}
