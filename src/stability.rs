//! Blocking-pair oracle for the seat-swap game.
//!
//! Two agents block an arrangement when trading seats strictly raises the
//! neighbour-utility sum of both. An arrangement without a blocking pair is
//! stable. All helpers here are pure functions of `(profile, arrangement)`.

use crate::arrangement::Arrangement;
use crate::core_types::{AgentId, Utility};
use crate::profile::UtilityProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two agents that would both strictly gain by trading seats.
///
/// Stored in detection order; semantically unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockingPair {
    pub first: AgentId,
    pub second: AgentId,
}

impl BlockingPair {
    pub fn new(first: AgentId, second: AgentId) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.first == agent || self.second == agent
    }

    /// Order-insensitive comparison.
    pub fn same_agents(&self, other: &BlockingPair) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl fmt::Display for BlockingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}}}",
            crate::core_types::agent_label(self.first),
            crate::core_types::agent_label(self.second)
        )
    }
}

/// What `agent` currently gets from its two neighbours.
#[inline(always)]
pub fn agent_utility(profile: &UtilityProfile, arrangement: &Arrangement, agent: AgentId) -> Utility {
    let [left, right] = arrangement.neighbors_of(agent);
    profile.utility(agent, left) + profile.utility(agent, right)
}

/// Utility of every agent, indexed by agent.
pub fn agent_utilities(profile: &UtilityProfile, arrangement: &Arrangement) -> Vec<Utility> {
    (0..arrangement.len() as AgentId)
        .map(|a| agent_utility(profile, arrangement, a))
        .collect()
}

/// Sum over all agents of their two-neighbour utility.
pub fn welfare(profile: &UtilityProfile, arrangement: &Arrangement) -> Utility {
    (0..arrangement.len())
        .map(|seat| {
            let agent = arrangement.agent_at(seat);
            let [left, right] = arrangement.neighbors_of_seat(seat);
            profile.utility(agent, left) + profile.utility(agent, right)
        })
        .sum()
}

/// Welfare change caused by swapping the occupants of seats `i` and `j`,
/// computed from the (at most six) seats whose neighbourhood changes.
pub fn swap_delta(profile: &UtilityProfile, arrangement: &Arrangement, i: usize, j: usize) -> Utility {
    if i == j {
        return 0.0;
    }

    let occupant_after = |seat: usize| -> AgentId {
        if seat == i {
            arrangement.agent_at(j)
        } else if seat == j {
            arrangement.agent_at(i)
        } else {
            arrangement.agent_at(seat)
        }
    };

    let mut touched = [usize::MAX; 6];
    let mut count = 0;
    for seat in [
        arrangement.left_seat(i),
        i,
        arrangement.right_seat(i),
        arrangement.left_seat(j),
        j,
        arrangement.right_seat(j),
    ] {
        if !touched[..count].contains(&seat) {
            touched[count] = seat;
            count += 1;
        }
    }

    let mut before = 0.0;
    let mut after = 0.0;
    for &seat in &touched[..count] {
        let left = arrangement.left_seat(seat);
        let right = arrangement.right_seat(seat);

        let agent = arrangement.agent_at(seat);
        before += profile.utility(agent, arrangement.agent_at(left))
            + profile.utility(agent, arrangement.agent_at(right));

        let moved = occupant_after(seat);
        after += profile.utility(moved, occupant_after(left))
            + profile.utility(moved, occupant_after(right));
    }

    after - before
}

/// Utility `agent` would get after moving into the seat held by `target`.
///
/// When the two are adjacent, `agent` keeps `target` as a neighbour instead
/// of inheriting itself.
#[inline(always)]
fn utility_after_move(
    profile: &UtilityProfile,
    arrangement: &Arrangement,
    agent: AgentId,
    target: AgentId,
) -> Utility {
    let [left, right] = arrangement.neighbors_of(target);
    if agent == left {
        profile.utility(agent, right) + profile.utility(agent, target)
    } else if agent == right {
        profile.utility(agent, left) + profile.utility(agent, target)
    } else {
        profile.utility(agent, left) + profile.utility(agent, right)
    }
}

/// True when `a` and `b` would both strictly gain by trading seats.
pub fn is_blocking(profile: &UtilityProfile, arrangement: &Arrangement, a: AgentId, b: AgentId) -> bool {
    if a == b {
        return false;
    }
    utility_after_move(profile, arrangement, a, b) > agent_utility(profile, arrangement, a)
        && utility_after_move(profile, arrangement, b, a) > agent_utility(profile, arrangement, b)
}

/// First blocking pair, scanning seats in order and, for each, candidate
/// partners in seat order. `None` means the arrangement is stable.
pub fn find_blocking_pair(profile: &UtilityProfile, arrangement: &Arrangement) -> Option<BlockingPair> {
    for &agent in arrangement.seats() {
        let current = agent_utility(profile, arrangement, agent);

        for &other in arrangement.seats() {
            if other == agent {
                continue;
            }
            if utility_after_move(profile, arrangement, agent, other) <= current {
                continue;
            }
            let other_current = agent_utility(profile, arrangement, other);
            if utility_after_move(profile, arrangement, other, agent) > other_current {
                return Some(BlockingPair::new(agent, other));
            }
        }
    }
    None
}

/// Every blocking pair, each unordered pair reported once.
pub fn blocking_pairs(profile: &UtilityProfile, arrangement: &Arrangement) -> Vec<BlockingPair> {
    let seats = arrangement.seats();
    let mut pairs = Vec::new();
    for (i, &a) in seats.iter().enumerate() {
        for &b in &seats[i + 1..] {
            if is_blocking(profile, arrangement, a, b) {
                pairs.push(BlockingPair::new(a, b));
            }
        }
    }
    pairs
}

pub fn is_stable(profile: &UtilityProfile, arrangement: &Arrangement) -> bool {
    find_blocking_pair(profile, arrangement).is_none()
}
