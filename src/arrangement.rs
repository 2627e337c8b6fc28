use crate::consts::MIN_AGENTS;
use crate::core_types::{agent_label, AgentId};
use crate::error::{SeatingError, SfResult};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A circular seating: `seats[i]` is the agent in seat `i`, whose neighbours sit
/// in seats `i-1` and `i+1` (mod n).
///
/// `positions` is the inverse map (agent -> seat) and is kept in sync by every
/// mutation, so agent lookups are O(1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<AgentId>", into = "Vec<AgentId>")]
pub struct Arrangement {
    seats: Vec<AgentId>,
    positions: Vec<usize>,
}

impl Arrangement {
    /// Validates that `seats` is a permutation of `0..seats.len()`.
    pub fn from_seats(seats: Vec<AgentId>) -> SfResult<Self> {
        let n = seats.len();
        if n < MIN_AGENTS {
            return Err(SeatingError::InvalidArrangement(format!(
                "{} seats is below the minimum of {}",
                n, MIN_AGENTS
            )));
        }

        let mut positions = vec![usize::MAX; n];
        for (seat, &agent) in seats.iter().enumerate() {
            let a = agent as usize;
            if a >= n {
                return Err(SeatingError::InvalidArrangement(format!(
                    "agent {} does not exist at a table of {}",
                    agent, n
                )));
            }
            if positions[a] != usize::MAX {
                return Err(SeatingError::InvalidArrangement(format!(
                    "agent {} is seated twice",
                    agent_label(agent)
                )));
            }
            positions[a] = seat;
        }

        Ok(Self { seats, positions })
    }

    /// Agents seated in index order.
    pub fn identity(n: usize) -> Self {
        let seats: Vec<AgentId> = (0..n as AgentId).collect();
        let positions = (0..n).collect();
        Self { seats, positions }
    }

    /// A uniformly random permutation of `n` agents.
    pub fn random(rng: &mut Rng, n: usize) -> Self {
        let mut seats: Vec<AgentId> = (0..n as AgentId).collect();
        rng.shuffle(&mut seats);
        let mut positions = vec![0; n];
        for (seat, &agent) in seats.iter().enumerate() {
            positions[agent as usize] = seat;
        }
        Self { seats, positions }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    #[inline(always)]
    pub fn seats(&self) -> &[AgentId] {
        &self.seats
    }

    #[inline(always)]
    pub fn agent_at(&self, seat: usize) -> AgentId {
        self.seats[seat]
    }

    #[inline(always)]
    pub fn seat_of(&self, agent: AgentId) -> usize {
        self.positions[agent as usize]
    }

    #[inline(always)]
    pub fn left_seat(&self, seat: usize) -> usize {
        (seat + self.len() - 1) % self.len()
    }

    #[inline(always)]
    pub fn right_seat(&self, seat: usize) -> usize {
        (seat + 1) % self.len()
    }

    /// `[left, right]` occupants around `seat`.
    #[inline(always)]
    pub fn neighbors_of_seat(&self, seat: usize) -> [AgentId; 2] {
        [
            self.seats[self.left_seat(seat)],
            self.seats[self.right_seat(seat)],
        ]
    }

    /// `[left, right]` occupants around wherever `agent` sits.
    #[inline(always)]
    pub fn neighbors_of(&self, agent: AgentId) -> [AgentId; 2] {
        self.neighbors_of_seat(self.seat_of(agent))
    }

    #[inline(always)]
    pub fn are_adjacent(&self, a: AgentId, b: AgentId) -> bool {
        let [left, right] = self.neighbors_of(a);
        left == b || right == b
    }

    #[inline(always)]
    pub fn swap_seats(&mut self, i: usize, j: usize) {
        self.seats.swap(i, j);
        self.positions[self.seats[i] as usize] = i;
        self.positions[self.seats[j] as usize] = j;
    }

    pub fn swap_agents(&mut self, a: AgentId, b: AgentId) {
        let (i, j) = (self.seat_of(a), self.seat_of(b));
        self.swap_seats(i, j);
    }

    /// The lexicographically smallest seat sequence among all rotations of
    /// this seating and of its reversal.
    pub fn canonical_form(&self) -> Vec<AgentId> {
        let n = self.len();
        let mut best: Option<Vec<AgentId>> = None;

        for reversed in [false, true] {
            for start in 0..n {
                let candidate: Vec<AgentId> = (0..n)
                    .map(|k| {
                        let idx = if reversed {
                            (start + n - k) % n
                        } else {
                            (start + k) % n
                        };
                        self.seats[idx]
                    })
                    .collect();

                if best.as_ref().map_or(true, |b| candidate < *b) {
                    best = Some(candidate);
                }
            }
        }

        best.unwrap_or_default()
    }

    /// Same seating up to rotation and reflection.
    pub fn is_equivalent(&self, other: &Arrangement) -> bool {
        self.len() == other.len() && self.canonical_form() == other.canonical_form()
    }

    pub fn into_seats(self) -> Vec<AgentId> {
        self.seats
    }
}

impl TryFrom<Vec<AgentId>> for Arrangement {
    type Error = SeatingError;

    fn try_from(seats: Vec<AgentId>) -> Result<Self, Self::Error> {
        Arrangement::from_seats(seats)
    }
}

impl From<Arrangement> for Vec<AgentId> {
    fn from(arrangement: Arrangement) -> Self {
        arrangement.seats
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.seats.iter().map(|&a| agent_label(a)).collect();
        write!(f, "({})", labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_agent() {
        let err = Arrangement::from_seats(vec![0, 1, 1, 3]).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidArrangement(_)));
    }

    #[test]
    fn rejects_missing_agent() {
        let err = Arrangement::from_seats(vec![0, 1, 4, 3]).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidArrangement(_)));
    }

    #[test]
    fn neighbors_wrap_around() {
        let arr = Arrangement::identity(5);
        assert_eq!(arr.neighbors_of_seat(0), [4, 1]);
        assert_eq!(arr.neighbors_of_seat(4), [3, 0]);
        assert_eq!(arr.neighbors_of(2), [1, 3]);
    }

    #[test]
    fn swap_keeps_positions_in_sync() {
        let mut arr = Arrangement::identity(6);
        arr.swap_agents(1, 4);
        assert_eq!(arr.seats(), &[0, 4, 2, 3, 1, 5]);
        assert_eq!(arr.seat_of(4), 1);
        assert_eq!(arr.seat_of(1), 4);
    }

    #[test]
    fn canonical_form_collapses_rotation_and_reflection() {
        let a = Arrangement::from_seats(vec![2, 0, 3, 1]).unwrap();
        let b = Arrangement::from_seats(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(a.canonical_form(), vec![0, 2, 1, 3]);
        assert!(a.is_equivalent(&b));
    }
}
