use crate::consts::MIN_AGENTS;
use crate::core_types::{AgentId, Utility};
use crate::error::{SeatingError, SfResult};
use fastrand::Rng;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// One agent's strict preference order over every other agent, favourite first.
pub type Ranking = Vec<AgentId>;

/// Rankings for every agent, indexed by agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankingProfile {
    pub rankings: Vec<Ranking>,
}

impl RankingProfile {
    pub fn new(rankings: Vec<Ranking>) -> SfResult<Self> {
        let profile = Self { rankings };
        profile.validate()?;
        Ok(profile)
    }

    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    pub fn validate(&self) -> SfResult<()> {
        let n = self.rankings.len();
        if n < MIN_AGENTS {
            return Err(SeatingError::Validation(format!(
                "A table needs at least {} agents, got {}",
                MIN_AGENTS, n
            )));
        }
        if n > AgentId::MAX as usize {
            return Err(SeatingError::Validation(format!(
                "Too many agents: {}",
                n
            )));
        }

        for (agent, ranking) in self.rankings.iter().enumerate() {
            if ranking.len() != n - 1 {
                return Err(SeatingError::Validation(format!(
                    "Ranking of agent {} has {} entries, expected {}",
                    agent,
                    ranking.len(),
                    n - 1
                )));
            }
            let mut seen = vec![false; n];
            for &other in ranking {
                let o = other as usize;
                if o >= n {
                    return Err(SeatingError::Validation(format!(
                        "Ranking of agent {} names unknown agent {}",
                        agent, other
                    )));
                }
                if o == agent {
                    return Err(SeatingError::Validation(format!(
                        "Agent {} ranks itself",
                        agent
                    )));
                }
                if seen[o] {
                    return Err(SeatingError::Validation(format!(
                        "Ranking of agent {} repeats agent {}",
                        agent, other
                    )));
                }
                seen[o] = true;
            }
        }
        Ok(())
    }

    /// Reads `{"rankings": [[...], ...]}` from disk and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let profile: RankingProfile = serde_json::from_str(&content)?;
        profile.validate()?;
        Ok(profile)
    }
}

/// Turns a rank position into a cardinal utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScoringScheme {
    /// Linear scores `n-1, n-2, ..., 1`, normalised to sum to 1.
    Normalized,
    /// Harmonic scores `1, 1/2, ..., 1/(n-1)`, normalised to sum to 1.
    Harmonic,
    /// The favourite is worth 1, everyone else 0.
    Binary,
}

impl ScoringScheme {
    /// Utilities for rank positions `0..n-1` of an `n`-agent table.
    pub fn scores(self, n: usize) -> Vec<Utility> {
        let others = n.saturating_sub(1);
        match self {
            ScoringScheme::Normalized => {
                let total = (others * (others + 1) / 2) as Utility;
                (0..others)
                    .map(|i| (others - i) as Utility / total)
                    .collect()
            }
            ScoringScheme::Harmonic => {
                let raw: Vec<Utility> = (0..others).map(|i| 1.0 / (i + 1) as Utility).collect();
                let total: Utility = raw.iter().sum();
                raw.into_iter().map(|s| s / total).collect()
            }
            ScoringScheme::Binary => (0..others)
                .map(|i| if i == 0 { 1.0 } else { 0.0 })
                .collect(),
        }
    }
}

/// Dense `n x n` utility table; row `a` holds what agent `a` gets from each neighbour.
///
/// Built once per instance and shared read-only (behind an `Arc`) by every trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UtilityMatrix")]
pub struct UtilityProfile {
    n: usize,
    values: Vec<Utility>,
}

#[derive(Deserialize)]
struct UtilityMatrix {
    n: usize,
    values: Vec<Utility>,
}

impl TryFrom<UtilityMatrix> for UtilityProfile {
    type Error = SeatingError;

    fn try_from(matrix: UtilityMatrix) -> SfResult<Self> {
        Self::from_matrix(matrix.n, matrix.values)
    }
}

impl UtilityProfile {
    pub fn from_matrix(n: usize, values: Vec<Utility>) -> SfResult<Self> {
        if n < MIN_AGENTS {
            return Err(SeatingError::Validation(format!(
                "A table needs at least {} agents, got {}",
                MIN_AGENTS, n
            )));
        }
        if values.len() != n * n {
            return Err(SeatingError::Validation(format!(
                "Utility matrix for {} agents needs {} values, got {}",
                n,
                n * n,
                values.len()
            )));
        }
        if let Some(bad) = values.iter().position(|v| !v.is_finite()) {
            return Err(SeatingError::Validation(format!(
                "Utility of agent {} toward agent {} is not finite",
                bad / n,
                bad % n
            )));
        }
        if let Some(a) = (0..n).find(|&a| values[a * n + a] != 0.0) {
            return Err(SeatingError::Validation(format!(
                "Agent {} has a non-zero utility toward itself",
                a
            )));
        }
        Ok(Self { n, values })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// What `agent` derives from sitting next to `other`.
    #[inline(always)]
    pub fn utility(&self, agent: AgentId, other: AgentId) -> Utility {
        self.values[agent as usize * self.n + other as usize]
    }

    pub fn row(&self, agent: AgentId) -> &[Utility] {
        let start = agent as usize * self.n;
        &self.values[start..start + self.n]
    }
}

/// Applies `scheme` to every agent's ranking.
pub fn build_utility_profile(
    rankings: &RankingProfile,
    scheme: ScoringScheme,
) -> SfResult<UtilityProfile> {
    rankings.validate()?;
    let n = rankings.len();
    let scores = scheme.scores(n);
    let mut values = vec![0.0; n * n];

    for (agent, ranking) in rankings.rankings.iter().enumerate() {
        for (rank, &other) in ranking.iter().enumerate() {
            values[agent * n + other as usize] = scores[rank];
        }
    }

    UtilityProfile::from_matrix(n, values)
}

/// Every agent ranks the others in a uniformly random order.
pub fn random_ranking_profile(rng: &mut Rng, n: usize) -> SfResult<RankingProfile> {
    let rankings = (0..n)
        .map(|agent| {
            let mut others: Ranking = (0..n as AgentId)
                .filter(|&o| o as usize != agent)
                .collect();
            rng.shuffle(&mut others);
            others
        })
        .collect();
    RankingProfile::new(rankings)
}

/// Agent `i` prefers `i+1`, then `i+2`, ... wrapping around the table.
pub fn rotational_ranking_profile(n: usize) -> SfResult<RankingProfile> {
    let rankings = (0..n)
        .map(|agent| {
            (1..n)
                .map(|offset| ((agent + offset) % n) as AgentId)
                .collect()
        })
        .collect();
    RankingProfile::new(rankings)
}

/// Every ranking profile of an `n`-agent table, `((n-1)!)^n` in total.
///
/// Agent 0's ranking varies slowest. Only meaningful for small `n`.
pub fn all_ranking_profiles(n: usize) -> impl Iterator<Item = RankingProfile> {
    let others = n.saturating_sub(1);
    (0..n)
        .map(move |agent| {
            (0..n as AgentId)
                .filter(|&o| o as usize != agent)
                .permutations(others)
                .collect::<Vec<Ranking>>()
        })
        .multi_cartesian_product()
        .map(|rankings| RankingProfile { rankings })
}

/// Size of [`all_ranking_profiles`], saturating at `u64::MAX`.
pub fn ranking_profile_count(n: usize) -> u64 {
    let per_agent = (1..n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k));
    per_agent
        .and_then(|p| (0..n).try_fold(1u64, |acc, _| acc.checked_mul(p)))
        .unwrap_or(u64::MAX)
}
