pub mod arrangement;
pub mod config;
pub mod consts;
pub mod core_types;
pub mod enumerate;
pub mod error;
pub mod exhaustive;
pub mod experiment;
pub mod optimizer;
pub mod profile;
pub mod repair;
pub mod solver;
pub mod stability;

pub use crate::arrangement::Arrangement;
pub use crate::core_types::{agent_label, AgentId, Objective, Utility};
pub use crate::error::{SeatingError, SfResult};
pub use crate::profile::{build_utility_profile, RankingProfile, ScoringScheme, UtilityProfile};
pub use crate::solver::{Phase, SolveResult, SolverConfig, StableSeatingSolver};
pub use crate::stability::{find_blocking_pair, is_stable, BlockingPair};
