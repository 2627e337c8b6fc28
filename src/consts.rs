/// Smallest table the seat-swap game is defined for.
pub const MIN_AGENTS: usize = 3;

/// Initial temperature is this multiple of the agent count.
/// 2n bounds the total welfare reachable under the bundled scoring schemes.
pub const DEFAULT_INITIAL_TEMP_MULTIPLIER: f64 = 2.0;

/// Geometric cooling factor applied once per annealing round.
pub const DEFAULT_COOLING_RATE: f64 = 0.99;

/// Below this temperature worsening moves are never accepted.
pub const DEFAULT_MIN_TEMPERATURE: f64 = 0.001;

/// Consecutive unchanged rounds after which a trial is considered converged.
pub const DEFAULT_CONVERGENCE_PATIENCE: usize = 15;

/// Hard cap on annealing rounds per trial.
pub const DEFAULT_MAX_ROUNDS: usize = 10_000;

/// Independent annealing trials per solver phase.
pub const DEFAULT_TRIALS_PER_PHASE: usize = 10;

/// Exhaustive verification runs only for `n` strictly below this.
pub const DEFAULT_BRUTE_FORCE_THRESHOLD: usize = 12;

/// Repair walks are bounded by this multiple of the agent count.
pub const DEFAULT_REPAIR_FACTOR: usize = 100;

/// Welfare values closer than this are treated as ties.
pub const WELFARE_EPSILON: f64 = 1e-9;

/// Largest table the exhaustive studies will enumerate.
pub const MAX_EXHAUSTIVE_AGENTS: usize = 12;

/// Welfare studies check every ranking profile up to this many agents and
/// sample above it.
pub const ALL_PROFILES_MAX_AGENTS: usize = 5;
