use crate::consts::*;
use crate::error::{SeatingError, SfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub anneal: AnnealParams,
    #[command(flatten)]
    pub solver: SolverParams,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealParams {
    /// Starting temperature is this many times the agent count.
    #[arg(long, default_value_t = DEFAULT_INITIAL_TEMP_MULTIPLIER)]
    pub initial_temp_multiplier: f64,
    #[arg(long, default_value_t = DEFAULT_COOLING_RATE)]
    pub cooling_rate: f64,
    #[arg(long, default_value_t = DEFAULT_MIN_TEMPERATURE)]
    pub min_temperature: f64,
    /// Consecutive unchanged rounds that count as convergence.
    #[arg(long, default_value_t = DEFAULT_CONVERGENCE_PATIENCE)]
    pub convergence_patience: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: usize,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            initial_temp_multiplier: DEFAULT_INITIAL_TEMP_MULTIPLIER,
            cooling_rate: DEFAULT_COOLING_RATE,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            convergence_patience: DEFAULT_CONVERGENCE_PATIENCE,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl AnnealParams {
    /// Annealing that never accepts a worsening move: a pure hill climb.
    pub fn zero_temperature() -> Self {
        Self {
            initial_temp_multiplier: 0.0,
            ..Default::default()
        }
    }

    #[inline(always)]
    pub fn initial_temperature(&self, n: usize) -> f64 {
        self.initial_temp_multiplier * n as f64
    }

    pub fn validate(&self) -> SfResult<()> {
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(SeatingError::Config(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            )));
        }
        if !(self.initial_temp_multiplier >= 0.0 && self.initial_temp_multiplier.is_finite()) {
            return Err(SeatingError::Config(format!(
                "initial_temp_multiplier must be a non-negative number, got {}",
                self.initial_temp_multiplier
            )));
        }
        if !(self.min_temperature >= 0.0 && self.min_temperature.is_finite()) {
            return Err(SeatingError::Config(format!(
                "min_temperature must be a non-negative number, got {}",
                self.min_temperature
            )));
        }
        if self.convergence_patience == 0 {
            return Err(SeatingError::Config(
                "convergence_patience must be at least 1".to_string(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(SeatingError::Config(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Independent annealing trials per phase.
    #[arg(long, default_value_t = DEFAULT_TRIALS_PER_PHASE)]
    pub trials_per_phase: usize,
    /// Run the blocking-pair repair walk on unstable trial results.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub repair: bool,
    /// Repeat the search targeting minimum welfare when the maximum phase fails.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub min_phase: bool,
    /// Exhaustive verification runs only when n is below this.
    #[arg(long, default_value_t = DEFAULT_BRUTE_FORCE_THRESHOLD)]
    pub brute_force_threshold: usize,
    /// Repair walks stop after this many swaps per agent.
    #[arg(long, default_value_t = DEFAULT_REPAIR_FACTOR)]
    pub repair_factor: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            trials_per_phase: DEFAULT_TRIALS_PER_PHASE,
            repair: true,
            min_phase: true,
            brute_force_threshold: DEFAULT_BRUTE_FORCE_THRESHOLD,
            repair_factor: DEFAULT_REPAIR_FACTOR,
        }
    }
}

impl SolverParams {
    pub fn validate(&self) -> SfResult<()> {
        if self.trials_per_phase == 0 {
            return Err(SeatingError::Config(
                "trials_per_phase must be at least 1".to_string(),
            ));
        }
        if self.repair_factor == 0 {
            return Err(SeatingError::Config(
                "repair_factor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> SfResult<()> {
        self.anneal.validate()?;
        self.solver.validate()
    }

    /// Copies every value the user typed on the command line over `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field;
                }
            };
        }

        update_if_present!(anneal, initial_temp_multiplier);
        update_if_present!(anneal, cooling_rate);
        update_if_present!(anneal, min_temperature);
        update_if_present!(anneal, convergence_patience);
        update_if_present!(anneal, max_rounds);

        update_if_present!(solver, trials_per_phase);
        update_if_present!(solver, repair);
        update_if_present!(solver, min_phase);
        update_if_present!(solver, brute_force_threshold);
        update_if_present!(solver, repair_factor);
    }
}
