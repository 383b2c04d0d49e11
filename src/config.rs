use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_NUM_DAYS: u32 = 5;
pub const DEFAULT_SLOTS_PER_DAY: u32 = 3;
pub const DEFAULT_MAX_OVERFLOW_PERCENT: f64 = 10.0;

pub const ADDR_ENV: &str = "EXAM_SCHEDULER_ADDR";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Objectives that steer the greedy pass. Several may be set; each consumer
/// applies its own precedence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationSettings {
    pub balance_across_days: bool,
    pub minimize_days_used: bool,
    pub minimize_rooms_used: bool,
    pub place_difficult_early: bool,
    pub place_difficult_late: bool,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            balance_across_days: true,
            minimize_days_used: false,
            minimize_rooms_used: false,
            place_difficult_early: false,
            place_difficult_late: false,
        }
    }
}

/// Which soft rules may be broken, and how often.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstraintRelaxations {
    pub allow_consecutive_slots: bool,
    pub max_consecutive_violations: u32,
    pub allow_three_per_day: bool,
    pub max_three_per_day_violations: u32,
    pub allow_capacity_overflow: bool,
    pub max_capacity_overflow_percent: f64,
}

impl Default for ConstraintRelaxations {
    fn default() -> Self {
        Self {
            allow_consecutive_slots: false,
            max_consecutive_violations: 0,
            allow_three_per_day: false,
            max_three_per_day_violations: 0,
            allow_capacity_overflow: false,
            max_capacity_overflow_percent: DEFAULT_MAX_OVERFLOW_PERCENT,
        }
    }
}

/// Shape of the exam period plus the knobs for one run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    pub num_days: u32,
    pub slots_per_day: u32,
    pub optimization: OptimizationSettings,
    pub relaxations: ConstraintRelaxations,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            num_days: DEFAULT_NUM_DAYS,
            slots_per_day: DEFAULT_SLOTS_PER_DAY,
            optimization: OptimizationSettings::default(),
            relaxations: ConstraintRelaxations::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn new(num_days: u32, slots_per_day: u32) -> Self {
        Self {
            num_days,
            slots_per_day,
            ..Self::default()
        }
    }

    pub fn with_optimization(mut self, optimization: OptimizationSettings) -> Self {
        self.optimization = optimization;
        self
    }

    pub fn with_relaxations(mut self, relaxations: ConstraintRelaxations) -> Self {
        self.relaxations = relaxations;
        self
    }

    /// Upper bound on how many courses can ever be placed.
    pub fn total_slots(&self) -> usize {
        self.num_days as usize * self.slots_per_day as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_days == 0 {
            return Err(ConfigError::NoDays);
        }
        if self.slots_per_day == 0 {
            return Err(ConfigError::NoSlots);
        }
        let pct = self.relaxations.max_capacity_overflow_percent;
        if !pct.is_finite() || pct < 0.0 {
            return Err(ConfigError::InvalidOverflowPercent(pct));
        }
        Ok(())
    }
}

/// Settings for the HTTP binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Reads the bind address from `EXAM_SCHEDULER_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let addr = raw
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(raw.to_string()))?;
        Ok(Self { addr })
    }
}
