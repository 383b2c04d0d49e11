use thiserror::Error;

/// Rejected configuration. Distinct from any scheduling outcome: a run that
/// cannot place every course still succeeds and reports it as violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("exam period must have at least one day")]
    NoDays,

    #[error("each day must have at least one slot")]
    NoSlots,

    #[error("maximum capacity overflow must be a non-negative percentage, got {0}")]
    InvalidOverflowPercent(f64),

    #[error("invalid bind address: {0}")]
    InvalidAddress(String),
}
