//! Greedy exam timetabling: places each course into a (day, slot, classroom)
//! under hard student-conflict rules and budgeted soft relaxations.

pub mod config;
pub mod constraints;
pub mod data;
pub mod days;
pub mod enrollment;
pub mod error;
pub mod ledger;
pub mod priority;
pub mod rooms;
pub mod server;
pub mod solver;
pub mod state;

pub use config::SchedulerConfig;
pub use data::{ScheduleRequest, ScheduleResult};
pub use error::ConfigError;
pub use solver::{AllocationStrategy, GreedyAllocator, solve, solve_with};
