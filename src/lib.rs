//! Simulated blood-glucose dashboard engine: a rule-based 2-hour
//! prediction, a rolling 11-slot chart series, and a spike alert, driven by
//! logged readings, meals, and activity.

pub mod constants;
pub mod invariants;
pub mod jitter;
pub mod logic;
pub mod replay;
pub mod session;
pub mod simulator;
pub mod types;
