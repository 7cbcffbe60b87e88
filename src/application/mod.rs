//! Application layer: the cost comparison engine.
//!
//! `CostComparisonEngine` is the single entry point callers use. It resolves fee
//! schedules through the `FeeScheduleRegistry` port and returns a complete
//! `ComparisonResult` or an error.

pub mod engine;
