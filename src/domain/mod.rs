//! Domain model: money, fee schedules, business inputs and comparison results.

pub mod comparison;
pub mod fee_schedule;
pub mod inputs;
pub mod money;
pub mod ports;
