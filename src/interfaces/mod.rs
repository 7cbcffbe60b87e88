//! Adapters between the engine and the outside world: CSV rate tables in,
//! reports out.

pub mod csv;
pub mod report;
