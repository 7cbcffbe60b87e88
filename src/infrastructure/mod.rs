//! Registry implementations.

pub mod in_memory;
pub mod reference;
