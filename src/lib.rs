pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::engine::CostComparisonEngine;
pub use domain::comparison::{ComparisonResult, CostBreakdown, TimelinePoint};
pub use domain::fee_schedule::{FeeSchedule, ProcessorId};
pub use domain::inputs::{BusinessInputs, Preset};
pub use error::{CalculatorError, Result};
