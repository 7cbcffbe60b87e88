use crate::domain::fee_schedule::{FeeSchedule, ProcessorId};
use crate::domain::ports::FeeScheduleRegistry;
use crate::error::{CalculatorError, Result};
use crate::infrastructure::reference::reference_schedules;
use std::collections::BTreeMap;
use tracing::debug;

/// An immutable in-memory table of fee schedules.
///
/// Backed by a `BTreeMap<ProcessorId, FeeSchedule>` so enumeration order is stable.
/// Once built it is never mutated, which makes it safe to share across threads.
#[derive(Debug, Clone)]
pub struct InMemoryRegistry {
    schedules: BTreeMap<ProcessorId, FeeSchedule>,
}

impl InMemoryRegistry {
    /// The registry with the built-in reference rates.
    pub fn reference() -> Self {
        let schedules = reference_schedules()
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        Self { schedules }
    }

    /// Builds a registry from caller-supplied schedules.
    ///
    /// Every schedule is validated, and an id may appear only once.
    pub fn from_schedules(schedules: impl IntoIterator<Item = FeeSchedule>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for schedule in schedules {
            schedule.validate()?;
            let id = schedule.id;
            if table.insert(id, schedule).is_some() {
                return Err(CalculatorError::InvalidInput(format!(
                    "duplicate fee schedule for '{id}'"
                )));
            }
        }
        debug!(count = table.len(), "loaded fee schedules");
        Ok(Self { schedules: table })
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::reference()
    }
}

impl FeeScheduleRegistry for InMemoryRegistry {
    fn lookup(&self, id: ProcessorId) -> Result<&FeeSchedule> {
        self.schedules
            .get(&id)
            .ok_or_else(|| CalculatorError::UnknownProcessor(id.to_string()))
    }

    fn processor_ids(&self) -> Vec<ProcessorId> {
        self.schedules.keys().copied().collect()
    }
}
