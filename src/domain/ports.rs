use super::fee_schedule::{FeeSchedule, ProcessorId};
use crate::error::Result;

/// Source of fee schedules for the comparison engine.
///
/// Implementations are read-only once built, so a registry can be shared between
/// threads and queried without locking.
pub trait FeeScheduleRegistry: Send + Sync {
    /// Resolves `id`, failing with `UnknownProcessor` if it is not registered.
    fn lookup(&self, id: ProcessorId) -> Result<&FeeSchedule>;

    /// Every registered processor id, in a stable order.
    fn processor_ids(&self) -> Vec<ProcessorId>;
}

pub type FeeScheduleRegistryBox = Box<dyn FeeScheduleRegistry>;

impl<T: FeeScheduleRegistry + ?Sized> FeeScheduleRegistry for Box<T> {
    fn lookup(&self, id: ProcessorId) -> Result<&FeeSchedule> {
        (**self).lookup(id)
    }

    fn processor_ids(&self) -> Vec<ProcessorId> {
        (**self).processor_ids()
    }
}
