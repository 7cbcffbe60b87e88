use crate::domain::fee_schedule::FeeSchedule;
use crate::error::{CalculatorError, Result};
use crate::infrastructure::in_memory::InMemoryRegistry;
use std::io::Read;

/// Reads fee schedules from a CSV source.
///
/// Expects a header row naming the `FeeSchedule` fields. Whitespace around fields is
/// trimmed, so hand-edited rate tables load as written.
pub struct FeeScheduleReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FeeScheduleReader<R> {
    /// Wraps a rate table source such as an opened `--fee-schedules` file.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily deserializes schedules row by row.
    pub fn schedules(self) -> impl Iterator<Item = Result<FeeSchedule>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CalculatorError::from))
    }

    /// Reads every row and builds a registry from them.
    ///
    /// The first malformed row aborts the load; a partial rate table is never returned.
    pub fn into_registry(self) -> Result<InMemoryRegistry> {
        let schedules = self.schedules().collect::<Result<Vec<_>>>()?;
        InMemoryRegistry::from_schedules(schedules)
    }
}
