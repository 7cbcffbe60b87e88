use crate::domain::comparison::CostBreakdown;
use crate::error::Result;
use std::io::Write;

/// Writes cost breakdown rows as CSV.
pub struct BreakdownWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BreakdownWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// One row per evaluated schedule, in the order given.
    pub fn write_breakdown<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a CostBreakdown>,
    ) -> Result<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
