pub mod breakdown_writer;
pub mod fee_schedule_reader;
