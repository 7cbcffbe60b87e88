use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str = "id,name,card_present_rate,card_present_fixed_fee,card_not_present_rate,card_not_present_fixed_fee,monthly_fee,setup_cost,hardware_cost,description";

/// Writes a fee schedule CSV with the given data rows under the standard header.
pub fn write_fee_schedules(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// The reference rates with Toast's setup fee waived.
pub fn waived_setup_rows() -> Vec<&'static str> {
    vec![
        "toast,Toast,2.49,0.15,3.50,0.15,0,0,0,Setup waived",
        "platform,Our Platform,1.50,0.10,2.20,0.10,99,0,0,Hardware-agnostic",
        "future-rail,Stablecoin Rails (Future),0.50,0.05,0.50,0.05,99,0,0,Hypothetical",
    ]
}
