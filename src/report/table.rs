use std::io::Write;

use anyhow::Result;

use super::ReportEntry;

const HEADER: [&str; 7] = ["site", "location", "date", "hourRange", "length", "mm", "in"];

pub fn write_table<W: Write>(entries: &[ReportEntry], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for entry in entries {
        wtr.write_record([
            entry.site.clone(),
            entry.location.clone(),
            entry.date.clone(),
            entry.hour_range.clone(),
            entry.length.to_string(),
            format!("{:.2}", entry.mm),
            format!("{:.2}", entry.inches),
        ])?;
    }
    wtr.flush()?;

    Ok(())
}
