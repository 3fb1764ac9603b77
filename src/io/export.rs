//! CSV export for weekly balance records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::HourRecord;

/// Column header for CSV telemetry export.
const HEADER: &str = "hour,day,demand_gw,hydro_gw,wind_gw,solar_gw,\
                      balance_gw,export_gw,shortage_gw";

/// Exports weekly records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per hour. Output is
/// deterministic for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[HourRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes weekly records as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[HourRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for r in records {
        wtr.write_record(&[
            r.hour.to_string(),
            r.day().to_string(),
            format!("{:.4}", r.demand_gw),
            format!("{:.4}", r.hydro_gw),
            format!("{:.4}", r.wind_gw),
            format!("{:.4}", r.solar_gw),
            format!("{:.4}", r.balance_gw),
            format!("{:.4}", r.export_gw),
            format!("{:.4}", r.shortage_gw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
