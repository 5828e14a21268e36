//! CSV table writer

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::records::{Table, TableRecord};
use crate::simulation::SimulationResult;

/// Write `table` as CSV, header row first
///
/// The header comes from [`TableRecord::COLUMNS`] so an empty table still gets
/// one. Returns the number of data rows written.
pub fn write_table_csv<R: TableRecord>(path: &Path, table: &Table<R>) -> SimulationResult<usize> {
    let file = BufWriter::new(File::create(path)?);
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(table.columns())?;
    for row in table {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(table.len())
}
