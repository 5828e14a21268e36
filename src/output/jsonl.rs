//! JSON Lines table writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::records::{Table, TableRecord};
use crate::simulation::SimulationResult;

/// Write `table` as one JSON object per line
pub fn write_table_jsonl<R: TableRecord>(path: &Path, table: &Table<R>) -> SimulationResult<usize> {
    let mut writer = BufWriter::new(File::create(path)?);

    for row in table {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(table.len())
}
