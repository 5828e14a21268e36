//! Table export
//!
//! [`TableExporter`] writes the three tables of a [`SimulationTables`] value into
//! a directory, one file per table, named
//! `ed_<table>_<YYYYMMDD_HHMMSS>.<ext>`. All files of one export share the
//! same stamp.

pub mod csv;
pub mod jsonl;

pub use self::csv::write_table_csv;
pub use self::jsonl::write_table_jsonl;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::records::{Table, TableRecord};
use crate::simulation::{SimulationResult, SimulationTables};
use crate::types::OutputFormat;

/// File name prefix shared by every exported table
pub const FILE_PREFIX: &str = "ed";

/// Format of the per-export timestamp in file names
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes generated tables to disk
#[derive(Debug, Clone)]
pub struct TableExporter {
    directory: PathBuf,
    format: OutputFormat,
}

impl TableExporter {
    /// Export into `directory` using `format`
    pub fn new(directory: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self { directory: directory.into(), format }
    }

    /// Target directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write all three tables stamped with the current time
    pub fn export(&self, tables: &SimulationTables) -> SimulationResult<Vec<PathBuf>> {
        self.export_at(tables, Utc::now())
    }

    /// Write all three tables stamped with `at`
    ///
    /// Creates the directory if needed. Returns the written paths in
    /// patients, staff, resources order.
    #[instrument(skip(self, tables), fields(directory = %self.directory.display(), format = %self.format))]
    pub fn export_at(&self, tables: &SimulationTables, at: DateTime<Utc>) -> SimulationResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.directory)?;
        let stamp = at.format(STAMP_FORMAT).to_string();

        let paths = vec![
            self.write(&tables.patients, &stamp)?,
            self.write(&tables.staff, &stamp)?,
            self.write(&tables.resources, &stamp)?,
        ];

        info!("Exported {} tables to {}", paths.len(), self.directory.display());
        Ok(paths)
    }

    /// Path a table would be written to for `stamp`
    pub fn path_for(&self, table_name: &str, stamp: &str) -> PathBuf {
        self.directory.join(format!(
            "{}_{}_{}.{}",
            FILE_PREFIX,
            table_name,
            stamp,
            self.format.extension()
        ))
    }

    fn write<R: TableRecord>(&self, table: &Table<R>, stamp: &str) -> SimulationResult<PathBuf> {
        let path = self.path_for(table.name(), stamp);
        let rows = match self.format {
            OutputFormat::Csv => write_table_csv(&path, table)?,
            OutputFormat::JsonLines => write_table_jsonl(&path, table)?,
        };
        info!("Wrote {} {} rows to {}", rows, table.name(), path.display());
        Ok(path)
    }
}
