//! Fixed-width text export of a sampled transfer function
//!
//! Output layout:
//!
//! ```text
//! # Transfer Function
//! # Value    R    G    B    A
//!    0  0.0000  0.0000  1.0000  0.0625
//!    1  0.0000  0.0266  0.9844  0.0625
//! ```
//!
//! The step column is as wide as the largest domain value plus one; each
//! channel column is 8 wide with 4 decimals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TfResult, TransferFunctionError};
use crate::sampler::SampledTable;

/// Suffix appended to the export name
pub const EXPORT_SUFFIX: &str = "_TF.dat";

const HEADER: &str = "# Transfer Function\n# Value    R    G    B    A\n";
const VALUE_COLUMN_WIDTH: usize = 8;

/// File path for an export named `name`: `<name>_TF.dat`
pub fn export_path(name: impl AsRef<Path>) -> PathBuf {
    let mut path = name.as_ref().as_os_str().to_owned();
    path.push(EXPORT_SUFFIX);
    PathBuf::from(path)
}

/// Write the table (header plus one row per domain step) to `writer`
pub fn write_table<W: Write>(writer: &mut W, table: &SampledTable) -> std::io::Result<()> {
    let step_width = table.domain().to_string().len() + 1;

    writer.write_all(HEADER.as_bytes())?;
    for (step, row) in table.rows().enumerate() {
        write!(writer, "{:>width$}", step, width = step_width)?;
        for value in row {
            write!(writer, "{:>width$.4}", value, width = VALUE_COLUMN_WIDTH)?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the table to `<name>_TF.dat`, returning the path written
pub fn export_to_file(name: impl AsRef<Path>, table: &SampledTable) -> TfResult<PathBuf> {
    let path = export_path(name);
    log::info!("export_to_file: Writing {} rows to {:?}", table.domain(), path);

    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(&path)?);
        write_table(&mut writer, table)?;
        writer.flush()
    };

    match write() {
        Ok(()) => Ok(path),
        Err(source) => {
            log::error!("export_to_file: Failed to write {:?}: {}", path, source);
            Err(TransferFunctionError::Export { path, source })
        }
    }
}
