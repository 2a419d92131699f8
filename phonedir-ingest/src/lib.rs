//! Bulk CSV loading for a phone directory registry.
//!
//! One entry per line, two comma-separated fields `name,rawNumber`, no
//! header and no quoting. Lines with any other field count are skipped,
//! as are lines the registry rejects (invalid number, duplicate name);
//! skips are logged at debug level and not surfaced to the caller. An I/O
//! fault is terminal for the call and reports a single structured error;
//! entries committed before the fault remain in the registry.

use phonedir_core::Registry;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Terminal errors for a single bulk-load call.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The source file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),
    /// The source failed mid-read.
    #[error("I/O error: {0}")]
    Io(String),
    /// A fault that is not a plain read failure, e.g. bytes that are not
    /// valid UTF-8.
    #[error("import failed: {0}")]
    Unknown(String),
}

impl From<io::Error> for ImportError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ImportError::NotFound(err.to_string()),
            io::ErrorKind::InvalidData => ImportError::Unknown(err.to_string()),
            _ => ImportError::Io(err.to_string()),
        }
    }
}

/// Load `name,rawNumber` lines from `reader` into `registry`.
///
/// # Errors
///
/// Only read faults are surfaced; skipped lines are not (see the module
/// docs). Entries added before a fault stay in the registry.
pub fn load_reader(registry: &mut Registry, reader: impl BufRead) -> Result<(), ImportError> {
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split(',');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(raw_number), None) => {
                if let Err(err) = registry.add(name, raw_number, 0) {
                    tracing::debug!(line = %line, %err, "skipping rejected entry");
                }
            }
            _ => {
                tracing::debug!(line = %line, "skipping line without exactly two fields");
            }
        }
    }
    Ok(())
}

/// Load the CSV file at `path` into `registry`.
///
/// # Errors
///
/// [`ImportError::NotFound`] when the file does not exist, otherwise the
/// classification of the underlying fault.
pub fn load_path(registry: &mut Registry, path: impl AsRef<Path>) -> Result<(), ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ImportError::NotFound(path.display().to_string()),
        _ => ImportError::Io(format!("{}: {}", path.display(), err)),
    })?;
    load_reader(registry, BufReader::new(file))
}
