//! Append-only log of evaluated points.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default file name of the record log.
pub const RECORD_PATH: &str = "record";

/// Append-only history of evaluated parameter/result pairs.
///
/// Tracks every point an external optimizer has visited. The file handle
/// is acquired and released per append; the log is never truncated or
/// rewritten by the evaluator.
#[derive(Clone, Debug)]
pub struct RecordLog {
    path: PathBuf,
}

impl RecordLog {
    /// Record log stored at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordLog { path: path.into() }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one evaluated point, creating the file if necessary.
    ///
    /// The entry is formatted up front so the whole line lands in a single
    /// write call.
    pub fn append(&self, params: &[f64], merit: f64) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry_line(params, merit).as_bytes())
    }
}

impl Default for RecordLog {
    /// Record log at [`RECORD_PATH`] in the working directory.
    fn default() -> Self {
        RecordLog::new(RECORD_PATH)
    }
}

/// Format one log entry: the parameters followed by the merit value.
fn entry_line(params: &[f64], merit: f64) -> String {
    let mut line = String::new();
    for param in params {
        line.push_str(&param.to_string());
        line.push_str("  ");
    }
    line.push_str(&merit.to_string());
    line.push('\n');
    line
}
