//! Evaluator entry points for the file and pipe transports.
//!
//! An external optimization driver hands the evaluator a parameter vector
//! and expects the merit value back. The file transport reads a named
//! input file and writes a named output file; the pipe transport reads
//! standard input and writes standard output. Every evaluated point is
//! appended to a [`RecordLog`] before the result is written.

use crate::error::Result;
use crate::merit::merit_function;
use crate::params;
use crate::record::RecordLog;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Evaluate parameters from `input` and write the merit value to `output`.
///
/// The input file declares the parameter count on its first line and holds
/// the tokens on the remaining lines. The value is written as plain text
/// without a trailing newline. Fails before writing anything if the
/// declared count does not match the tokens found.
pub fn evaluate_file(input: &Path, output: &Path, record: &RecordLog) -> Result<f64> {
    let reader = BufReader::new(File::open(input)?);
    let params = params::read_all(reader)?;
    let merit = merit_function(&params);
    log::debug!("{} parameters -> {merit}", params.len());
    record.append(&params, merit)?;
    fs::write(output, merit.to_string())?;
    Ok(merit)
}

/// Evaluate parameters from `input` and write the merit value, followed by
/// a newline, to `output`.
///
/// Transport-agnostic core of the pipe driver; the binary passes locked
/// standard streams. Nothing is written if the declared count does not
/// match the tokens found.
pub fn evaluate_pipe<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    record: &RecordLog,
) -> Result<f64> {
    let params = params::read_counted_lines(input)?;
    let merit = merit_function(&params);
    log::debug!("{} parameters -> {merit}", params.len());
    record.append(&params, merit)?;
    writeln!(output, "{merit}")?;
    Ok(merit)
}
