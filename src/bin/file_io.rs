//! File-I/O evaluator driver.
//!
//! `merit-file-io <input-file> <output-file>` evaluates one point;
//! `merit-file-io save` dumps the merit surface to `func.dat`.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use merit_eval::driver::evaluate_file;
use merit_eval::record::RecordLog;
use merit_eval::surface::{self, GridRange, SURFACE_PATH};

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "merit-file-io")]
#[command(about = "Evaluate the example merit function via file-based I/O")]
struct Cli {
    /// Input file with the parameter count and tokens, or the literal `save`
    input: PathBuf,
    /// File the merit value is written to (omitted in save mode)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match (&cli.input, &cli.output) {
        (input, None) if input.as_os_str() == "save" => {
            surface::dump_surface(Path::new(SURFACE_PATH), GridRange::default())?;
        }
        (input, Some(output)) => {
            evaluate_file(input, output, &RecordLog::default())?;
        }
        (_, None) => {
            Cli::command().print_help()?;
        }
    }
    Ok(())
}
