//! Pipe-I/O evaluator driver.
//!
//! Reads the parameter count and one parameter per line from standard
//! input and writes the merit value to standard output. `merit-pipe-io
//! save` dumps the merit surface to `func.dat` instead.

use anyhow::Result;
use clap::Parser;
use merit_eval::driver::evaluate_pipe;
use merit_eval::record::RecordLog;
use merit_eval::surface::{self, GridRange, SURFACE_PATH};

use std::io;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "merit-pipe-io")]
#[command(about = "Evaluate the example merit function via pipe-based I/O")]
struct Cli {
    /// Evaluation tag passed by some drivers, or the literal `save`
    tag: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if cli.tag.as_deref() == Some("save") {
        surface::dump_surface(Path::new(SURFACE_PATH), GridRange::default())?;
        return Ok(());
    }
    if let Some(tag) = &cli.tag {
        log::debug!("evaluation tag {tag:?}");
    }
    evaluate_pipe(
        io::stdin().lock(),
        io::stdout().lock(),
        &RecordLog::default(),
    )?;
    Ok(())
}
