//! Settlement Import CLI
//!
//! Imports a fixed-width settlement file, writing accepted records as CSV to
//! stdout and the run summary to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- settlement.txt > records.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use settlement_import::{CsvSink, ImportEngine, ImportError, ImportResult, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(ImportError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let mut sink = CsvSink::new(stdout.lock());

    let result = ImportEngine::new().run(reader, &mut sink)?;
    print_summary(&result);

    Ok(())
}

fn print_summary(result: &ImportResult) {
    eprintln!("total lines:  {}", result.total_lines);
    eprintln!("detail lines: {}", result.detail_lines);
    eprintln!("saved:        {}", result.saved);
    eprintln!("ignored:      {}", result.ignored);
    eprintln!("invalid:      {}", result.invalid);

    for error in &result.errors {
        eprintln!("  line {}: {}", error.line, error.reason);
    }
    if result.invalid > result.errors.len() {
        eprintln!(
            "  ({} further errors not shown)",
            result.invalid - result.errors.len()
        );
    }
}
