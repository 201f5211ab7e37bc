mod cli;
mod logging;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use day_of_week::{DateError, Report, evaluate, run_session};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.date.as_deref()) {
        eprintln!("Error: {e:#}");
        if e.downcast_ref::<DateError>().is_some_and(DateError::is_invalid_date) {
            eprintln!("Exiting program due to invalid date.");
        }
        process::exit(1);
    }
}

fn run(date: Option<&str>) -> Result<Report> {
    match date {
        Some(text) => {
            let report = evaluate(text).with_context(|| format!("looking up {text:?}"))?;
            print!("{report}");
            Ok(report)
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_session(&mut stdin.lock(), &mut stdout.lock()).context("reading date from stdin")
        }
    }
}
