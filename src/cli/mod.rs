//! The casekit Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::Path;
use std::process;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{CasekitArgs, Command};
use crate::cli::output::Printer;
use crate::case::TestCase;
use crate::converter::{convert_distinct, to_argument_rows};
use crate::display::display_name;
use crate::shaper::{ArgsStrategy, PropsStrategy};
use crate::suite::{discover_suite_files, load_suite};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    init_tracing();
    let args = CasekitArgs::parse();
    let use_colors = !args.no_color && atty::is(atty::Stream::Stdout);
    let mut printer = Printer::new(use_colors);

    // Dispatch to the appropriate subcommand handler.
    let result = match args.command {
        Command::Rows {
            file,
            args_strategy,
            props_strategy,
            json,
        } => handle_rows(&mut printer, &file, &args_strategy, &props_strategy, json),
        Command::Names { file, method } => handle_names(&mut printer, &file, method.as_deref()),
        Command::Discover { path } => handle_discover(&mut printer, &path),
    };

    if let Err(report) = result {
        eprintln!("{report:?}");
        process::exit(1);
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Handles the `rows` subcommand.
fn handle_rows(
    printer: &mut Printer,
    file: &Path,
    args_strategy: &str,
    props_strategy: &str,
    json: bool,
) -> Result<()> {
    let args: ArgsStrategy = args_strategy.parse()?;
    let props: PropsStrategy = props_strategy.parse()?;
    let suite = load_suite(file)?;
    for (index, row) in to_argument_rows(Some(&suite.cases), args, props)?.enumerate() {
        printer.row(index, &row?, json).into_diagnostic()?;
    }
    Ok(())
}

/// Handles the `names` subcommand. Prints one name per distinct case, the
/// same cases `rows` emits.
fn handle_names(printer: &mut Printer, file: &Path, method: Option<&str>) -> Result<()> {
    let suite = load_suite(file)?;
    let method = method.or(suite.method.as_deref()).unwrap_or_default();
    let names = convert_distinct(
        Some(&suite.cases),
        Some(|case: &TestCase| {
            Ok(display_name(method, case.case_name())
                .unwrap_or_else(|| case.case_name().to_string()))
        }),
    )?;
    for name in names {
        printer.name(&name?).into_diagnostic()?;
    }
    Ok(())
}

/// Handles the `discover` subcommand. Unreadable suites are listed, not fatal.
fn handle_discover(printer: &mut Printer, root: &Path) -> Result<()> {
    for path in discover_suite_files(root) {
        let printed = match load_suite(&path) {
            Ok(suite) => printer.suite(&path, suite.cases.len()),
            Err(e) => printer.broken_suite(&path, &e),
        };
        printed.into_diagnostic()?;
    }
    Ok(())
}
