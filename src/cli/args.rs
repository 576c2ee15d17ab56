//! Defines the command-line arguments and subcommands for the casekit CLI.
//!
//! Strategy flags are taken as plain strings and parsed by the shaper, so a
//! bad value surfaces as the same invalid-enumeration diagnostic the library
//! reports.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "casekit",
    version,
    about = "Shape parameterized test cases into argument rows."
)]
pub struct CasekitArgs {
    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one argument row per distinct case in a suite.
    Rows {
        /// The suite file to read.
        #[arg(required = true)]
        file: PathBuf,
        /// Argument strategy: instance or properties.
        #[arg(long = "args", default_value = "properties")]
        args_strategy: String,
        /// Property strategy: name-included, default, if-not-returns, if-not-throws.
        #[arg(long = "props", default_value = "default")]
        props_strategy: String,
        /// Print rows as JSON arrays, one per line.
        #[arg(long)]
        json: bool,
    },
    /// Print the case names, or display names when a method is known.
    Names {
        /// The suite file to read.
        #[arg(required = true)]
        file: PathBuf,
        /// Test method name; defaults to the suite's `method`.
        #[arg(long)]
        method: Option<String>,
    },
    /// List suite files under a directory with their case counts.
    Discover {
        /// The directory to search.
        #[arg(default_value = "tests/suites")]
        path: PathBuf,
    },
}
