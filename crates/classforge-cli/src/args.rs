//! Command-line argument definitions for the Classforge CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Classforge project generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output zip archive
    #[arg(short, long, default_value = "generated_project.zip")]
    pub output: String,

    /// Generate the project tree into this directory instead of a zip
    #[arg(long)]
    pub project_dir: Option<String>,

    /// Also write a request collection (JSON) to this path
    #[arg(long)]
    pub collection: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
