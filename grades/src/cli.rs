//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// `transform-tmua-grades <cycle> <input_file> <output_file>`
#[derive(Debug, Parser, PartialEq, Eq)]
#[command(name = "transform-tmua-grades", version)]
#[command(about = "Transform TMUA grades into the CID / Admissions Cycle / TMUA Score upload format", long_about = None)]
pub struct Cli {
    /// The admissions cycle of the TMUA grades
    #[arg(allow_hyphen_values = true)]
    pub cycle: String,

    /// The input file containing TMUA grades
    pub input_file: PathBuf,

    /// The output file to save transformed grades
    pub output_file: PathBuf,
}
