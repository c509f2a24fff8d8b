//! TMUA grade transformer CLI
//!
//! ```bash
//! transform-tmua-grades 2024 tmua_export.csv tmua_upload.csv
//! ```
//!
//! Logging is controlled by `TMUA_GRADES_LOG` and `TMUA_GRADES_LOG_FORMAT`
//! (see [`tmua_grades::config`]); a `.env` file in the working directory is
//! honoured.

use clap::Parser;
use tmua_grades::cli::Cli;
use tmua_grades::config::Settings;
use tmua_grades::logs::{self, log_fatal, log_success};
use tmua_grades::{transform, PipelineError};

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log_fatal(e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    logs::init(Settings::from_env()?);

    let summary = transform(&cli.cycle, &cli.input_file, &cli.output_file)?;

    log_success(format!(
        "✨ Done! {} rows for admissions cycle {}",
        summary.rows, summary.cycle
    ));
    Ok(())
}
