use crate::reporting::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orgchart",
    version,
    about = "Checks manager pay and reporting-line depth in an employee roster"
)]
pub struct Cli {
    /// Roster CSV: header line, then `id,firstName,lastName,salary,managerId`
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Config file (defaults to ./orgchart.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Fail the load on an unparseable salary instead of skipping the record
    #[arg(long)]
    pub strict_salary: bool,
    /// List employees whose manager id does not resolve
    #[arg(long)]
    pub report_orphans: bool,
    /// Override the maximum reporting-line depth
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
    /// Exit with a non-zero code when any finding is reported
    #[arg(long)]
    pub fail_on_findings: bool,
    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
