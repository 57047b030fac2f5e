// src/cli/mod.rs
pub mod args;

pub use args::Cli;

use crate::analysis::Analyzer;
use crate::config::{Config, OrphanPolicy, SalaryPolicy};
use crate::exit::OrgExit;
use crate::hierarchy;
use crate::reporting::{self, RenderOptions};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "orgchart=debug,orgchart_core=debug" } else { "orgchart=warn,orgchart_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Merges CLI flags over the file configuration.
///
/// # Errors
/// Returns error if the config file cannot be loaded.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.strict_salary {
        config.load.salary_policy = SalaryPolicy::Strict;
    }
    if cli.report_orphans {
        config.load.orphans = OrphanPolicy::Report;
    }
    if let Some(depth) = cli.max_depth {
        config.thresholds.max_reporting_depth = depth;
    }
    Ok(config)
}

/// Loads, analyzes and prints. Returns the exit code for a successful run.
///
/// # Errors
/// Propagates load, analysis and output errors.
pub fn handle_analyze(cli: &Cli) -> Result<OrgExit> {
    let config = resolve_config(cli)?;
    let roster = hierarchy::load_roster(&cli.file, config.load.salary_policy)
        .with_context(|| format!("Failed to load roster {}", cli.file.display()))?;
    let report = Analyzer::from_config(&config)
        .analyze(&roster)
        .with_context(|| format!("Invalid Data in {}", cli.file.display()))?;

    reporting::print_report(&roster, &report, &RenderOptions::from_config(&config), cli.format)?;

    if cli.fail_on_findings && report.has_findings() {
        return Ok(OrgExit::FindingsPresent);
    }
    Ok(OrgExit::Success)
}
