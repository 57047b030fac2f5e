// src/reporting/mod.rs
//! Rendering of an [`AnalysisReport`] for humans or machines.

pub mod console;

use crate::hierarchy::Hierarchy;
use crate::types::AnalysisReport;
use anyhow::{Context, Result};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the renderer needs besides the report itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub min_ratio: f64,
    pub max_ratio: f64,
    pub max_depth: usize,
    pub show_orphans: bool,
}

impl RenderOptions {
    #[must_use]
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            min_ratio: config.thresholds.min_manager_ratio,
            max_ratio: config.thresholds.max_manager_ratio,
            max_depth: config.thresholds.max_reporting_depth,
            show_orphans: config.load.orphans == crate::config::OrphanPolicy::Report,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&crate::config::Config::default())
    }
}

/// Prints the report to stdout in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(
    hierarchy: &Hierarchy,
    report: &AnalysisReport,
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => console::print_sections(&console::sections(hierarchy, report, options)),
        OutputFormat::Json => println!("{}", to_json(report)?),
    }
    Ok(())
}

/// Serializes the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize analysis report")
}
