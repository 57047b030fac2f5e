pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod hierarchy;
pub mod reporting;
pub mod types;

pub use analysis::Analyzer;
pub use error::{Result, RosterError};
pub use hierarchy::{load_roster, Hierarchy};
pub use types::{AnalysisReport, DepthFinding, Employee, SalaryFinding};
