// src/analysis/mod.rs
//! Structure analysis over a built [`Hierarchy`].
//!
//! Root detection runs first and is fatal on failure. After that, the
//! salary-ratio pass and the depth pass run independently and never mutate
//! the hierarchy, so repeated runs yield identical reports.

pub mod depth;
pub mod salary;

use crate::config::{Config, OrphanPolicy, Thresholds};
use crate::error::{Result, RosterError};
use crate::hierarchy::Hierarchy;
use crate::types::{AnalysisReport, Employee};

/// Runs the policy checks.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    thresholds: Thresholds,
    orphans: OrphanPolicy,
}

impl Analyzer {
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            orphans: OrphanPolicy::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.thresholds.clone()).with_orphans(config.load.orphans)
    }

    #[must_use]
    pub fn with_orphans(mut self, policy: OrphanPolicy) -> Self {
        self.orphans = policy;
        self
    }

    /// Analyzes `hierarchy`.
    ///
    /// # Errors
    /// `NoRoot` or `MultipleRoots` if the hierarchy does not have exactly one
    /// employee without a manager. No findings are computed in that case.
    pub fn analyze(&self, hierarchy: &Hierarchy) -> Result<AnalysisReport> {
        let root = find_root(hierarchy)?;
        tracing::debug!("root is {}", root.id);

        let salary = salary::check(hierarchy, &self.thresholds);
        let long_reporting_lines =
            depth::check(hierarchy, root, self.thresholds.max_reporting_depth);

        Ok(AnalysisReport {
            root_id: root.id.clone(),
            underpaid: salary.underpaid,
            overpaid: salary.overpaid,
            long_reporting_lines,
            orphans: self.collect_orphans(hierarchy),
        })
    }

    fn collect_orphans(&self, hierarchy: &Hierarchy) -> Vec<String> {
        let orphans = hierarchy.orphans();
        match self.orphans {
            OrphanPolicy::Report => orphans.into_iter().map(|e| e.id.clone()).collect(),
            OrphanPolicy::Ignore => {
                if !orphans.is_empty() {
                    tracing::debug!("{} orphaned employee(s) left out of the tree", orphans.len());
                }
                Vec::new()
            }
        }
    }
}

/// Locates the single employee without a manager.
///
/// # Errors
/// `NoRoot` if none exists, `MultipleRoots` (with their ids) if several do.
pub fn find_root(hierarchy: &Hierarchy) -> Result<&Employee> {
    let roots = hierarchy.roots();
    match roots.as_slice() {
        [] => Err(RosterError::NoRoot),
        [root] => Ok(*root),
        many => Err(RosterError::MultipleRoots {
            ids: many.iter().map(|e| e.id.clone()).collect(),
        }),
    }
}
