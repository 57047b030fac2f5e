// src/analysis/depth.rs
//! Reporting-line depth check.
//!
//! A depth-first pre-order walk from the root using an explicit stack, so
//! pathological chains cannot overflow the call stack. Employees not
//! reachable from the root (orphans, manager cycles) are never visited.

use crate::hierarchy::Hierarchy;
use crate::types::{DepthFinding, Employee};

/// Flags every employee more than `max_depth` hops below `root`.
///
/// Findings are in pre-order: an employee, then its whole subtree, then its
/// next sibling.
#[must_use]
pub fn check(hierarchy: &Hierarchy, root: &Employee, max_depth: usize) -> Vec<DepthFinding> {
    let mut findings = Vec::new();
    let mut stack: Vec<(&Employee, usize)> = vec![(root, 0)];

    while let Some((employee, depth)) = stack.pop() {
        if depth > max_depth {
            findings.push(DepthFinding {
                employee_id: employee.id.clone(),
                depth,
                excess: depth - max_depth,
            });
        }

        // Reverse so the first report is popped first.
        let reports: Vec<&Employee> = hierarchy.direct_reports(&employee.id).collect();
        stack.extend(reports.into_iter().rev().map(|r| (r, depth + 1)));
    }

    findings
}
