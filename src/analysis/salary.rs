// src/analysis/salary.rs
//! Manager pay relative to the average pay of their direct reports.

use crate::config::Thresholds;
use crate::hierarchy::Hierarchy;
use crate::types::{Employee, SalaryFinding};

/// Salary findings split by direction, each in hierarchy order.
#[derive(Debug, Default)]
pub struct SalaryFindings {
    pub underpaid: Vec<SalaryFinding>,
    pub overpaid: Vec<SalaryFinding>,
}

/// Where a salary sits relative to the allowed band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    /// Below the lower bound by the given amount.
    Below(f64),
    Within,
    /// Above the upper bound by the given amount.
    Above(f64),
}

/// Checks every employee with at least one direct report.
#[must_use]
pub fn check(hierarchy: &Hierarchy, thresholds: &Thresholds) -> SalaryFindings {
    let mut findings = SalaryFindings::default();

    for manager in hierarchy.iter().filter(|e| e.is_manager()) {
        let avg = average_salary(hierarchy.direct_reports(&manager.id));
        let finding = |amount| SalaryFinding {
            employee_id: manager.id.clone(),
            salary: manager.salary,
            reports_average: avg,
            amount,
        };

        match classify(manager.salary, avg, thresholds) {
            Band::Below(deficit) => findings.underpaid.push(finding(deficit)),
            Band::Above(excess) => findings.overpaid.push(finding(excess)),
            Band::Within => {}
        }
    }

    findings
}

/// Classifies `salary` against `[avg * min_ratio, avg * max_ratio]`.
/// Both bounds are inclusive.
#[must_use]
pub fn classify(salary: f64, avg: f64, thresholds: &Thresholds) -> Band {
    let lower = avg * thresholds.min_manager_ratio;
    let upper = avg * thresholds.max_manager_ratio;

    if salary < lower {
        Band::Below(lower - salary)
    } else if salary > upper {
        Band::Above(salary - upper)
    } else {
        Band::Within
    }
}

/// Arithmetic mean of salaries, or 0 for an empty set.
#[must_use]
pub fn average_salary<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> f64 {
    let (sum, count) = employees
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), e| (sum + e.salary, n + 1));
    if count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = count as f64;
    sum / count
}
