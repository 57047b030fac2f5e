// src/types.rs
use serde::Serialize;
use std::fmt;

/// A single roster entry.
///
/// `direct_reports` holds identifiers, not employees: the owning
/// [`Hierarchy`](crate::hierarchy::Hierarchy) resolves them.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub manager_id: Option<String>,
    pub direct_reports: Vec<String>,
}

impl Employee {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
        manager_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id,
            direct_reports: Vec::new(),
        }
    }

    /// Returns true if this employee has no manager (root candidate).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }

    /// Returns true if anyone reports to this employee.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        !self.direct_reports.is_empty()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{id='{}', firstName='{}', lastName='{}', salary={}, managerId='{}'}}",
            self.id,
            self.first_name,
            self.last_name,
            format_salary(self.salary),
            self.manager_id.as_deref().unwrap_or("null")
        )
    }
}

/// Renders a salary with at least one fractional digit, switching to
/// `<mantissa>E<exponent>` outside `[1e-3, 1e7)`.
#[must_use]
pub fn format_salary(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }
    let sci = format!("{value:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{mantissa}E{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}.0E{exp}"),
        None => sci,
    }
}

/// A manager whose salary falls outside the allowed band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryFinding {
    pub employee_id: String,
    pub salary: f64,
    pub reports_average: f64,
    /// Distance to the violated bound. Always positive.
    pub amount: f64,
}

/// An employee too many hops below the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepthFinding {
    pub employee_id: String,
    pub depth: usize,
    pub excess: usize,
}

/// Everything one analysis run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub root_id: String,
    pub underpaid: Vec<SalaryFinding>,
    pub overpaid: Vec<SalaryFinding>,
    pub long_reporting_lines: Vec<DepthFinding>,
    /// Only populated when orphans are configured to be reported.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphans: Vec<String>,
}

impl AnalysisReport {
    /// Returns true if any check produced a finding.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        self.finding_count() > 0
    }

    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.underpaid.len()
            + self.overpaid.len()
            + self.long_reporting_lines.len()
            + self.orphans.len()
    }
}
