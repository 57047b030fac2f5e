// src/hierarchy/parser.rs
//! Record parsing: one roster line to one [`Employee`].

use crate::config::SalaryPolicy;
use crate::error::{Result, RosterError};
use crate::types::Employee;

const MIN_FIELDS: usize = 4;

/// Parses a single data line.
///
/// Returns `Ok(None)` when the salary is unparseable and `policy` is
/// [`SalaryPolicy::Skip`].
///
/// # Errors
/// `MalformedRecord` if the line has fewer than four fields, or
/// `InvalidSalary` under [`SalaryPolicy::Strict`].
pub fn parse_record(line: &str, line_number: usize, policy: SalaryPolicy) -> Result<Option<Employee>> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();

    if fields.len() < MIN_FIELDS {
        return Err(RosterError::MalformedRecord { line: line_number });
    }

    let raw_salary = fields[3];
    let Some(salary) = parse_salary(raw_salary) else {
        return match policy {
            SalaryPolicy::Strict => Err(RosterError::InvalidSalary {
                line: line_number,
                value: raw_salary.to_string(),
            }),
            SalaryPolicy::Skip => {
                tracing::warn!(
                    "Invalid salary format at line {line_number}: '{raw_salary}', skipping record"
                );
                Ok(None)
            }
        };
    };

    let manager_id = fields
        .get(4)
        .filter(|m| !m.is_empty())
        .map(|m| (*m).to_string());

    let employee = Employee::new(fields[0], fields[1], fields[2], salary, manager_id);
    tracing::debug!("line {line_number}: parsed {employee}");
    Ok(Some(employee))
}

fn parse_salary(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|s| s.is_finite())
}
