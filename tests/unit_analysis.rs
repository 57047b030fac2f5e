// tests/unit_analysis.rs
//! Analyzer behavior over hand-built hierarchies.

use orgchart_core::config::Thresholds;
use orgchart_core::reporting::console::{render_plain, sections};
use orgchart_core::reporting::RenderOptions;
use orgchart_core::{Analyzer, Employee, Hierarchy, RosterError};

fn emp(id: &str, first: &str, last: &str, salary: f64, manager: Option<&str>) -> Employee {
    Employee::new(id, first, last, salary, manager.map(String::from))
}

fn render(h: &Hierarchy) -> Vec<String> {
    let report = Analyzer::default().analyze(h).unwrap();
    render_plain(&sections(h, &report, &RenderOptions::default()))
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_no_root() {
    let h = Hierarchy::from_employees([
        emp("1", "John", "Doe", 50000.0, Some("2")),
        emp("2", "Jane", "Smith", 60000.0, Some("3")),
    ]);
    let err = Analyzer::default().analyze(&h).unwrap_err();
    assert!(matches!(err, RosterError::NoRoot));
    assert_eq!(err.to_string(), "No CEO found in data");
}

#[test]
fn test_multiple_roots() {
    let h = Hierarchy::from_employees([
        emp("1", "John", "Doe", 50000.0, None),
        emp("2", "Jane", "Smith", 60000.0, None),
    ]);
    let err = Analyzer::default().analyze(&h).unwrap_err();
    assert!(matches!(err, RosterError::MultipleRoots { .. }));
}

#[test]
fn test_underpaid_manager() {
    let h = Hierarchy::from_employees([
        emp("1", "John", "Doe", 45000.0, None),
        emp("2", "Jane", "Smith", 40000.0, Some("1")),
        emp("3", "Bob", "Brown", 40000.0, Some("1")),
    ]);
    assert_eq!(
        render(&h),
        [
            "Managers with salary less than 120% of average of direct reportees:",
            "Employee{id='1', firstName='John', lastName='Doe', salary=45000.0, managerId='null'}: lesser 3000.00",
            "No managers with salary more than 150% of average of direct reportees.",
            "No employees with reporting lines exceeding 4 levels.",
        ]
    );
}

#[test]
fn test_overpaid_manager() {
    let h = Hierarchy::from_employees([
        emp("1", "John", "Doe", 90000.0, None),
        emp("2", "Jane", "Smith", 40000.0, Some("1")),
        emp("3", "Bob", "Brown", 40000.0, Some("1")),
    ]);
    assert_eq!(
        render(&h),
        [
            "No managers with salary less than 120% of average of direct reportees.",
            "Managers with salary more than 150% of average of direct reportees:",
            "Employee{id='1', firstName='John', lastName='Doe', salary=90000.0, managerId='null'}: more 30000.00",
            "No employees with reporting lines exceeding 4 levels.",
        ]
    );
}

#[test]
fn test_long_reporting_line() {
    let h = Hierarchy::from_employees([
        emp("1", "John", "Doe", 59000.0, None),
        emp("2", "Jane", "Smith", 40000.0, Some("1")),
        emp("3", "Bob", "Brown", 28000.0, Some("2")),
        emp("4", "Alice", "White", 20000.0, Some("3")),
        emp("5", "Charlie", "Black", 14000.0, Some("4")),
        emp("6", "Eve", "Green", 10000.0, Some("5")),
    ]);
    assert_eq!(
        render(&h),
        [
            "No managers with salary less than 120% of average of direct reportees.",
            "No managers with salary more than 150% of average of direct reportees.",
            "Employees with reporting lines exceeding 4 levels:",
            "Employee{id='6', firstName='Eve', lastName='Green', salary=10000.0, managerId='5'}: exceeds by 1",
        ]
    );
}

#[test]
fn test_analysis_is_idempotent() {
    let h = Hierarchy::from_employees([
        emp("1", "A", "A", 90000.0, None),
        emp("2", "B", "B", 30000.0, Some("1")),
        emp("3", "C", "C", 20000.0, Some("2")),
    ]);
    let before = h.clone();
    let analyzer = Analyzer::default();
    let first = analyzer.analyze(&h).unwrap();
    let second = analyzer.analyze(&h).unwrap();
    assert_eq!(first, second);
    assert_eq!(h, before);
}

#[test]
fn test_custom_depth_threshold() {
    let h = Hierarchy::from_employees([
        emp("1", "A", "A", 1.0, None),
        emp("2", "B", "B", 1.0, Some("1")),
        emp("3", "C", "C", 1.0, Some("2")),
    ]);
    let analyzer = Analyzer::new(Thresholds {
        max_reporting_depth: 1,
        ..Thresholds::default()
    });
    let report = analyzer.analyze(&h).unwrap();
    assert_eq!(report.long_reporting_lines.len(), 1);
    assert_eq!(report.long_reporting_lines[0].employee_id, "3");
    assert_eq!(report.root_id, "1");
}
