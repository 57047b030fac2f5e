// src/reporting/console.rs
use super::RenderOptions;
use crate::hierarchy::Hierarchy;
use crate::types::{AnalysisReport, DepthFinding, SalaryFinding};
use colored::Colorize;

/// One block of output: a heading, then zero or more finding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(found: &str, none: &str, lines: Vec<String>) -> Self {
        let heading = if lines.is_empty() {
            format!("No {none}.")
        } else {
            format!("{found}:")
        };
        Self { heading, lines }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Builds the sections in their fixed order: underpaid, overpaid, long
/// reporting lines, then orphans when enabled.
#[must_use]
pub fn sections(hierarchy: &Hierarchy, report: &AnalysisReport, options: &RenderOptions) -> Vec<Section> {
    let lower = percent(options.min_ratio);
    let upper = percent(options.max_ratio);
    let depth = options.max_depth;

    let mut out = vec![
        Section::new(
            &format!("Managers with salary less than {lower}% of average of direct reportees"),
            &format!("managers with salary less than {lower}% of average of direct reportees"),
            salary_lines(hierarchy, &report.underpaid, "lesser"),
        ),
        Section::new(
            &format!("Managers with salary more than {upper}% of average of direct reportees"),
            &format!("managers with salary more than {upper}% of average of direct reportees"),
            salary_lines(hierarchy, &report.overpaid, "more"),
        ),
        Section::new(
            &format!("Employees with reporting lines exceeding {depth} levels"),
            &format!("employees with reporting lines exceeding {depth} levels"),
            depth_lines(hierarchy, &report.long_reporting_lines),
        ),
    ];

    if options.show_orphans {
        out.push(Section::new(
            "Employees whose manager could not be found",
            "employees with an unknown manager",
            report.orphans.iter().map(|id| record(hierarchy, id)).collect(),
        ));
    }

    out
}

/// Renders sections as uncolored text, one line per entry.
#[must_use]
pub fn render_plain(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&section.heading);
        out.push('\n');
        for line in &section.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

pub fn print_sections(sections: &[Section]) {
    for section in sections {
        if section.is_empty() {
            println!("{}", section.heading.green());
        } else {
            println!("{}", section.heading.yellow().bold());
        }
        for line in &section.lines {
            println!("{line}");
        }
    }
}

fn salary_lines(hierarchy: &Hierarchy, findings: &[SalaryFinding], label: &str) -> Vec<String> {
    findings
        .iter()
        .map(|f| format!("{}: {label} {:.2}", record(hierarchy, &f.employee_id), f.amount))
        .collect()
}

fn depth_lines(hierarchy: &Hierarchy, findings: &[DepthFinding]) -> Vec<String> {
    findings
        .iter()
        .map(|f| format!("{}: exceeds by {}", record(hierarchy, &f.employee_id), f.excess))
        .collect()
}

fn record(hierarchy: &Hierarchy, id: &str) -> String {
    hierarchy
        .get(id)
        .map_or_else(|| format!("Employee{{id='{id}'}}"), ToString::to_string)
}

fn percent(ratio: f64) -> String {
    let pct = ratio * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{pct:.0}")
    } else {
        format!("{pct:.1}")
    }
}
