// src/hierarchy/mod.rs
//! The employee graph: an insertion-ordered map from id to [`Employee`]
//! with direct-report back-links stored as ids.

pub mod builder;
pub mod loader;
pub mod parser;

pub use loader::load_roster;
pub use parser::parse_record;

use crate::types::Employee;
use std::collections::HashMap;

/// Owns every employee. Iteration follows first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hierarchy {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl Hierarchy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and links a hierarchy from already-constructed employees.
    /// Any pre-existing `direct_reports` are discarded and recomputed.
    #[must_use]
    pub fn from_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let mut hierarchy = Self::new();
        for employee in employees {
            hierarchy.insert(employee);
        }
        hierarchy.link();
        hierarchy
    }

    /// Inserts an employee. A duplicate id replaces the earlier entry in place
    /// and returns it.
    pub fn insert(&mut self, employee: Employee) -> Option<Employee> {
        if let Some(&slot) = self.index.get(&employee.id) {
            return Some(std::mem::replace(&mut self.employees[slot], employee));
        }
        self.index.insert(employee.id.clone(), self.employees.len());
        self.employees.push(employee);
        None
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.index.get(id).map(|&i| &self.employees[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Resolves the direct reports of `id` through the map.
    pub fn direct_reports<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Employee> + 'a {
        self.get(id)
            .map(|e| e.direct_reports.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |report| self.get(report))
    }

    /// Employees without a manager.
    #[must_use]
    pub fn roots(&self) -> Vec<&Employee> {
        self.iter().filter(|e| e.is_root()).collect()
    }

    /// Employees whose manager id does not resolve.
    #[must_use]
    pub fn orphans(&self) -> Vec<&Employee> {
        self.iter()
            .filter(|e| e.manager_id.as_deref().is_some_and(|m| !self.contains(m)))
            .collect()
    }

    /// Total number of back-links across all employees.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.iter().map(|e| e.direct_reports.len()).sum()
    }

    /// Recomputes every `direct_reports` list in a single pass over the map.
    pub(crate) fn link(&mut self) {
        for employee in &mut self.employees {
            employee.direct_reports.clear();
        }

        let links: Vec<(usize, String)> = self
            .employees
            .iter()
            .filter_map(|e| {
                let manager = e.manager_id.as_deref()?;
                match self.index.get(manager) {
                    Some(&slot) => Some((slot, e.id.clone())),
                    None => {
                        tracing::warn!("{} reports to unknown manager '{manager}'", e.id);
                        None
                    }
                }
            })
            .collect();

        for (slot, report) in links {
            self.employees[slot].direct_reports.push(report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: &str, manager: Option<&str>) -> Employee {
        Employee::new(id, "F", "L", 1000.0, manager.map(String::from))
    }

    #[test]
    fn links_follow_insertion_order() {
        let h = Hierarchy::from_employees([
            emp("1", None),
            emp("3", Some("1")),
            emp("2", Some("1")),
        ]);
        let ids: Vec<_> = h.direct_reports("1").map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["3", "2"]);
    }

    #[test]
    fn duplicate_replaces_in_place() {
        let mut h = Hierarchy::new();
        h.insert(emp("1", None));
        h.insert(emp("2", Some("1")));
        let old = h.insert(Employee::new("1", "New", "Boss", 5.0, None));
        assert!(old.is_some());
        assert_eq!(h.len(), 2);
        assert_eq!(h.iter().next().map(|e| e.first_name.as_str()), Some("New"));
    }

    #[test]
    fn orphans_are_not_linked() {
        let h = Hierarchy::from_employees([emp("1", None), emp("2", Some("99"))]);
        assert_eq!(h.link_count(), 0);
        let orphans: Vec<_> = h.orphans().iter().map(|e| e.id.clone()).collect();
        assert_eq!(orphans, ["2"]);
    }

    #[test]
    fn relinking_is_stable() {
        let mut h = Hierarchy::from_employees([emp("1", None), emp("2", Some("1"))]);
        h.link();
        assert_eq!(h.link_count(), 1);
    }

    #[test]
    fn unknown_id_has_no_reports() {
        let h = Hierarchy::from_employees([emp("1", None)]);
        assert_eq!(h.direct_reports("nope").count(), 0);
    }
}
