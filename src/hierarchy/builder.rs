// src/hierarchy/builder.rs
//! Hierarchy construction: parse every record, then link in one pass.

use super::parser::parse_record;
use super::Hierarchy;
use crate::config::SalaryPolicy;
use crate::error::Result;

impl Hierarchy {
    /// Builds a linked hierarchy from data lines (header already removed).
    ///
    /// Line numbers in errors are 1-based positions within `records`.
    /// A blank line has a single field and is rejected like any short record.
    ///
    /// # Errors
    /// Propagates the first `MalformedRecord`, or `InvalidSalary` under
    /// [`SalaryPolicy::Strict`].
    pub fn from_records<I, S>(records: I, policy: SalaryPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hierarchy = Self::new();
        let mut skipped = 0usize;

        for (i, record) in records.into_iter().enumerate() {
            let Some(employee) = parse_record(record.as_ref(), i + 1, policy)? else {
                skipped += 1;
                continue;
            };
            let id = employee.id.clone();
            if hierarchy.insert(employee).is_some() {
                tracing::warn!("duplicate employee id '{id}' at line {}, keeping the later record", i + 1);
            }
        }

        hierarchy.link();

        if skipped > 0 {
            tracing::warn!("{skipped} record(s) skipped due to invalid salary");
        }
        tracing::debug!(
            "built hierarchy: {} employees, {} reporting links",
            hierarchy.len(),
            hierarchy.link_count()
        );
        Ok(hierarchy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn builds_and_links() {
        let h = Hierarchy::from_records(
            ["123,Joe,Doe,60000,", "124,Martin,Chekov,45000,123", "125,Bob,Ronstad,47000,123"],
            SalaryPolicy::Skip,
        )
        .unwrap();
        assert_eq!(h.len(), 3);
        assert_eq!(h.link_count(), 2);
        assert_eq!(h.get("123").map(|e| e.direct_reports.len()), Some(2));
    }

    #[test]
    fn malformed_line_number() {
        let err = Hierarchy::from_records(["1,A,B,10,", "2,C"], SalaryPolicy::Skip).unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 2 }));
    }

    #[test]
    fn blank_line_is_malformed() {
        let err = Hierarchy::from_records(["1,A,B,100,", "", "2,C,D,80,1"], SalaryPolicy::Skip)
            .unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 2 }));

        let err = Hierarchy::from_records(["1,A,B,100,", "   "], SalaryPolicy::Skip).unwrap_err();
        assert!(matches!(err, RosterError::MalformedRecord { line: 2 }));
    }

    #[test]
    fn skip_policy_drops_record() {
        let h = Hierarchy::from_records(["1,A,B,10,", "2,C,D,oops,1"], SalaryPolicy::Skip)
            .unwrap();
        assert_eq!(h.len(), 1);
        assert_eq!(h.link_count(), 0);
    }

    #[test]
    fn strict_policy_fails() {
        let err = Hierarchy::from_records(["1,A,B,10,", "2,C,D,oops,1"], SalaryPolicy::Strict)
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidSalary { line: 2, .. }));
    }
}
