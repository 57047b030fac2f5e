// src/exit.rs
//! Standardized process exit codes for `orgchart`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::RosterError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum OrgExit {
    /// Analysis ran to completion.
    Success = 0,
    /// Generic error (I/O, config).
    Error = 1,
    /// Roster contents could not be parsed (malformed record, invalid salary).
    InvalidInput = 2,
    /// The roster does not have exactly one root.
    StructureViolation = 3,
    /// Findings were reported and `--fail-on-findings` was set.
    FindingsPresent = 4,
}

impl OrgExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RosterError>() {
            Some(e) if e.is_data_error() => Self::InvalidInput,
            Some(e) if e.is_structure_error() => Self::StructureViolation,
            _ => Self::Error,
        }
    }
}

impl Termination for OrgExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes = [
            OrgExit::Success,
            OrgExit::Error,
            OrgExit::InvalidInput,
            OrgExit::StructureViolation,
            OrgExit::FindingsPresent,
        ]
        .map(OrgExit::code);
        for (i, a) in codes.iter().enumerate() {
            assert!(!codes[i + 1..].contains(a));
        }
    }

    #[test]
    fn maps_roster_errors() {
        let malformed = anyhow::Error::new(RosterError::MalformedRecord { line: 1 });
        assert_eq!(OrgExit::for_error(&malformed), OrgExit::InvalidInput);

        let no_root = anyhow::Error::new(RosterError::NoRoot);
        assert_eq!(OrgExit::for_error(&no_root), OrgExit::StructureViolation);

        let missing = anyhow::Error::new(RosterError::FileNotFound { path: "x".into() });
        assert_eq!(OrgExit::for_error(&missing), OrgExit::Error);

        let wrapped = anyhow::Error::new(RosterError::InvalidSalary { line: 2, value: "x".into() })
            .context("Failed to load roster employees.csv");
        assert_eq!(OrgExit::for_error(&wrapped), OrgExit::InvalidInput);
        assert_eq!(
            format!("{wrapped:#}"),
            "Failed to load roster employees.csv: Invalid salary format at line 2: 'x'"
        );

        let other = anyhow::anyhow!("boom");
        assert_eq!(OrgExit::for_error(&other), OrgExit::Error);
    }
}
