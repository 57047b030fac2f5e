// src/hierarchy/loader.rs
use super::Hierarchy;
use crate::config::SalaryPolicy;
use crate::error::{Result, RosterError};
use std::fs;
use std::path::Path;

/// Reads a roster file and builds its hierarchy.
///
/// The first line is a header and is discarded without inspection.
///
/// # Errors
/// `FileNotFound` / `Io` for read failures, plus any error from
/// [`Hierarchy::from_records`].
pub fn load_roster(path: &Path, policy: SalaryPolicy) -> Result<Hierarchy> {
    if path.as_os_str().is_empty() {
        return Err(RosterError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| RosterError::io(e, path))?;
    tracing::debug!("read {} bytes from {}", content.len(), path.display());

    Hierarchy::from_records(content.lines().skip(1), policy)
}
