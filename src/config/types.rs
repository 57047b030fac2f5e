use serde::{Deserialize, Serialize};

/// What to do with a record whose salary does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryPolicy {
    /// Log a warning and drop the record.
    #[default]
    Skip,
    /// Fail the whole load.
    Strict,
}

/// What to do with employees whose manager id does not resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Leave them out of the tree without comment.
    #[default]
    Ignore,
    /// List them as an extra report section.
    Report,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_min_ratio")]
    pub min_manager_ratio: f64,
    #[serde(default = "default_max_ratio")]
    pub max_manager_ratio: f64,
    #[serde(default = "default_max_depth")]
    pub max_reporting_depth: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_manager_ratio: default_min_ratio(),
            max_manager_ratio: default_max_ratio(),
            max_reporting_depth: default_max_depth(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    #[serde(default)]
    pub salary_policy: SalaryPolicy,
    #[serde(default)]
    pub orphans: OrphanPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub load: LoadOptions,
}

const fn default_min_ratio() -> f64 { 1.2 }
const fn default_max_ratio() -> f64 { 1.5 }
const fn default_max_depth() -> usize { 4 }
