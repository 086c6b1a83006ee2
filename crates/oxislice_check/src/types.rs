use serde::Serialize;
use std::path::PathBuf;

use oxislice_rules::RuleId;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    /// Path relative to the project root
    pub file: String,
    /// 1-based
    pub line: usize,
    /// 1-based, in characters
    pub column: usize,
    pub rule: RuleId,
    pub message: String,
    /// Source text of the offending import declaration
    pub import_statement: String,
    /// `--fix` would rewrite this violation
    pub fixable: bool,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub root: PathBuf,
    pub warnings: Vec<Warning>,
    pub files_analyzed: usize,
    pub fixes_applied: usize,
    /// Remaining violations per rule, in rule order
    pub rule_counts: Vec<(RuleId, usize)>,
}
