use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Reconciled records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Login,
    Note,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Note => write!(f, "note"),
        }
    }
}

/// One source entry after field reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    Login {
        /// Every header column is present as a key, possibly empty;
        /// no keys beyond the header.
        fields: HashMap<String, String>,
        /// Interior tokens were discarded because the header has no
        /// password column to absorb the surplus.
        overflow_truncated: bool,
    },
    Note {
        name: String,
        content: String,
    },
}

impl Reconciled {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Login { .. } => RecordKind::Login,
            Self::Note { .. } => RecordKind::Note,
        }
    }
}

// ---------------------------------------------------------------------------
// Run output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ConvertMeta {
    pub format: String,
    pub vault: String,
    pub tool_version: String,
    pub run_at: String,
}

/// Aggregate counters for one conversion pass.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertSummary {
    pub total_records: usize,
    pub login_records: usize,
    pub note_records: usize,
    /// Passwords that had whitespace stripped.
    pub passwords_cleaned: usize,
    /// Logins written with one or more required fields missing.
    pub problem_records: usize,
    /// Logins that lost interior tokens to truncation (no password column).
    pub logins_truncated: usize,
    /// The input ended inside an unterminated multi-line record.
    pub truncated_input: bool,
    /// Physical lines discarded with the unterminated tail.
    pub dropped_lines: usize,
}

/// A login that was written despite missing required fields, with the
/// reasons attached. These feed the summary's problem-row counter.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    /// 1-based index of the record in the assembled input.
    pub record: usize,
    pub name: String,
    pub reasons: Vec<String>,
}

/// Serializable portion of a run's result (counters + problem detail).
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub meta: ConvertMeta,
    pub summary: ConvertSummary,
    pub problems: Vec<Problem>,
}

/// Full result of a conversion run: the report plus the mapped output rows,
/// already in target-format column order.
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    pub report: ConvertReport,
    pub logins: Vec<Vec<String>>,
    pub notes: Vec<Vec<String>>,
}
