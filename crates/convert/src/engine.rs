use regex::Regex;

use crate::assemble::assemble_records;
use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::header::Header;
use crate::mapping::{map_login, map_note};
use crate::model::{
    ConvertMeta, ConvertOutput, ConvertReport, ConvertSummary, Problem, Reconciled,
};
use crate::reconcile::reconcile;

/// Run one conversion pass over a full source export (header line included).
///
/// Pure function of its inputs: parses the header, assembles logical
/// records, reconciles each against the header, and maps the results onto
/// the configured output format. Never touches the file system.
pub fn run(config: &ConvertConfig, source_text: &str) -> Result<ConvertOutput, ConvertError> {
    let mut lines = source_text.lines();
    let header_line = lines.next().ok_or(ConvertError::EmptyInput)?;
    let header = Header::parse(header_line)?;

    let assembly = assemble_records(lines, &config.source.sentinel);

    let format = config.output.format;
    let whitespace = Regex::new(r"\s+").unwrap();

    let mut logins: Vec<Vec<String>> = Vec::new();
    let mut notes: Vec<Vec<String>> = Vec::new();
    let mut problems: Vec<Problem> = Vec::new();

    let mut login_records = 0usize;
    let mut note_records = 0usize;
    let mut passwords_cleaned = 0usize;
    let mut logins_truncated = 0usize;

    for (index, record) in assembly.records.iter().enumerate() {
        match reconcile(record, &header, &config.source) {
            Reconciled::Note { name, content } => {
                note_records += 1;
                if config.output.export_notes {
                    notes.push(map_note(format, &name, &content));
                }
            }
            Reconciled::Login { fields, overflow_truncated } => {
                let mapped = map_login(format, &fields, &config.output.vault, &whitespace);

                login_records += 1;
                if mapped.cleaned {
                    passwords_cleaned += 1;
                }
                if overflow_truncated {
                    logins_truncated += 1;
                }
                if !mapped.missing.is_empty() {
                    problems.push(Problem {
                        record: index + 1,
                        name: mapped.name.clone(),
                        reasons: mapped.missing.iter().map(|s| s.to_string()).collect(),
                    });
                }

                logins.push(mapped.row);
            }
        }
    }

    let summary = ConvertSummary {
        total_records: assembly.records.len(),
        login_records,
        note_records,
        passwords_cleaned,
        problem_records: problems.len(),
        logins_truncated,
        truncated_input: assembly.dropped_tail.is_some(),
        dropped_lines: assembly.dropped_line_count(),
    };

    let meta = ConvertMeta {
        format: format.to_string(),
        vault: config.output.vault.clone(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        run_at: chrono::Utc::now().to_rfc3339(),
    };

    Ok(ConvertOutput {
        report: ConvertReport { meta, summary, problems },
        logins,
        notes,
    })
}
