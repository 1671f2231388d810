//! Record assembly: grouping physical lines into logical records.
//!
//! The source format has no quoting and no per-record length prefix, so a
//! note body with embedded line breaks spills across physical lines. The
//! only reliable structure is the sentinel token closing every record: a
//! line that ends with it completes the record in progress.

/// Output of one assembly pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// Complete sentinel-terminated logical records, in source order.
    pub records: Vec<String>,
    /// A trailing accumulation that never saw its sentinel. It is not a
    /// record and is never emitted, but it is carried here so callers can
    /// report the data loss instead of losing it silently.
    pub dropped_tail: Option<String>,
}

impl Assembly {
    /// Physical lines lost in the dropped tail (0 when none was dropped).
    pub fn dropped_line_count(&self) -> usize {
        self.dropped_tail.as_ref().map_or(0, |t| t.lines().count())
    }
}

/// Group physical lines into sentinel-terminated logical records.
///
/// The caller has already consumed the header line. Blank and
/// whitespace-only lines carry no data and are skipped; they neither extend
/// nor terminate a record. The sentinel is only matched at line end, so it
/// closes exactly one record and can never match mid-accumulation.
pub fn assemble_records<'a, I>(lines: I, sentinel: &str) -> Assembly
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut pending: Option<String> = None;

    for line in lines {
        let line = line.trim_end_matches(['\n', '\r']);

        if line.trim().is_empty() {
            continue;
        }

        match pending.as_mut() {
            Some(current) => {
                // A multi-line note is in progress; the join preserves the
                // note's internal line structure.
                current.push('\n');
                current.push_str(line);

                if line.ends_with(sentinel) {
                    records.push(pending.take().unwrap_or_default());
                }
            }
            None => {
                if line.ends_with(sentinel) {
                    records.push(line.to_string());
                } else {
                    pending = Some(line.to_string());
                }
            }
        }
    }

    Assembly { records, dropped_tail: pending }
}
