//! Field reconciliation: recovering a fixed-column mapping from a token
//! sequence whose length may not match the header, because the source never
//! quoted its fields and a value may legitimately contain commas.
//!
//! Dispatch is on the record's first comma token: `note` (case-insensitive)
//! selects note extraction, anything else login reconciliation.

use crate::config::SourceConfig;
use crate::header::Header;
use crate::model::Reconciled;

/// Reconcile one logical record against the header.
pub fn reconcile(record: &str, header: &Header, source: &SourceConfig) -> Reconciled {
    let tokens: Vec<&str> = record.split(',').collect();

    if tokens[0].eq_ignore_ascii_case("note") {
        reconcile_note(&tokens, source)
    } else {
        reconcile_login(tokens, header, source)
    }
}

// ---------------------------------------------------------------------------
// Note extraction
// ---------------------------------------------------------------------------

/// Recover a note's name and body from its comma-shredded tokens.
///
/// The exporter pads a note row with blank columns after the name, so the
/// rightmost non-blank token (never index 0, which is the kind tag) is the
/// entry name. The body is everything between the schema's content offset
/// and the name, minus blank tokens, the exporter's internal artifact codes,
/// and bare numbers the exporter interleaves with the text.
fn reconcile_note(tokens: &[&str], source: &SourceConfig) -> Reconciled {
    let tokens = strip_sentinel(tokens, &source.sentinel);

    let mut name = String::new();
    let mut name_index = None;
    for i in (1..tokens.len()).rev() {
        let trimmed = tokens[i].trim();
        if !trimmed.is_empty() {
            name = trimmed.to_string();
            name_index = Some(i);
            break;
        }
    }

    let offset = source.content_offset;
    let candidates: &[&str] = match name_index {
        Some(i) if i > offset => &tokens[offset..i],
        None if tokens.len() > offset => &tokens[offset..],
        _ => &[],
    };

    let content: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|t| {
            let trimmed = t.trim();
            !trimmed.is_empty()
                && !source.noise_literals.iter().any(|n| n == trimmed)
                && !trimmed.chars().all(|c| c.is_ascii_digit())
        })
        .collect();

    Reconciled::Note { name, content: content.join("\n") }
}

// ---------------------------------------------------------------------------
// Login reconciliation
// ---------------------------------------------------------------------------

/// Map a login row's tokens positionally onto the header columns.
///
/// Too few tokens: the exporter omitted trailing optional columns; pad with
/// empties. Too many: an unquoted comma split one value. The first and last
/// columns never carry the delimiter by schema convention, so they anchor
/// the row, and the surplus is absorbed into the password column (rejoined
/// with `,`), recovering the original value losslessly as long as only one
/// field contained delimiters. Without a password column the surplus is
/// dropped instead.
fn reconcile_login(tokens: Vec<&str>, header: &Header, source: &SourceConfig) -> Reconciled {
    let mut tokens: Vec<&str> = strip_sentinel(&tokens, &source.sentinel).to_vec();
    while tokens.last() == Some(&"") {
        tokens.pop();
    }

    let n = header.len();
    let mut overflow_truncated = false;

    let mut values: Vec<String> = if tokens.len() > n {
        let first = tokens[0];
        let last = tokens[tokens.len() - 1];
        let middle = &tokens[1..tokens.len() - 1];
        let needed = n.saturating_sub(2);

        let mut rebuilt = Vec::with_capacity(n);
        rebuilt.push(first.to_string());

        if middle.len() > needed {
            match header.password_index() {
                Some(p) if p > 0 => {
                    // The password group is every middle token between the
                    // columns before and after the password's position.
                    let before = p - 1;
                    let after = needed.saturating_sub(p);
                    let cut = middle.len() - after;
                    rebuilt.extend(middle[..before].iter().map(|s| s.to_string()));
                    rebuilt.push(middle[before..cut].join(","));
                    rebuilt.extend(middle[cut..].iter().map(|s| s.to_string()));
                }
                _ => {
                    overflow_truncated = true;
                    rebuilt.extend(middle[..needed].iter().map(|s| s.to_string()));
                }
            }
        } else {
            rebuilt.extend(middle.iter().map(|s| s.to_string()));
        }

        rebuilt.push(last.to_string());
        rebuilt
    } else {
        tokens.iter().map(|s| s.to_string()).collect()
    };

    values.resize(n, String::new());
    let fields = header.columns().iter().cloned().zip(values).collect();

    Reconciled::Login { fields, overflow_truncated }
}

fn strip_sentinel<'a, 'b>(tokens: &'a [&'b str], sentinel: &str) -> &'a [&'b str] {
    match tokens.split_last() {
        Some((last, rest)) if *last == sentinel => rest,
        _ => tokens,
    }
}
