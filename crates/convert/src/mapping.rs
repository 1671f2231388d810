//! Per-format output field mapping.
//!
//! Static lookup tables from reconciled source fields to each target
//! format's column order, plus login post-processing (whitespace-free
//! passwords, required-field checks).

use std::collections::HashMap;

use regex::Regex;

use crate::config::OutputFormat;

pub const UNTITLED_NOTE: &str = "Untitled Note";

/// Output columns for login rows, in write order.
pub fn login_columns(format: OutputFormat) -> &'static [&'static str] {
    match format {
        OutputFormat::Proton => {
            &["name", "url", "email", "username", "password", "note", "totp", "vault"]
        }
        OutputFormat::LastPass => {
            &["url", "username", "password", "extra", "name", "grouping", "fav", "totp"]
        }
        OutputFormat::OnePassword => &["name", "url", "username", "password"],
    }
}

/// Output columns for note rows, in write order.
pub fn note_columns(format: OutputFormat) -> &'static [&'static str] {
    match format {
        OutputFormat::Proton | OutputFormat::OnePassword => &["name", "content"],
        OutputFormat::LastPass => {
            &["url", "username", "password", "extra", "name", "grouping", "fav"]
        }
    }
}

/// A login mapped to its output row, with the bookkeeping the summary needs.
#[derive(Debug, Clone)]
pub struct MappedLogin {
    pub row: Vec<String>,
    /// The password changed under whitespace cleaning.
    pub cleaned: bool,
    /// Required fields that were empty ("no name", "no login", ...).
    pub missing: Vec<&'static str>,
    /// The (trimmed) entry name, for problem reporting.
    pub name: String,
}

/// Map reconciled login fields onto the target format's columns.
///
/// All fields are trimmed except the password, which instead has every run
/// of whitespace removed (line breaks leak into passwords that absorbed
/// surplus tokens). The row is produced even when required fields are
/// missing; the caller counts those as problem rows.
pub fn map_login(
    format: OutputFormat,
    fields: &HashMap<String, String>,
    vault: &str,
    whitespace: &Regex,
) -> MappedLogin {
    let get = |key: &str| fields.get(key).map(String::as_str).unwrap_or("");

    let name = get("name").trim().to_string();
    let url = get("url").trim().to_string();
    let login = get("login").trim().to_string();
    let note = get("note").trim().to_string();

    let original_password = get("password");
    let password = whitespace.replace_all(original_password, "").into_owned();
    let cleaned = original_password != password && !password.is_empty();

    let mut missing = Vec::new();
    if name.is_empty() {
        missing.push("no name");
    }
    if login.is_empty() {
        missing.push("no login");
    }
    if password.is_empty() {
        missing.push("no password");
    }
    if url.is_empty() {
        missing.push("no url");
    }

    let row = match format {
        OutputFormat::Proton => vec![
            name.clone(),
            url,
            login.clone(),
            login,
            password,
            note,
            String::new(),
            vault.to_string(),
        ],
        OutputFormat::LastPass => vec![
            url,
            login,
            password,
            String::new(),
            name.clone(),
            String::new(),
            String::new(),
            String::new(),
        ],
        OutputFormat::OnePassword => vec![name.clone(), url, login, password],
    };

    MappedLogin { row, cleaned, missing, name }
}

/// Map a reconciled note onto the target format's note columns.
pub fn map_note(format: OutputFormat, name: &str, content: &str) -> Vec<String> {
    let name = if name.is_empty() { UNTITLED_NOTE } else { name };

    match format {
        OutputFormat::Proton | OutputFormat::OnePassword => {
            vec![name.to_string(), content.to_string()]
        }
        OutputFormat::LastPass => vec![
            String::new(),
            String::new(),
            String::new(),
            content.to_string(),
            name.to_string(),
            String::new(),
            String::new(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitespace() -> Regex {
        Regex::new(r"\s+").unwrap()
    }

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn proton_row_duplicates_login_into_email_and_username() {
        let mapped = map_login(
            OutputFormat::Proton,
            &fields(&[
                ("name", "Site"),
                ("url", "http://x"),
                ("login", "me@x"),
                ("password", "pw"),
                ("note", "n"),
            ]),
            "Personal",
            &whitespace(),
        );
        assert_eq!(mapped.row, ["Site", "http://x", "me@x", "me@x", "pw", "n", "", "Personal"]);
        assert!(mapped.missing.is_empty());
        assert!(!mapped.cleaned);
    }

    #[test]
    fn lastpass_row_order_matches_import_schema() {
        let mapped = map_login(
            OutputFormat::LastPass,
            &fields(&[
                ("name", "Site"),
                ("url", "http://x"),
                ("login", "me"),
                ("password", "pw"),
            ]),
            "ignored",
            &whitespace(),
        );
        assert_eq!(mapped.row, ["http://x", "me", "pw", "", "Site", "", "", ""]);
    }

    #[test]
    fn onepassword_row_has_four_columns() {
        let mapped = map_login(
            OutputFormat::OnePassword,
            &fields(&[("name", "Site"), ("url", "u"), ("login", "l"), ("password", "p")]),
            "ignored",
            &whitespace(),
        );
        assert_eq!(mapped.row, ["Site", "u", "l", "p"]);
    }

    #[test]
    fn password_whitespace_is_removed_and_counted() {
        let mapped = map_login(
            OutputFormat::Proton,
            &fields(&[
                ("name", "Site"),
                ("url", "u"),
                ("login", "l"),
                ("password", "p w\n1"),
            ]),
            "Personal",
            &whitespace(),
        );
        assert_eq!(mapped.row[4], "pw1");
        assert!(mapped.cleaned);
    }

    #[test]
    fn all_whitespace_password_does_not_count_as_cleaned() {
        let mapped = map_login(
            OutputFormat::Proton,
            &fields(&[("name", "Site"), ("url", "u"), ("login", "l"), ("password", "  ")]),
            "Personal",
            &whitespace(),
        );
        assert!(!mapped.cleaned);
        assert_eq!(mapped.missing, ["no password"]);
    }

    #[test]
    fn missing_fields_reported_in_fixed_order() {
        let mapped = map_login(
            OutputFormat::Proton,
            &fields(&[("note", "only a note")]),
            "Personal",
            &whitespace(),
        );
        assert_eq!(mapped.missing, ["no name", "no login", "no password", "no url"]);
    }

    #[test]
    fn unnamed_note_gets_placeholder() {
        assert_eq!(map_note(OutputFormat::Proton, "", "body"), ["Untitled Note", "body"]);
    }

    #[test]
    fn lastpass_note_body_lands_in_extra() {
        let row = map_note(OutputFormat::LastPass, "Wifi", "the body");
        assert_eq!(row, ["", "", "", "the body", "Wifi", "", ""]);
        assert_eq!(row.len(), note_columns(OutputFormat::LastPass).len());
    }

    #[test]
    fn row_width_always_matches_column_table() {
        for format in [OutputFormat::Proton, OutputFormat::LastPass, OutputFormat::OnePassword] {
            let mapped = map_login(format, &fields(&[]), "v", &whitespace());
            assert_eq!(mapped.row.len(), login_columns(format).len());
            assert_eq!(map_note(format, "n", "c").len(), note_columns(format).len());
        }
    }
}
