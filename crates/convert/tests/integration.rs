use std::path::PathBuf;

use keyferry_convert::config::{ConvertConfig, OutputFormat};
use keyferry_convert::engine::run;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

fn run_fixture(name: &str, config: &ConvertConfig) -> keyferry_convert::ConvertOutput {
    run(config, &load_fixture(name)).unwrap()
}

// -------------------------------------------------------------------------
// Full export, default (Proton) profile
// -------------------------------------------------------------------------

#[test]
fn full_export_summary_counts() {
    let output = run_fixture("truekey-export.csv", &ConvertConfig::default());
    let s = &output.report.summary;

    assert_eq!(s.total_records, 6);
    assert_eq!(s.login_records, 4);
    assert_eq!(s.note_records, 2);
    assert_eq!(s.passwords_cleaned, 1);
    assert_eq!(s.problem_records, 1);
    assert_eq!(s.logins_truncated, 0);
    assert!(!s.truncated_input);
    assert_eq!(s.dropped_lines, 0);
}

#[test]
fn full_export_proton_rows() {
    let output = run_fixture("truekey-export.csv", &ConvertConfig::default());

    // name,url,email,username,password,note,totp,vault
    assert_eq!(
        output.logins[0],
        ["Example", "http://example.com", "alice", "alice", "s3cret!", "", "", "Personal"]
    );
    // password "p,w,1" was shredded across tokens and reassembled
    assert_eq!(output.logins[1][4], "p,w,1");
    assert_eq!(output.logins[1][0], "Bank");
    // whitespace scrubbed out of the password
    assert_eq!(output.logins[3][4], "password");
}

#[test]
fn short_row_is_padded_and_flagged() {
    let output = run_fixture("truekey-export.csv", &ConvertConfig::default());

    // the carol row has no name or password columns in the export
    assert_eq!(output.logins[2][0], "");
    assert_eq!(output.logins[2][4], "");

    let problem = &output.report.problems[0];
    assert_eq!(problem.record, 4);
    assert_eq!(problem.reasons, ["no name", "no password"]);
}

#[test]
fn notes_are_withheld_unless_export_is_requested() {
    let output = run_fixture("truekey-export.csv", &ConvertConfig::default());
    assert!(output.notes.is_empty());

    let mut config = ConvertConfig::default();
    config.output.export_notes = true;
    let output = run_fixture("truekey-export.csv", &config);
    assert_eq!(
        output.notes,
        [
            ["Office Wifi", "This is the wifi password\nfor the office"],
            ["Door Codes", "First line of the note\nsecond line"],
        ]
    );
}

// -------------------------------------------------------------------------
// Other formats
// -------------------------------------------------------------------------

#[test]
fn lastpass_rows_follow_lastpass_schema() {
    let mut config = ConvertConfig::default();
    config.output.format = OutputFormat::LastPass;
    config.output.export_notes = true;
    let output = run_fixture("truekey-export.csv", &config);

    // url,username,password,extra,name,grouping,fav,totp
    assert_eq!(
        output.logins[0],
        ["http://example.com", "alice", "s3cret!", "", "Example", "", "", ""]
    );
    // note body travels in the extra column
    assert_eq!(output.notes[0][3], "This is the wifi password\nfor the office");
    assert_eq!(output.notes[0][4], "Office Wifi");
}

#[test]
fn onepassword_rows_are_four_columns() {
    let mut config = ConvertConfig::default();
    config.output.format = OutputFormat::OnePassword;
    let output = run_fixture("truekey-export.csv", &config);

    for row in &output.logins {
        assert_eq!(row.len(), 4);
    }
    assert_eq!(output.logins[0], ["Example", "http://example.com", "alice", "s3cret!"]);
}

// -------------------------------------------------------------------------
// Truncated input
// -------------------------------------------------------------------------

#[test]
fn unterminated_trailing_note_is_reported() {
    let output = run_fixture("truekey-truncated.csv", &ConvertConfig::default());
    let s = &output.report.summary;

    assert_eq!(s.total_records, 1);
    assert!(s.truncated_input);
    assert_eq!(s.dropped_lines, 2);
    assert_eq!(output.logins.len(), 1);
}

// -------------------------------------------------------------------------
// Report JSON contract
// -------------------------------------------------------------------------

#[test]
fn report_serializes_with_stable_keys() {
    let output = run_fixture("truekey-export.csv", &ConvertConfig::default());
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&output.report).unwrap()).unwrap();

    assert_eq!(json["meta"]["format"], "proton");
    assert_eq!(json["meta"]["vault"], "Personal");
    assert_eq!(json["summary"]["total_records"], 6);
    assert_eq!(json["summary"]["problem_records"], 1);
    assert_eq!(json["summary"]["truncated_input"], false);
    assert_eq!(json["problems"][0]["reasons"][0], "no name");
}
