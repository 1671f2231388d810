// keyferry CLI - headless TrueKey export conversion

mod exit_codes;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use keyferry_convert::{ConvertConfig, ConvertError, OutputFormat};

use exit_codes::{
    EXIT_SUCCESS, EXIT_ERROR, EXIT_USAGE,
    EXIT_CONVERT_PROBLEMS, EXIT_CONVERT_TRUNCATED, EXIT_CONVERT_EMPTY,
    EXIT_CONVERT_BAD_PROFILE, EXIT_IO,
};

#[derive(Parser)]
#[command(name = "keyferry")]
#[command(about = "Convert TrueKey CSV exports to other password managers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a TrueKey export to the target format
    #[command(after_help = "\
Examples:
  keyferry convert export.csv
  keyferry convert export.csv --format 1password -o logins.csv
  keyferry convert export.csv --export-notes --notes-file notes.csv
  keyferry convert export.csv --vault Work --json
  keyferry convert export.csv --strict")]
    Convert {
        /// TrueKey CSV export file
        input: PathBuf,

        /// Output file for logins (default: <input>.<format>.csv)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Target format
        #[arg(long, short = 'f')]
        format: Option<FormatArg>,

        /// Vault name assigned to login entries (Proton only)
        #[arg(long)]
        vault: Option<String>,

        /// Also export notes, to a separate file
        #[arg(long)]
        export_notes: bool,

        /// Output file for notes (default: <input>.notes.csv)
        #[arg(long)]
        notes_file: Option<PathBuf>,

        /// Conversion profile TOML (default: built-in TrueKey profile)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print the run report as JSON to stdout
        #[arg(long)]
        json: bool,

        /// Fail on problem rows or truncated input
        #[arg(long)]
        strict: bool,

        /// Suppress stderr notes
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Parse an export and report counters without writing output
    #[command(after_help = "\
Examples:
  keyferry inspect export.csv
  keyferry inspect export.csv --json")]
    Inspect {
        /// TrueKey CSV export file
        input: PathBuf,

        /// Conversion profile TOML (default: built-in TrueKey profile)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print the run report as JSON to stdout
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Proton,
    Lastpass,
    #[value(name = "1password")]
    Onepassword,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Proton => OutputFormat::Proton,
            FormatArg::Lastpass => OutputFormat::LastPass,
            FormatArg::Onepassword => OutputFormat::OnePassword,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            vault,
            export_notes,
            notes_file,
            profile,
            json,
            strict,
            quiet,
        } => cmd_convert(
            input, output, format, vault, export_notes, notes_file, profile, json, strict, quiet,
        ),
        Commands::Inspect { input, profile, json } => cmd_inspect(input, profile, json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn profile(msg: impl Into<String>) -> Self {
        Self { code: EXIT_CONVERT_BAD_PROFILE, message: msg.into(), hint: None }
    }

    /// Map an engine error to its exit code.
    pub fn convert(err: ConvertError) -> Self {
        let code = match err {
            ConvertError::EmptyInput => EXIT_CONVERT_EMPTY,
            ConvertError::ProfileParse(_) | ConvertError::ProfileValidation(_) => {
                EXIT_CONVERT_BAD_PROFILE
            }
        };
        Self { code, message: err.to_string(), hint: None }
    }
}

// ---------------------------------------------------------------------------
// convert
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn cmd_convert(
    input: PathBuf,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
    vault: Option<String>,
    export_notes: bool,
    notes_file: Option<PathBuf>,
    profile: Option<PathBuf>,
    json: bool,
    strict: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if notes_file.is_some() && !export_notes {
        return Err(CliError::args("--notes-file requires --export-notes"));
    }

    let mut config = load_config(profile.as_deref())?;
    if let Some(format) = format {
        config.output.format = format.into();
    }
    if let Some(vault) = vault {
        config.output.vault = vault;
    }
    config.output.export_notes |= export_notes;

    let source = keyferry_io::read::read_file_as_utf8(&input)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", input.display())))?;

    let result = keyferry_convert::run(&config, &source).map_err(CliError::convert)?;

    let format = config.output.format;
    let output_path = output.unwrap_or_else(|| default_output(&input, format));
    write_csv(&output_path, |w| {
        keyferry_io::write::write_logins(format, &result.logins, w)
    })?;

    let mut notes_path = None;
    if config.output.export_notes {
        let path = notes_file.unwrap_or_else(|| input.with_extension("notes.csv"));
        write_csv(&path, |w| keyferry_io::write::write_notes(format, &result.notes, w))?;
        notes_path = Some(path);
    }

    if json {
        let json_str = serde_json::to_string_pretty(&result.report).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{json_str}");
    }

    let s = &result.report.summary;
    if !quiet {
        eprintln!(
            "{} record(s) — {} logins, {} notes, {} passwords cleaned, {} problem rows",
            s.total_records, s.login_records, s.note_records, s.passwords_cleaned,
            s.problem_records,
        );
        eprintln!("wrote {}", output_path.display());
        if let Some(path) = &notes_path {
            eprintln!("wrote {}", path.display());
        }
        if s.truncated_input {
            eprintln!(
                "warning: input ended inside an unterminated record; {} trailing line(s) dropped",
                s.dropped_lines,
            );
        }
        if s.logins_truncated > 0 {
            eprintln!(
                "warning: {} login(s) had surplus fields dropped (no password column to absorb them)",
                s.logins_truncated,
            );
        }
    }

    if strict {
        if s.truncated_input {
            return Err(CliError {
                code: EXIT_CONVERT_TRUNCATED,
                message: "input truncated mid-record".into(),
                hint: Some("re-export from TrueKey or drop --strict to accept the loss".into()),
            });
        }
        if s.problem_records > 0 {
            return Err(CliError {
                code: EXIT_CONVERT_PROBLEMS,
                message: format!("{} problem row(s) found", s.problem_records),
                hint: Some("run `keyferry inspect` for the field-level reasons".into()),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

fn cmd_inspect(input: PathBuf, profile: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let config = load_config(profile.as_deref())?;

    let source = keyferry_io::read::read_file_as_utf8(&input)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", input.display())))?;

    let result = keyferry_convert::run(&config, &source).map_err(CliError::convert)?;
    let report = &result.report;

    if json {
        let json_str = serde_json::to_string_pretty(report).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{json_str}");
        return Ok(());
    }

    let s = &report.summary;
    eprintln!(
        "{} record(s) — {} logins, {} notes, {} passwords cleaned, {} problem rows",
        s.total_records, s.login_records, s.note_records, s.passwords_cleaned, s.problem_records,
    );
    for p in &report.problems {
        let name = if p.name.is_empty() { "<unnamed>" } else { &p.name };
        eprintln!("  record {}: {} — {}", p.record, name, p.reasons.join(", "));
    }
    if s.truncated_input {
        eprintln!(
            "warning: input ended inside an unterminated record; {} trailing line(s) dropped",
            s.dropped_lines,
        );
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config(profile: Option<&Path>) -> Result<ConvertConfig, CliError> {
    match profile {
        None => Ok(ConvertConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;
            ConvertConfig::from_toml(&text).map_err(|e| CliError::profile(e.to_string()))
        }
    }
}

fn default_output(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format!("{format}.csv"))
}

fn write_csv(
    path: &Path,
    write: impl FnOnce(std::fs::File) -> Result<(), String>,
) -> Result<(), CliError> {
    let file = std::fs::File::create(path)
        .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
    write(file).map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))
}
