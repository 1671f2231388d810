use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

// ---------------------------------------------------------------------------
// Top-level profile
// ---------------------------------------------------------------------------

/// A conversion profile: source-format constants plus output options.
///
/// The defaults describe the TrueKey CSV export schema. A profile file only
/// needs to name the values it overrides; everything else falls back to the
/// built-in TrueKey profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ConvertConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConvertError> {
        let config: ConvertConfig =
            toml::from_str(s).map_err(|e| ConvertError::ProfileParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConvertError> {
        if self.source.sentinel.is_empty() {
            return Err(ConvertError::ProfileValidation(
                "source.sentinel must not be empty".into(),
            ));
        }
        if self.output.vault.is_empty() {
            return Err(ConvertError::ProfileValidation(
                "output.vault must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Source format
// ---------------------------------------------------------------------------

/// Constants of the source export format.
///
/// These are data, not logic: the record terminator, the schema position
/// where note free-text begins, and the internal codes the exporter leaks
/// into note bodies.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Literal token terminating every logical record.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    /// Column index where note free-text content starts.
    #[serde(default = "default_content_offset")]
    pub content_offset: usize,
    /// Non-content artifact codes to drop from note bodies.
    #[serde(default = "default_noise_literals")]
    pub noise_literals: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            content_offset: default_content_offset(),
            noise_literals: default_noise_literals(),
        }
    }
}

fn default_sentinel() -> String {
    "tk-csv-v2".into()
}

fn default_content_offset() -> usize {
    8
}

fn default_noise_literals() -> Vec<String> {
    vec!["e3622b".into(), "14766677".into()]
}

// ---------------------------------------------------------------------------
// Output options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Vault name assigned to every login entry (Proton only).
    #[serde(default = "default_vault")]
    pub vault: String,
    /// Emit note records to a separate output.
    #[serde(default)]
    pub export_notes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            vault: default_vault(),
            export_notes: false,
        }
    }
}

fn default_vault() -> String {
    "Personal".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum OutputFormat {
    #[serde(rename = "proton")]
    Proton,
    #[serde(rename = "lastpass")]
    LastPass,
    #[serde(rename = "1password")]
    OnePassword,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Proton
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proton => write!(f, "proton"),
            Self::LastPass => write!(f, "lastpass"),
            Self::OnePassword => write!(f, "1password"),
        }
    }
}
