use std::fmt;

#[derive(Debug)]
pub enum ConvertError {
    /// TOML parse / deserialization error in a profile file.
    ProfileParse(String),
    /// Profile validation error (empty sentinel, zero columns, etc.).
    ProfileValidation(String),
    /// Source text is empty or has no header line.
    EmptyInput,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProfileParse(msg) => write!(f, "profile parse error: {msg}"),
            Self::ProfileValidation(msg) => write!(f, "profile validation error: {msg}"),
            Self::EmptyInput => write!(f, "input is empty (no header line)"),
        }
    }
}

impl std::error::Error for ConvertError {}
