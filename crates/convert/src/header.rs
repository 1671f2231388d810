use crate::error::ConvertError;

/// The source export's header row: ordered column names, parsed once from
/// the first physical line and immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct Header {
    columns: Vec<String>,
    password_index: Option<usize>,
}

impl Header {
    /// Parse the header from the export's first line.
    ///
    /// Column names are taken verbatim (the exporter does not pad them);
    /// only the line itself is trimmed. The `password` column is located by
    /// exact lowercase match, matching the source schema's spelling.
    pub fn parse(line: &str) -> Result<Self, ConvertError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        let columns: Vec<String> = line.split(',').map(str::to_string).collect();
        let password_index = columns.iter().position(|c| c == "password");
        Ok(Self { columns, password_index })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Expected column count for a well-formed row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of the `password` column, if the schema has one.
    pub fn password_index(&self) -> Option<usize> {
        self.password_index
    }
}
