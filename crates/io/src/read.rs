// Source export reading

use std::io::Read;
use std::path::Path;

/// Read a file and convert to UTF-8 if needed (handles Windows-1252,
/// Latin-1, etc.; TrueKey exports show up in both).
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_plain_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.csv");
        fs::write(&path, "name,password\nCafé,s3cret\n").unwrap();

        let content = read_file_as_utf8(&path).unwrap();
        assert!(content.contains("Café"));
    }

    #[test]
    fn falls_back_to_windows_1252() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.csv");
        // "Café" with a Windows-1252 é (0xE9), invalid as UTF-8
        fs::write(&path, b"name,password\nCaf\xe9,s3cret\n").unwrap();

        let content = read_file_as_utf8(&path).unwrap();
        assert!(content.contains("Café"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_file_as_utf8(&dir.path().join("absent.csv")).is_err());
    }
}
