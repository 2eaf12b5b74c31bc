//! Level file loading
//!
//! Level descriptions are JSON documents. Loading only fails on I/O or
//! syntax errors; missing fields are filled in by `Level::build`.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::{Level, LevelDescription};

/// Error type for level loading
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a level description from a JSON string
pub fn parse_description(s: &str) -> Result<LevelDescription, LevelError> {
    Ok(serde_json::from_str(s)?)
}

/// Load a level description from a JSON file
pub fn load_description<P: AsRef<Path>>(path: P) -> Result<LevelDescription, LevelError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    match parse_description(&contents) {
        Ok(desc) => Ok(desc),
        Err(e) => {
            log::error!("failed to parse {}: {}", path.display(), e);
            Err(e)
        }
    }
}

/// Load and build a level from a JSON file
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let desc = load_description(path)?;
    Ok(Level::build(&desc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_level_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name": "Steps", "generated": {{ "type": "stairs", "count": 3 }} }}"#
        )
        .unwrap();

        let level = load_level(file.path()).unwrap();
        assert_eq!(level.name, "Steps");
        assert_eq!(level.platforms.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_description(dir.path().join("nope.json"));
        assert!(matches!(result, Err(LevelError::Io(_))));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(parse_description("{ name: "), Err(LevelError::Parse(_))));
    }
}
