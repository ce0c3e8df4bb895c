//! Reads a PLAS source file into a single text buffer.

use crate::errors::ConfigError;
use std::path::Path;

/// Reads `path` into a `String`, translating any filesystem failure into
/// the ambient [`ConfigError::FileNotFound`] variant.
pub fn read_source(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let err = read_source(Path::new("/nonexistent/path/to/program.plas")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::FileNotFound("/nonexistent/path/to/program.plas".to_string())
        );
    }
}
