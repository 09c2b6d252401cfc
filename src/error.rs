use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while parsing a config file.
///
/// Structural variants carry the originating path and a 1-based line number
/// so the rendered message reads like a compiler diagnostic
/// (`conf.ini:3: stray characters outside any section`). Lookup misses and
/// coercion failures are **not** errors — the accessor layer absorbs those
/// into the caller-supplied default.
#[derive(Debug, Error)]
pub enum IniError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}:{line}: stray characters outside any section")]
    Stray { path: PathBuf, line: usize },

    #[error("{path}:{line}: config item is missing '='")]
    MissingDelimiter { path: PathBuf, line: usize },
}

impl IniError {
    /// The path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            IniError::Io { path, .. }
            | IniError::Stray { path, .. }
            | IniError::MissingDelimiter { path, .. } => path,
        }
    }

    /// The 1-based line number for structural errors, `None` for I/O errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::Io { .. } => None,
            IniError::Stray { line, .. } | IniError::MissingDelimiter { line, .. } => Some(*line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stray_formats_path_and_line() {
        let err = IniError::Stray {
            path: "/etc/app/conf.ini".into(),
            line: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("conf.ini"));
        assert!(msg.contains(":7:"));
        assert!(msg.contains("stray"));
    }

    #[test]
    fn missing_delimiter_formats() {
        let err = IniError::MissingDelimiter {
            path: "conf.ini".into(),
            line: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("conf.ini:2:"));
        assert!(msg.contains("'='"));
    }

    #[test]
    fn io_carries_source() {
        let err = IniError::Io {
            path: "missing.ini".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.ini"));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn line_accessor() {
        let err = IniError::Stray {
            path: "x".into(),
            line: 3,
        };
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.path(), std::path::Path::new("x"));
    }
}
