use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AbbrevError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid CSV in {}: {reason}", path.display())]
    InputFormat { path: PathBuf, reason: String },
}

impl AbbrevError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        AbbrevError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn input_format(path: &Path, reason: impl Into<String>) -> Self {
        AbbrevError::InputFormat {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Splits a `csv::Error` into an I/O failure or a format failure.
    pub fn from_csv(path: &Path, err: csv::Error) -> Self {
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => AbbrevError::io(path, source),
            _ => AbbrevError::input_format(path, reason),
        }
    }
}
