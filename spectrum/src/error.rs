use thiserror::Error;

/// Errors returned when loading a spectrum file.
#[derive(Debug, Error)]
pub enum SpectrumError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("unsupported spectrum format: {path}")]
    UnsupportedFormat { path: String },
}
