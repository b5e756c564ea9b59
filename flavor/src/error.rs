use thiserror::Error;

/// Errors returned when loading training data or building a flavor model.
#[derive(Debug, Error)]
pub enum FlavorError {
    #[error("training dataset is empty")]
    EmptyDataset,

    #[error("malformed training row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("unsupported training data format: {path}")]
    UnsupportedFormat { path: String },
}
