use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::model::Label;
use crate::FlavorError;

/// Record fields that carry the label rather than a feature value.
const RESERVED_FIELDS: [&str; 2] = ["flavor", "texture"];

/// A flat training record as it appears on disk: label fields plus
/// arbitrary named numeric features.
type Record = BTreeMap<String, Value>;

/// One labeled training sample.
///
/// Feature pairs are kept sorted by name so that row contents compare and
/// enumerate deterministically regardless of the source format.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRow {
    pub label: Label,
    pub features: Vec<(String, f64)>,
}

impl TrainingRow {
    /// Creates a row from a label pair and named feature values.
    pub fn new(flavor: &str, texture: &str, features: &[(&str, f64)]) -> Self {
        let mut features: Vec<(String, f64)> = features
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        features.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            label: Label::new(flavor, texture),
            features,
        }
    }

    /// Returns the value of the named feature, if the row carries it.
    pub fn feature(&self, name: &str) -> Option<f64> {
        self.features
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

/// Supplies labeled training rows to [`FlavorModel::build`].
///
/// Implementations cover the two common cases: rows already in memory
/// ([`MemorySource`], tests/ephemeral) and rows loaded from a record file
/// ([`FileSource`]).
///
/// [`FlavorModel::build`]: crate::FlavorModel::build
pub trait TrainingSource {
    /// Returns all training rows in their source order.
    fn rows(&self) -> Result<Vec<TrainingRow>, FlavorError>;
}

/// In-memory [`TrainingSource`] implementation.
pub struct MemorySource {
    rows: Vec<TrainingRow>,
}

impl MemorySource {
    pub fn new(rows: Vec<TrainingRow>) -> Self {
        Self { rows }
    }
}

impl TrainingSource for MemorySource {
    fn rows(&self) -> Result<Vec<TrainingRow>, FlavorError> {
        Ok(self.rows.clone())
    }
}

/// Loads training rows from a YAML or JSON file.
///
/// The file holds an array of flat records. The string fields `flavor` and
/// `texture` form the label; every other field must be numeric and becomes
/// a feature.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrainingSource for FileSource {
    fn rows(&self) -> Result<Vec<TrainingRow>, FlavorError> {
        let path = self.path.display().to_string();
        let ext = self
            .path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        if !matches!(ext, "json" | "yaml" | "yml") {
            return Err(FlavorError::UnsupportedFormat { path });
        }

        let data = fs::read_to_string(&self.path).map_err(|source| FlavorError::Io {
            path: path.clone(),
            source,
        })?;

        let records: Vec<Record> = if ext == "json" {
            serde_json::from_str(&data).map_err(|e| FlavorError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&data).map_err(|e| FlavorError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?
        };

        rows_from_records(records)
    }
}

/// Parses training rows from YAML text (an array of flat records).
pub fn rows_from_yaml(data: &str) -> Result<Vec<TrainingRow>, FlavorError> {
    let records: Vec<Record> = serde_yaml::from_str(data).map_err(|e| FlavorError::Parse {
        path: "<yaml>".to_string(),
        reason: e.to_string(),
    })?;
    rows_from_records(records)
}

/// Parses training rows from JSON text (an array of flat records).
pub fn rows_from_json(data: &str) -> Result<Vec<TrainingRow>, FlavorError> {
    let records: Vec<Record> = serde_json::from_str(data).map_err(|e| FlavorError::Parse {
        path: "<json>".to_string(),
        reason: e.to_string(),
    })?;
    rows_from_records(records)
}

fn rows_from_records(records: Vec<Record>) -> Result<Vec<TrainingRow>, FlavorError> {
    let mut rows = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        rows.push(row_from_record(i, record)?);
    }
    Ok(rows)
}

fn row_from_record(row: usize, record: Record) -> Result<TrainingRow, FlavorError> {
    let label_field = |name: &str| -> Result<String, FlavorError> {
        record
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FlavorError::MalformedRow {
                row,
                reason: format!("missing string field {name:?}"),
            })
    };
    let flavor = label_field("flavor")?;
    let texture = label_field("texture")?;

    // BTreeMap iteration keeps the feature pairs sorted by name.
    let mut features = Vec::with_capacity(record.len().saturating_sub(RESERVED_FIELDS.len()));
    for (name, value) in &record {
        if RESERVED_FIELDS.contains(&name.as_str()) {
            continue;
        }
        let value = value.as_f64().ok_or_else(|| FlavorError::MalformedRow {
            row,
            reason: format!("feature {name:?} is not a number"),
        })?;
        features.push((name.clone(), value));
    }

    Ok(TrainingRow {
        label: Label::new(&flavor, &texture),
        features,
    })
}
