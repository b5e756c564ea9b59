use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{TrainingRow, TrainingSource};
use crate::distance::squared_euclidean;
use crate::FlavorError;

/// A flavor/texture label pair. Equality is exact pair match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub flavor: String,
    pub texture: String,
}

impl Label {
    pub fn new(flavor: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            flavor: flavor.into(),
            texture: texture.into(),
        }
    }

    /// The sentinel returned when no centroid exists to match against.
    pub fn unknown() -> Self {
        Self::new("unknown", "unknown")
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.flavor, self.texture)
    }
}

/// Mean feature vector over all training rows sharing one label.
#[derive(Debug, Clone)]
pub struct Centroid {
    pub label: Label,

    /// Per-feature arithmetic mean, in the model's canonical feature order.
    pub values: Vec<f64>,

    /// Number of training rows aggregated into this centroid.
    pub count: usize,
}

/// Controls model construction.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Canonical feature order. When empty, the order is derived from the
    /// first training row (feature names sorted).
    pub features: Vec<String>,
}

/// Nearest-centroid classifier over named composition features.
///
/// Read-only once built: all fields are owned and nothing is mutated after
/// [`FlavorModel::build`] returns, so shared references can be queried from
/// multiple threads without synchronization.
#[derive(Debug)]
pub struct FlavorModel {
    features: Vec<String>,
    // First-appearance order of labels in the training data. predict scans
    // this in order with a strict `<`, which makes exact-tie resolution
    // deterministic: the earliest-built centroid wins.
    centroids: Vec<Centroid>,
}

impl FlavorModel {
    /// Builds a model by grouping rows per label and averaging each group's
    /// feature vectors into a centroid.
    ///
    /// # Errors
    /// - [`FlavorError::EmptyDataset`] when `rows` is empty.
    /// - [`FlavorError::MalformedRow`] when a row lacks one of the declared
    ///   features. Missing-feature leniency belongs to prediction only.
    pub fn build(cfg: Config, rows: &[TrainingRow]) -> Result<Self, FlavorError> {
        if rows.is_empty() {
            return Err(FlavorError::EmptyDataset);
        }

        let features: Vec<String> = if cfg.features.is_empty() {
            rows[0].features.iter().map(|(name, _)| name.clone()).collect()
        } else {
            cfg.features
        };

        let mut centroids: Vec<Centroid> = Vec::new();
        let mut index: HashMap<Label, usize> = HashMap::new();

        for (i, row) in rows.iter().enumerate() {
            let mut vector = Vec::with_capacity(features.len());
            for name in &features {
                let value = row.feature(name).ok_or_else(|| FlavorError::MalformedRow {
                    row: i,
                    reason: format!("missing feature {name:?}"),
                })?;
                vector.push(value);
            }

            let idx = match index.get(&row.label) {
                Some(&idx) => idx,
                None => {
                    centroids.push(Centroid {
                        label: row.label.clone(),
                        values: vec![0.0; features.len()],
                        count: 0,
                    });
                    index.insert(row.label.clone(), centroids.len() - 1);
                    centroids.len() - 1
                }
            };
            let centroid = &mut centroids[idx];
            for (d, value) in vector.iter().enumerate() {
                centroid.values[d] += value;
            }
            centroid.count += 1;
        }

        for centroid in &mut centroids {
            let n = centroid.count as f64;
            for value in &mut centroid.values {
                *value /= n;
            }
        }

        Ok(Self {
            features,
            centroids,
        })
    }

    /// Builds a model from a [`TrainingSource`].
    pub fn from_source(
        cfg: Config,
        source: &dyn TrainingSource,
    ) -> Result<Self, FlavorError> {
        let rows = source.rows()?;
        Self::build(cfg, &rows)
    }

    /// A model with no centroids. [`FlavorModel::predict`] on it always
    /// returns [`Label::unknown`].
    pub fn empty() -> Self {
        Self {
            features: Vec::new(),
            centroids: Vec::new(),
        }
    }

    /// Returns the label of the centroid nearest to `composition` by
    /// squared Euclidean distance.
    ///
    /// Never fails:
    /// - features absent from `composition` are read as 0.0,
    /// - keys absent from the model's feature set are ignored,
    /// - with no centroids the [`Label::unknown`] sentinel is returned,
    /// - exact distance ties resolve to the centroid whose label appeared
    ///   first in the training data.
    pub fn predict(&self, composition: &HashMap<String, f64>) -> Label {
        let query: Vec<f64> = self
            .features
            .iter()
            .map(|name| composition.get(name).copied().unwrap_or(0.0))
            .collect();

        let mut best_dist = f64::INFINITY;
        let mut best: Option<&Centroid> = None;
        for centroid in &self.centroids {
            let dist = squared_euclidean(&query, &centroid.values);
            if dist < best_dist {
                best_dist = dist;
                best = Some(centroid);
            }
        }

        match best {
            Some(centroid) => centroid.label.clone(),
            None => Label::unknown(),
        }
    }

    /// Canonical feature order established at build time.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// All centroids, in first-appearance label order.
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    /// Returns the centroid for a given label, or None if not found.
    pub fn centroid_of(&self, label: &Label) -> Option<&Centroid> {
        self.centroids.iter().find(|c| &c.label == label)
    }

    /// Returns true if the model holds no centroids.
    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }
}
