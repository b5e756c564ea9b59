//! Flavor and texture prediction via nearest-centroid matching over named
//! composition features.
//!
//! Training rows (label + numeric features) are grouped by label and each
//! group is averaged into a centroid; a query composition is matched to the
//! centroid with the smallest squared Euclidean distance.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use virtaste_flavor::{Config, FlavorModel, TrainingRow};
//!
//! let rows = vec![
//!     TrainingRow::new("sweet", "smooth", &[("water", 0.7), ("sugar", 0.2)]),
//!     TrainingRow::new("sour", "crisp", &[("water", 0.3), ("sugar", 0.05)]),
//! ];
//! let model = FlavorModel::build(Config::default(), &rows).unwrap();
//!
//! let composition = HashMap::from([
//!     ("water".to_string(), 0.65),
//!     ("sugar".to_string(), 0.18),
//! ]);
//! assert_eq!(model.predict(&composition).flavor, "sweet");
//! ```
//!
//! # Design
//!
//! [`FlavorModel::predict`] is total — it never errors. Features absent
//! from the query default to 0.0, unknown keys are ignored, and an empty
//! model answers with the `unknown/unknown` sentinel. Centroids are kept in
//! first-appearance label order and scanned with a strict `<`, so exact
//! distance ties always resolve to the earliest-built centroid instead of
//! depending on map iteration order.

mod dataset;
mod distance;
mod error;
mod model;

pub use dataset::{
    rows_from_json, rows_from_yaml, FileSource, MemorySource, TrainingRow, TrainingSource,
};
pub use error::FlavorError;
pub use model::{Centroid, Config, FlavorModel, Label};
