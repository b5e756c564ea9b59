use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::SpectrumError;

/// A single spectral sample: wavelength in nanometers and the measured
/// relative intensity at that wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSample {
    pub wavelength: f64,
    pub intensity: f64,
}

/// A loaded spectrum.
///
/// Wavelength lookups are exact: readings come straight from the source
/// file and queries use the same calibration wavelengths, so no
/// interpolation is done. Absent wavelengths read as 0.0.
#[derive(Debug, Clone, Default)]
pub struct Spectrum {
    samples: Vec<SpectrumSample>,
}

impl Spectrum {
    pub fn new(samples: Vec<SpectrumSample>) -> Self {
        Self { samples }
    }

    /// Loads a spectrum from a YAML or JSON file holding an array of
    /// [`SpectrumSample`] records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpectrumError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let display = path.display().to_string();

        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        if !matches!(ext, "json" | "yaml" | "yml") {
            return Err(SpectrumError::UnsupportedFormat { path: display });
        }

        let data = fs::read_to_string(&path).map_err(|source| SpectrumError::Io {
            path: display.clone(),
            source,
        })?;

        if ext == "json" {
            Self::from_json(&data).map_err(|e| rename(e, &display))
        } else {
            Self::from_yaml(&data).map_err(|e| rename(e, &display))
        }
    }

    /// Parses a spectrum from YAML text.
    pub fn from_yaml(data: &str) -> Result<Self, SpectrumError> {
        let samples: Vec<SpectrumSample> =
            serde_yaml::from_str(data).map_err(|e| SpectrumError::Parse {
                path: "<yaml>".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(samples))
    }

    /// Parses a spectrum from JSON text.
    pub fn from_json(data: &str) -> Result<Self, SpectrumError> {
        let samples: Vec<SpectrumSample> =
            serde_json::from_str(data).map_err(|e| SpectrumError::Parse {
                path: "<json>".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(samples))
    }

    /// Returns the intensity at the given wavelength, or 0.0 when the
    /// spectrum holds no reading for it.
    pub fn intensity(&self, wavelength: f64) -> f64 {
        self.samples
            .iter()
            .find(|s| s.wavelength == wavelength)
            .map(|s| s.intensity)
            .unwrap_or(0.0)
    }

    /// Mean intensity over the listed wavelengths. Wavelengths without a
    /// reading contribute 0.0 to the mean.
    pub fn band_mean(&self, wavelengths: &[f64]) -> f64 {
        if wavelengths.is_empty() {
            return 0.0;
        }
        let sum: f64 = wavelengths.iter().map(|&nm| self.intensity(nm)).sum();
        sum / wavelengths.len() as f64
    }

    pub fn samples(&self) -> &[SpectrumSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn rename(err: SpectrumError, path: &str) -> SpectrumError {
    match err {
        SpectrumError::Parse { reason, .. } => SpectrumError::Parse {
            path: path.to_string(),
            reason,
        },
        other => other,
    }
}
