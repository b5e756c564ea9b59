use std::collections::HashMap;
use std::path::Path;

use crate::spectrum::Spectrum;
use crate::SpectrumError;

/// A named wavelength band: the composition feature it estimates and the
/// wavelengths whose mean intensity stands in for it.
#[derive(Debug, Clone)]
pub struct Band {
    pub name: String,
    pub wavelengths: Vec<f64>,
}

impl Band {
    pub fn new(name: &str, wavelengths: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            wavelengths: wavelengths.to_vec(),
        }
    }
}

/// Configures spectrum-to-composition estimation.
///
/// The default bands are illustrative overtone regions, not calibration
/// data: water 960/970 nm, sugar 940 nm, fat 930 nm, protein 1000 nm.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub bands: Vec<Band>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            bands: vec![
                Band::new("water", &[960.0, 970.0]),
                Band::new("sugar", &[940.0]),
                Band::new("fat", &[930.0]),
                Band::new("protein", &[1000.0]),
            ],
        }
    }
}

/// Estimates a chemical composition from a spectrum.
///
/// Each band's mean intensity is normalized by the sum over all bands, so
/// the returned fractions add up to 1.0. An all-zero spectrum divides by
/// 1.0 instead and yields an all-zero composition rather than an error.
pub fn estimate_composition(spectrum: &Spectrum, cfg: &ScanConfig) -> HashMap<String, f64> {
    let raw: Vec<(String, f64)> = cfg
        .bands
        .iter()
        .map(|band| (band.name.clone(), spectrum.band_mean(&band.wavelengths)))
        .collect();

    let mut total: f64 = raw.iter().map(|(_, v)| v).sum();
    if total == 0.0 {
        total = 1.0;
    }

    raw.into_iter().map(|(name, v)| (name, v / total)).collect()
}

/// Loads a spectrum file and estimates its composition in one step.
pub fn scan_file(
    path: impl AsRef<Path>,
    cfg: &ScanConfig,
) -> Result<HashMap<String, f64>, SpectrumError> {
    let spectrum = Spectrum::load(path)?;
    Ok(estimate_composition(&spectrum, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::SpectrumSample;

    fn spectrum() -> Spectrum {
        Spectrum::new(vec![
            SpectrumSample { wavelength: 930.0, intensity: 0.1 },
            SpectrumSample { wavelength: 940.0, intensity: 0.2 },
            SpectrumSample { wavelength: 960.0, intensity: 0.5 },
            SpectrumSample { wavelength: 970.0, intensity: 0.3 },
            SpectrumSample { wavelength: 1000.0, intensity: 0.1 },
        ])
    }

    #[test]
    fn estimate_normalizes_to_unit_sum() {
        let comp = estimate_composition(&spectrum(), &ScanConfig::default());
        assert_eq!(comp.len(), 4);

        let total: f64 = comp.values().sum();
        assert!((total - 1.0).abs() < 1e-12, "fractions should sum to 1, got {total}");

        // water band mean = (0.5 + 0.3) / 2 = 0.4; total raw = 0.8.
        assert!((comp["water"] - 0.5).abs() < 1e-12);
        assert!((comp["sugar"] - 0.25).abs() < 1e-12);
        assert!((comp["fat"] - 0.125).abs() < 1e-12);
        assert!((comp["protein"] - 0.125).abs() < 1e-12);
    }

    #[test]
    fn all_zero_spectrum_yields_zero_composition() {
        let comp = estimate_composition(&Spectrum::default(), &ScanConfig::default());
        assert_eq!(comp.len(), 4);
        assert!(comp.values().all(|&v| v == 0.0));
    }

    #[test]
    fn custom_bands() {
        let cfg = ScanConfig {
            bands: vec![Band::new("acid", &[930.0, 940.0])],
        };
        let comp = estimate_composition(&spectrum(), &cfg);
        assert_eq!(comp.len(), 1);
        // Only one band, so it normalizes to the whole.
        assert!((comp["acid"] - 1.0).abs() < 1e-12);
    }
}
