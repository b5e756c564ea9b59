//! NIR spectrum loading and heuristic chemical composition estimation.
//!
//! Stands in for a real spectrometer: a spectrum file (wavelength,
//! intensity records) is reduced to a named composition vector by averaging
//! intensity over a few illustrative wavelength bands and normalizing. Real
//! instruments would substitute calibration models here; the output shape
//! (feature name -> fraction) is what downstream classification consumes.

mod composition;
mod error;
mod spectrum;

pub use composition::{estimate_composition, scan_file, Band, ScanConfig};
pub use error::SpectrumError;
pub use spectrum::{Spectrum, SpectrumSample};
