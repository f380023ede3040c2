use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::constants::{COEFF_MAX, COEFF_RESOLUTION};
use super::error::ScalerError;

/// The attributes of the fitted standard scaler, as exported by the offline
/// fitting step.
///
/// The exporter dumps the scaler's `mean_` and `scale_` attributes verbatim into
/// a JSON object, so the keys keep their trailing underscores on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerParams {
    #[serde(rename = "mean_")]
    pub mean: Vec<f64>,
    #[serde(rename = "scale_")]
    pub scale: Vec<f64>,
}

impl ScalerParams {
    /// Load scaler parameters from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ScalerError> {
        if !path.exists() {
            return Err(ScalerError::BadFilePath(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader::<_, Self>(reader)?)
    }

    /// Number of input features covered by this scaler
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Invert the scaler into the coefficients used by the firmware.
    ///
    /// The firmware multiplies instead of dividing, so the scale vector is
    /// inverted element-wise and the mean passes through as the bias. The scaler
    /// is validated first: both vectors must be non-empty and of equal length,
    /// and every scale entry must be finite and strictly positive. A zero scale
    /// would come from a constant feature upstream and is rejected rather than
    /// emitted as an inf literal.
    pub fn to_coefficients(&self) -> Result<Coefficients, ScalerError> {
        if self.mean.is_empty() {
            return Err(ScalerError::EmptyScaler);
        }
        if self.mean.len() != self.scale.len() {
            return Err(ScalerError::MismatchedLengths(
                self.mean.len(),
                self.scale.len(),
            ));
        }
        for (feature, value) in self.scale.iter().enumerate() {
            if !value.is_finite() || *value <= 0.0 {
                return Err(ScalerError::InvalidScaleValue(feature, *value));
            }
        }

        Ok(Coefficients {
            scale: self.scale.iter().map(|s| 1.0 / s).collect(),
            bias: self.mean.clone(),
        })
    }
}

/// Per-feature coefficients in the form consumed by the firmware Scaler module:
/// standardized = (raw - bias) * scale
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    pub scale: Vec<f64>,
    pub bias: Vec<f64>,
}

impl Coefficients {
    /// Number of input features covered by these coefficients
    pub fn n_features(&self) -> usize {
        self.scale.len()
    }

    /// Apply the firmware arithmetic to a raw input vector.
    ///
    /// Mirrors the HLS Scaler loop, so generated coefficients can be checked
    /// against reference standardization offline.
    pub fn standardize(&self, raw: &[f64]) -> Vec<f64> {
        raw.iter()
            .zip(self.scale.iter().zip(self.bias.iter()))
            .map(|(x, (s, b))| (x - b) * s)
            .collect()
    }

    /// Flag coefficients the firmware's fixed-point type cannot hold faithfully.
    ///
    /// The header is written at full precision, but the firmware stores both
    /// arrays as ap_fixed<16,6>: magnitudes at or beyond 2^5 saturate and
    /// nonzero magnitudes below 2^-10 quantize to zero.
    pub fn firmware_precision_report(&self) -> Vec<CoeffWarning> {
        let mut warnings: Vec<CoeffWarning> = Vec::new();
        for (name, values) in [("scale", &self.scale), ("bias", &self.bias)] {
            for (feature, value) in values.iter().enumerate() {
                if value.abs() >= COEFF_MAX {
                    warnings.push(CoeffWarning::Saturates(name, feature, *value));
                } else if *value != 0.0 && value.abs() < COEFF_RESOLUTION {
                    warnings.push(CoeffWarning::QuantizesToZero(name, feature, *value));
                }
            }
        }
        warnings
    }
}

/// A coefficient that loses its value in the firmware's fixed-point type
#[derive(Debug, Clone, PartialEq)]
pub enum CoeffWarning {
    Saturates(&'static str, usize, f64),
    QuantizesToZero(&'static str, usize, f64),
}

impl std::fmt::Display for CoeffWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoeffWarning::Saturates(name, feature, value) => write!(
                f,
                "{name}[{feature}] = {value} saturates in the firmware type (limit {COEFF_MAX})"
            ),
            CoeffWarning::QuantizesToZero(name, feature, value) => write!(
                f,
                "{name}[{feature}] = {value} quantizes to zero in the firmware type (resolution {COEFF_RESOLUTION})"
            ),
        }
    }
}
