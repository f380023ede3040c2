//! Names and values shared between the generator and the firmware sources.

/// Include guard of the generated header
pub const HEADER_GUARD: &str = "L1TMLDEMO_SCALES_H_";
/// Companion header defining N_INPUTS and the coefficient types
pub const DEFINES_INCLUDE: &str = "defines.h";
/// C type of the multiplicative coefficients
pub const SCALE_TYPE: &str = "scale_t";
/// C type of the additive coefficients
pub const BIAS_TYPE: &str = "bias_t";
/// Array-length macro, defined in the companion header
pub const ARRAY_LENGTH_MACRO: &str = "N_INPUTS";

/// Location of the fitted scaler under the root directory, as exported by the fitting step
pub const DEFAULT_SCALER_SUFFIX: &str = "part1_outputs/hwScaler.json";
/// Location of the generated header under the root directory
pub const DEFAULT_OUTPUT_SUFFIX: &str = "part3/firmware/Scaler/hls/scales.h";

// scale_t and bias_t are ap_fixed<16,6> in the firmware
/// Magnitude at which a coefficient saturates in the firmware type, 2^5
pub const COEFF_MAX: f64 = 32.0;
/// Smallest nonzero magnitude the firmware type can hold, 2^-10
pub const COEFF_RESOLUTION: f64 = 0.0009765625;
