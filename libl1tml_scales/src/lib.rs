//! # l1tml_scales
//!
//! l1tml_scales is the offline scales generator for the L1T ML demo firmware,
//! written in Rust. It takes the standard scaler fitted in the offline training
//! step (per-feature mean and scale), inverts the scale vector, and writes both
//! vectors as fixed-size C arrays into `scales.h`, the header compiled into the
//! HLS Scaler module that standardizes inputs ahead of the neural network.
//!
//! The firmware computes `X_scaled[i] = (X_unscaled[i] - bias[i]) * scale[i]`,
//! so the generator emits `scale[i] = 1 / scale_[i]` and `bias[i] = mean_[i]`.
//! Multiplication is what the hardware can afford; the division happens here,
//! once, offline.
//!
//! ## Installation
//!
//! Install the CLI from the top level repository with
//! `cargo install --path ./l1tml_scales_cli`. The binary lands in your cargo
//! install location (typically `~/.cargo/bin/`) and can be uninstalled with
//! `cargo uninstall l1tml_scales_cli`.
//!
//! ## Configuration
//!
//! The generator is driven by a YAML configuration file. A template can be
//! produced with the CLI `new` subcommand. The format is as follows:
//!
//! ```yml
//! root_path: /path/to/mlatl1t
//! scaler_path: null
//! output_path: null
//! n_inputs: 56
//! ```
//!
//! - `root_path`: the top of the demo working tree. The scaler is read from
//!   `<root_path>/part1_outputs/hwScaler.json` and the header is written to
//!   `<root_path>/part3/firmware/Scaler/hls/scales.h` unless overridden.
//! - `scaler_path` (optional): explicit path to the exported scaler JSON.
//! - `output_path` (optional): explicit path for the generated header.
//! - `n_inputs` (optional): the `N_INPUTS` constant of the firmware's
//!   `defines.h`. When set, the generator refuses to write a header whose
//!   arrays would not match the firmware's expected length.
//!
//! ## Input format
//!
//! The fitting step exports the scaler attributes as a JSON object, keys kept
//! verbatim:
//!
//! ```json
//! {"mean_": [1.5, -0.5], "scale_": [2.0, 4.0]}
//! ```
//!
//! ## Output
//!
//! A single header, fully overwritten on each run (staged and renamed, so a
//! failed run never truncates it):
//!
//! ```c
//! #ifndef L1TMLDEMO_SCALES_H_
//! #define L1TMLDEMO_SCALES_H_
//! #include "defines.h"
//!
//! static const scale_t scale[N_INPUTS] = {0.5,0.25};
//! static const bias_t bias[N_INPUTS] = {1.5,-0.5};
//!
//! #endif
//! ```
//!
//! Values are printed at full f64 precision. The firmware stores them as
//! `ap_fixed<16,6>`; coefficients that would saturate or quantize to zero in
//! that type are reported as warnings in the log.
pub mod config;
pub mod constants;
pub mod error;
pub mod header_writer;
pub mod process;
pub mod scaler;
