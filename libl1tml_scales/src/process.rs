use super::config::Config;
use super::error::ProcessorError;
use super::header_writer::HeaderWriter;
use super::scaler::ScalerParams;

/// The main pass of the scales generator.
///
/// Takes a config and performs the full transform: load the fitted scaler,
/// validate it, invert the scale vector, and write the firmware header. The
/// pass is single-shot; on any error the destination header is left untouched.
pub fn process(config: &Config) -> Result<(), ProcessorError> {
    let scaler_path = config.get_scaler_file()?;
    let output_path = config.get_output_file()?;

    log::info!(
        "Reading scaler parameters from {}...",
        scaler_path.to_string_lossy()
    );
    let params = ScalerParams::from_json_file(&scaler_path)?;
    log::info!("Scaler covers {} input features.", params.n_features());

    if let Some(expected) = config.n_inputs {
        if params.n_features() != expected {
            return Err(ProcessorError::WrongFeatureCount {
                expected,
                found: params.n_features(),
            });
        }
    }

    let coefficients = params.to_coefficients()?;
    for warning in coefficients.firmware_precision_report() {
        log::warn!("{warning}");
    }

    log::info!(
        "Writing scales header to {}...",
        output_path.to_string_lossy()
    );
    HeaderWriter::new(&output_path).write(&coefficients)?;

    Ok(())
}
