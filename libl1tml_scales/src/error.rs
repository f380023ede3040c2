use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ScalerError {
    #[error("Could not load scaler parameters because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Scaler parameters failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Scaler parameters failed to parse JSON: {0}")]
    ParsingError(#[from] serde_json::Error),
    #[error("Scaler parameters contain no features")]
    EmptyScaler,
    #[error("Scaler parameters have mismatched lengths -- mean: {0} scale: {1}")]
    MismatchedLengths(usize, usize),
    #[error("Scaler parameters contain uninvertible scale value {1} for feature {0}")]
    InvalidScaleValue(usize, f64),
}

#[derive(Debug, Error)]
pub enum HeaderWriterError {
    #[error("HeaderWriter failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Processor failed due to Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Processor failed due to Scaler error: {0}")]
    ScalerError(#[from] ScalerError),
    #[error("Processor failed due to HeaderWriter error: {0}")]
    WriterError(#[from] HeaderWriterError),
    #[error("Processor expected {expected} input features but the scaler covers {found}")]
    WrongFeatureCount { expected: usize, found: usize },
}
