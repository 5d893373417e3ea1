use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("dataset error: {0}")]
    Dataset(#[from] dataset::DatasetError),
    #[error("engine error: {0}")]
    Engine(#[from] engine::EngineError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export error: {0}")]
    Export(#[from] csv::Error),
    #[error("terminal error: {0}")]
    Terminal(String),
    #[error("the dataset contains no trips")]
    NoTrips,
}
