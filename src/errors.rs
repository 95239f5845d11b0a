use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Record {index} references arm {arm_id} outside of [0, {n_arms})")]
    DomainError {
        index: usize,
        arm_id: usize,
        n_arms: usize,
    },
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error while reading log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed log record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Log contains no arms")]
    NoArms,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
