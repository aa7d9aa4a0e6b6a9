use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Invalid cycle rate: {0:?}")]
    InvalidCycleRate(String),

    #[error("Cycle rate must be positive, got {0}")]
    NonPositiveCycleRate(i64),

    #[error("Unrecognised message type: {0:?}")]
    UnknownMessage(String),

    #[error("{0:?} message without a payload")]
    MissingPayload(String),
}
