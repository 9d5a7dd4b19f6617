use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CostResult<T> = Result<T, CostError>;
